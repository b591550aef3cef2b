// src/lib.rs
// GameStore - in-memory game store: clients, games and purchases
//
// Architecture:
// - Domain-centric: all business rules live in the entities
// - Valid by construction: every constructor, setter and deserializer validates
// - Event-driven: the store service announces what happened through the event bus
// - Explicit: no implicit behavior, no global state

pub mod domain;
pub mod error;
pub mod events;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    format_currency,
    validate_client,
    validate_game,
    AgeRating,
    // Client
    Client,
    CurrencyFormat,
    DomainError,
    DomainResult,
    // Game
    Game,
    GameDetails,
    LibraryReport,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    BalanceAdded, ClientRegistered, DomainEvent, EventBus, EventLogEntry, GamePurchased,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::StoreService;
