// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod client;
pub mod game;
pub mod money;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Game Domain
pub use game::{validate_game, AgeRating, Game, GameDetails, DEFAULT_CATEGORY};

// Client Domain
pub use client::{validate_client, Client, LibraryReport, DEFAULT_EMAIL};

// Money
pub use money::{format_currency, CurrencyFormat};

/// Placeholder name used by the defaulting constructors of both entities
pub const DEFAULT_NAME: &str = "Sem nome";

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use rust_decimal::Decimal;
use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Insufficient funds to buy {game}: price {price}, balance {balance}")]
    InsufficientFunds {
        game: String,
        price: Decimal,
        balance: Decimal,
    },

    #[error("Game already in library: {0}")]
    DuplicateOwnership(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Shared check for free-form text fields: rejects empty and whitespace-only input
pub(crate) fn require_not_blank(value: &str, message: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidArgument(message.to_string()));
    }
    Ok(())
}

/// Amounts of money held or charged can never be negative
pub(crate) fn require_non_negative(amount: Decimal, message: &str) -> DomainResult<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(DomainError::InvalidArgument(format!("{message}: {amount}")));
    }
    Ok(())
}
