// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// CLIENT EVENTS
// ============================================================================

/// Emitted when a new Client is registered with the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRegistered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub client_email: String,
    pub client_name: String,
}

impl ClientRegistered {
    pub fn new(client_email: String, client_name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            client_email,
            client_name,
        }
    }
}

impl DomainEvent for ClientRegistered {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ClientRegistered" }
}

/// Emitted after funds are added to a client's balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub client_email: String,
    pub amount: Decimal,
    pub new_balance: Decimal,
}

impl BalanceAdded {
    pub fn new(client_email: String, amount: Decimal, new_balance: Decimal) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            client_email,
            amount,
            new_balance,
        }
    }
}

impl DomainEvent for BalanceAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "BalanceAdded" }
}

// ============================================================================
// PURCHASE EVENTS
// ============================================================================

/// Emitted after a purchase completed (price debited, game in library)
/// Never emitted for a rejected purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePurchased {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub client_email: String,
    pub game_name: String,
    pub price: Decimal,
    pub remaining_balance: Decimal,
}

impl GamePurchased {
    pub fn new(
        client_email: String,
        game_name: String,
        price: Decimal,
        remaining_balance: Decimal,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            client_email,
            game_name,
            price,
            remaining_balance,
        }
    }
}

impl DomainEvent for GamePurchased {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "GamePurchased" }
}
