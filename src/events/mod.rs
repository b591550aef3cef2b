// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus module and is not exported

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Client
    BalanceAdded,
    ClientRegistered,
    // Purchase
    GamePurchased,
};

pub use bus::{EventBus, EventLogEntry};
