// src/services/store_service.rs
use crate::domain::{Client, Game};
use crate::error::AppResult;
use crate::events::{BalanceAdded, ClientRegistered, EventBus, GamePurchased};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Store operations that publish domain events
///
/// Validation and the purchase rules live in the entities; this service
/// only runs them and announces what happened.
pub struct StoreService {
    event_bus: Arc<EventBus>,
}

impl StoreService {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self { event_bus }
    }

    pub fn register_client(
        &self,
        nome: impl Into<String>,
        email: impl Into<String>,
        saldo_inicial: Decimal,
    ) -> AppResult<Client> {
        let client = Client::new(nome, email, saldo_inicial)?;
        debug!("Registered client {}", client.email());

        self.event_bus.emit(ClientRegistered::new(
            client.email().to_string(),
            client.name().to_string(),
        ));

        Ok(client)
    }

    /// Add funds and return the new balance
    pub fn add_balance(&self, client: &mut Client, amount: Decimal) -> AppResult<Decimal> {
        if let Err(err) = client.add_balance(amount) {
            warn!("Deposit rejected for {}: {}", client.email(), err);
            return Err(err.into());
        }

        let new_balance = client.balance();
        debug!("Deposited {} for {}", amount, client.email());

        self.event_bus.emit(BalanceAdded::new(
            client.email().to_string(),
            amount,
            new_balance,
        ));

        Ok(new_balance)
    }

    /// Buy a game for a client; `GamePurchased` is emitted only on success
    pub fn purchase(&self, client: &mut Client, game: &Game) -> AppResult<()> {
        if let Err(err) = client.buy_game(game) {
            warn!("Purchase rejected for {}: {}", client.email(), err);
            return Err(err.into());
        }

        debug!("{} bought {}", client.email(), game.name());

        self.event_bus.emit(GamePurchased::new(
            client.email().to_string(),
            game.name().to_string(),
            game.price(),
            client.balance(),
        ));

        Ok(())
    }

    /// Client snapshot as pretty-printed JSON, library included
    pub fn export_client(&self, client: &Client) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(client)?)
    }

    /// Rebuild a client from JSON; the same validation as construction applies
    pub fn import_client(&self, json: &str) -> AppResult<Client> {
        let client: Client = serde_json::from_str(json)?;
        debug!("Imported client {}", client.email());
        Ok(client)
    }
}
