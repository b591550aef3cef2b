// src/main.rs
// Demo driver: a client deposits, buys games and lists the library

use std::sync::Arc;

use gamestore::domain::{Client, Game};
use gamestore::events::{EventBus, GamePurchased};
use gamestore::services::StoreService;
use gamestore::{format_currency, AppError};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. LOGGING
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. EVENTS
    let event_bus = Arc::new(EventBus::new());
    event_bus.subscribe::<GamePurchased, _>(|event| {
        println!(
            "Compra realizada com sucesso: {} ({})",
            event.game_name,
            format_currency(&event.price)
        );
    });

    // 3. SERVICES
    let store = StoreService::new(event_bus.clone());

    // 4. CATALOGUE
    let chess = Game::new("Chess", Decimal::new(2000, 2), "Board", 0)?;
    let hades = Game::new("Hades", Decimal::new(8999, 2), "Roguelike", 12)?;
    let celeste = Game::with_price("Celeste", Decimal::new(3699, 2))?;

    println!("{}", hades.details());

    // 5. SCENARIO
    let mut ana = store.register_client("Ana", "ana@x.com", Decimal::new(10000, 2))?;
    println!("{}", ana);

    store.purchase(&mut ana, &chess)?;
    report("Chess (segunda cópia)", store.purchase(&mut ana, &chess));
    report("Hades", store.purchase(&mut ana, &hades));

    store.add_balance(&mut ana, Decimal::new(5000, 2))?;
    store.purchase(&mut ana, &hades)?;
    store.purchase(&mut ana, &celeste)?;

    println!("{}", ana);
    println!("{}", ana.library_report());

    let bob = Client::named("Bob")?;
    println!("{}", bob.library_report());

    println!("{}", store.export_client(&ana)?);

    Ok(())
}

fn report(what: &str, result: Result<(), AppError>) {
    if let Err(err) = result {
        println!("Não foi possível comprar {}: {}", what, err);
    }
}
