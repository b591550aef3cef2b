// events/bus/event_bus.rs
//
// Core event bus implementation.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - handlers execute immediately in subscription order
// 2. Deterministic - same events → same result
// 3. Observable - every emission is logged
// 4. Type-safe - events are strongly typed

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use log::{error, info};

use crate::events::types::DomainEvent;

/// Type-erased event handler function
/// Takes a reference to Any (downcasted to concrete event type inside)
type EventHandler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// The Event Bus
///
/// Services emit events here; the demo driver and tests subscribe to them
/// without the services knowing who listens.
///
/// Key characteristics:
/// - Synchronous execution (no async, no threads)
/// - Handlers execute in subscription order
/// - Type-safe through generics
/// - Observable through logging
pub struct EventBus {
    /// Map from event TypeId to list of handlers
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,

    /// Event emission log (for debugging)
    event_log: Arc<RwLock<Vec<EventLogEntry>>>,
}

/// A logged event for debugging and tracing
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            event_log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Subscribe to a specific event type
    ///
    /// Handlers are executed in the order they are subscribed.
    ///
    /// Example:
    /// ```ignore
    /// bus.subscribe::<GamePurchased, _>(|event| {
    ///     println!("Bought: {}", event.game_name);
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<E>();

        let wrapped: EventHandler = Arc::new(move |event_any: &dyn Any| {
            if let Some(event) = event_any.downcast_ref::<E>() {
                handler(event);
            } else {
                error!(
                    "Failed to downcast event in handler for {}",
                    std::any::type_name::<E>()
                );
            }
        });

        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        handlers.entry(type_id).or_default().push(wrapped);
    }

    /// Emit an event
    ///
    /// This will:
    /// 1. Record the event in the event log
    /// 2. Execute all handlers for this event type (in subscription order)
    /// 3. Return immediately (synchronous)
    ///
    /// If a handler panics, the panic is caught and logged, but other handlers
    /// still execute. Handlers subscribed while the event is being handled
    /// only see later emissions.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let type_id = TypeId::of::<E>();

        // Snapshot the handlers so none run under the lock; a handler may subscribe
        let event_handlers: Vec<EventHandler> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
            .unwrap_or_default();

        let log_entry = EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id().to_string(),
            occurred_at: event.occurred_at().to_rfc3339(),
            handler_count: event_handlers.len(),
        };

        self.event_log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(log_entry.clone());

        info!(
            "[EVENT] {} (id: {}) | {} handlers",
            log_entry.event_type, log_entry.event_id, log_entry.handler_count
        );

        for (idx, handler) in event_handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler(&event as &dyn Any);
            }));

            if let Err(e) = result {
                error!(
                    "Handler {} for {} panicked: {:?}",
                    idx,
                    event.event_type(),
                    e
                );
            }
        }
    }

    /// Get the event log (for debugging)
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        self.event_log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clear the event log
    pub fn clear_event_log(&self) {
        self.event_log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Get the number of subscribers for a specific event type
    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        let type_id = TypeId::of::<E>();
        let handlers = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        handlers.get(&type_id).map(Vec::len).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Cloning shares the same handlers and log
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            event_log: Arc::clone(&self.event_log),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::*;
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn purchased(game: &str) -> GamePurchased {
        GamePurchased::new(
            "ana@x.com".to_string(),
            game.to_string(),
            Decimal::new(2000, 2),
            Decimal::new(8000, 2),
        )
    }

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.subscribe::<GamePurchased, _>(move |_event| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(purchased("Chess"));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_receives_event_data() {
        let bus = EventBus::new();
        let seen = Arc::new(RwLock::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        bus.subscribe::<GamePurchased, _>(move |event| {
            seen_clone.write().unwrap().push(event.game_name.clone());
        });

        bus.emit(purchased("Chess"));
        bus.emit(purchased("Go"));

        assert_eq!(*seen.read().unwrap(), vec!["Chess".to_string(), "Go".to_string()]);
    }

    #[test]
    fn test_multiple_handlers_execute_in_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(RwLock::new(Vec::new()));

        for n in 1..=3 {
            let seq = Arc::clone(&sequence);
            bus.subscribe::<BalanceAdded, _>(move |_| {
                seq.write().unwrap().push(n);
            });
        }

        bus.emit(BalanceAdded::new(
            "ana@x.com".to_string(),
            Decimal::TEN,
            Decimal::TEN,
        ));

        assert_eq!(*sequence.read().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_event_log_records_emissions() {
        let bus = EventBus::new();

        bus.emit(ClientRegistered::new("ana@x.com".to_string(), "Ana".to_string()));
        bus.emit(purchased("Chess"));

        let log = bus.get_event_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].event_type, "ClientRegistered");
        assert_eq!(log[1].event_type, "GamePurchased");
        assert_eq!(log[1].handler_count, 0);

        bus.clear_event_log();
        assert!(bus.get_event_log().is_empty());
    }

    #[test]
    fn test_subscriber_count() {
        let bus = EventBus::new();

        assert_eq!(bus.subscriber_count::<GamePurchased>(), 0);

        bus.subscribe::<GamePurchased, _>(|_| {});
        assert_eq!(bus.subscriber_count::<GamePurchased>(), 1);

        bus.subscribe::<GamePurchased, _>(|_| {});
        assert_eq!(bus.subscriber_count::<GamePurchased>(), 2);

        // Different event type
        assert_eq!(bus.subscriber_count::<BalanceAdded>(), 0);
    }

    #[test]
    fn test_clone_shares_handlers() {
        let bus = EventBus::new();
        let other = bus.clone();

        other.subscribe::<GamePurchased, _>(|_| {});
        assert_eq!(bus.subscriber_count::<GamePurchased>(), 1);
    }

    #[test]
    fn test_handler_panic_doesnt_break_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe::<GamePurchased, _>(|_| {
            panic!("Intentional panic");
        });

        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<GamePurchased, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(purchased("Chess"));

        // Second handler executed despite first one panicking
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_can_subscribe_during_emit() {
        let bus = Arc::new(EventBus::new());
        let deposits = Arc::new(AtomicUsize::new(0));

        let inner = Arc::clone(&bus);
        let deposits_clone = Arc::clone(&deposits);
        bus.subscribe::<GamePurchased, _>(move |_| {
            let counter = Arc::clone(&deposits_clone);
            inner.subscribe::<BalanceAdded, _>(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        });

        let (done_tx, done_rx) = std::sync::mpsc::channel();
        let emitter = Arc::clone(&bus);
        std::thread::spawn(move || {
            emitter.emit(purchased("Chess"));
            let _ = done_tx.send(());
        });

        assert!(
            done_rx.recv_timeout(std::time::Duration::from_secs(5)).is_ok(),
            "emit did not return"
        );
        assert_eq!(bus.subscriber_count::<BalanceAdded>(), 1);

        bus.emit(BalanceAdded::new(
            "ana@x.com".to_string(),
            Decimal::TEN,
            Decimal::TEN,
        ));
        assert_eq!(deposits.load(Ordering::SeqCst), 1);
    }
}
