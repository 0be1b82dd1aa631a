//! Application-level wrapper around the `Inventory` aggregate.
//!
//! Every mutation runs the same pipeline: build a command, let the aggregate
//! decide events, apply them, and append each one to the journal. Queries
//! read the aggregate directly.

use chrono::Utc;
use uuid::Uuid;

use drinkstock_core::{Aggregate, AggregateRoot, InventoryId};
use drinkstock_events::{Event, EventEnvelope};

use crate::drink::Drink;
use crate::inventory::{AddDrink, Inventory, InventoryCommand, InventoryEvent, RemoveDrink};

const AGGREGATE_TYPE: &str = "inventory";

/// The process-wide drink inventory.
///
/// Construct one per session and hand it to whatever drives it; there is no
/// global instance.
#[derive(Debug)]
pub struct InventoryService {
    inventory: Inventory,
    journal: Vec<EventEnvelope<InventoryEvent>>,
}

impl InventoryService {
    pub fn new() -> Self {
        Self::with_id(InventoryId::new())
    }

    pub fn with_id(id: InventoryId) -> Self {
        Self {
            inventory: Inventory::empty(id),
            journal: Vec::new(),
        }
    }

    /// Rebuild a service by replaying journaled events onto an empty inventory.
    pub fn replay(
        id: InventoryId,
        history: impl IntoIterator<Item = EventEnvelope<InventoryEvent>>,
    ) -> Self {
        let mut service = Self::with_id(id);
        for envelope in history {
            service.record(envelope.into_payload());
        }
        service
    }

    pub fn id(&self) -> InventoryId {
        *self.inventory.id()
    }

    /// Append a drink. Always succeeds.
    pub fn add(&mut self, name: impl Into<String>, category: impl Into<String>) {
        let command = InventoryCommand::AddDrink(AddDrink {
            name: name.into(),
            category: category.into(),
            occurred_at: Utc::now(),
        });
        self.execute(&command);
    }

    /// Remove every drink named exactly `name`, returning how many were removed.
    ///
    /// Zero matches is a no-op, not an error.
    pub fn remove(&mut self, name: &str) -> usize {
        let command = InventoryCommand::RemoveDrink(RemoveDrink {
            name: name.to_string(),
            occurred_at: Utc::now(),
        });

        self.execute(&command)
            .iter()
            .map(|event| match event {
                InventoryEvent::DrinksRemoved(e) => e.removed,
                InventoryEvent::DrinkAdded(_) => 0,
            })
            .sum()
    }

    pub fn list_by_category(&self, category: &str) -> Vec<Drink> {
        let drinks = self.inventory.list_by_category(category);
        tracing::debug!(category, matches = drinks.len(), "listed drinks by category");
        drinks
    }

    /// Drinks in insertion order.
    pub fn drinks(&self) -> &[Drink] {
        self.inventory.drinks()
    }

    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    /// Every event applied so far, oldest first.
    pub fn history(&self) -> &[EventEnvelope<InventoryEvent>] {
        &self.journal
    }

    fn execute(&mut self, command: &InventoryCommand) -> Vec<InventoryEvent> {
        let Ok(events) = self.inventory.handle(command);

        if events.is_empty() {
            tracing::debug!(?command, "command produced no events");
        }

        for event in &events {
            self.record(event.clone());
        }
        events
    }

    fn record(&mut self, event: InventoryEvent) {
        self.inventory.apply(&event);

        let sequence_number = self.inventory.version();
        tracing::info!(
            event_type = event.event_type(),
            sequence_number,
            occurred_at = %event.occurred_at(),
            drinks = self.inventory.len(),
            "applied inventory event"
        );

        self.journal.push(EventEnvelope::new(
            Uuid::now_v7(),
            self.id(),
            AGGREGATE_TYPE,
            sequence_number,
            event,
        ));
    }
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new()
    }
}
