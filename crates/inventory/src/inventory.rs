use core::convert::Infallible;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use drinkstock_core::{Aggregate, AggregateRoot, InventoryId};
use drinkstock_events::Event;

use crate::collation;
use crate::drink::Drink;

/// Aggregate root: Inventory.
///
/// Holds drinks in insertion order. Listing never reorders the stored
/// records; it sorts a filtered copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    id: InventoryId,
    drinks: Vec<Drink>,
    version: u64,
}

impl Inventory {
    /// Create an empty inventory (also the starting point for journal replay).
    pub fn empty(id: InventoryId) -> Self {
        Self {
            id,
            drinks: Vec::new(),
            version: 0,
        }
    }

    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }

    /// Number of stored drinks with exactly this name.
    pub fn count_named(&self, name: &str) -> usize {
        self.drinks.iter().filter(|d| d.is_named(name)).count()
    }

    /// Drinks whose category equals `category` exactly, sorted by name in
    /// collation order. Equal names keep insertion order.
    pub fn list_by_category(&self, category: &str) -> Vec<Drink> {
        let mut matching: Vec<Drink> = self
            .drinks
            .iter()
            .filter(|d| d.is_in_category(category))
            .cloned()
            .collect();
        matching.sort_by(|a, b| collation::compare(a.name(), b.name()));
        matching
    }
}

impl AggregateRoot for Inventory {
    type Id = InventoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddDrink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDrink {
    pub name: String,
    pub category: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveDrink (every record with this exact name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveDrink {
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddDrink(AddDrink),
    RemoveDrink(RemoveDrink),
}

/// Event: DrinkAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkAdded {
    pub inventory_id: InventoryId,
    pub drink: Drink,
    pub occurred_at: DateTime<Utc>,
}

/// Event: DrinksRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinksRemoved {
    pub inventory_id: InventoryId,
    pub name: String,
    pub removed: usize,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    DrinkAdded(DrinkAdded),
    DrinksRemoved(DrinksRemoved),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::DrinkAdded(_) => "inventory.drink.added",
            InventoryEvent::DrinksRemoved(_) => "inventory.drink.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::DrinkAdded(e) => e.occurred_at,
            InventoryEvent::DrinksRemoved(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = Infallible;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::DrinkAdded(e) => {
                self.drinks.push(e.drink.clone());
            }
            InventoryEvent::DrinksRemoved(e) => {
                self.drinks.retain(|d| !d.is_named(&e.name));
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddDrink(cmd) => Ok(self.handle_add(cmd)),
            InventoryCommand::RemoveDrink(cmd) => Ok(self.handle_remove(cmd)),
        }
    }
}

impl Inventory {
    fn handle_add(&self, cmd: &AddDrink) -> Vec<InventoryEvent> {
        vec![InventoryEvent::DrinkAdded(DrinkAdded {
            inventory_id: self.id,
            drink: Drink::new(cmd.name.clone(), cmd.category.clone()),
            occurred_at: cmd.occurred_at,
        })]
    }

    fn handle_remove(&self, cmd: &RemoveDrink) -> Vec<InventoryEvent> {
        let removed = self.count_named(&cmd.name);
        if removed == 0 {
            return vec![];
        }
        vec![InventoryEvent::DrinksRemoved(DrinksRemoved {
            inventory_id: self.id,
            name: cmd.name.clone(),
            removed,
            occurred_at: cmd.occurred_at,
        })]
    }
}
