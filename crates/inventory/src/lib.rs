//! Drink inventory domain module.
//!
//! Business rules for the drink list live in the `Inventory` aggregate as
//! deterministic domain logic (no IO). `InventoryService` owns one aggregate
//! and journals every applied event.

pub mod collation;
pub mod drink;
pub mod inventory;
pub mod service;

pub use drink::Drink;
pub use inventory::{
    AddDrink, DrinkAdded, DrinksRemoved, Inventory, InventoryCommand, InventoryEvent, RemoveDrink,
};
pub use service::InventoryService;
