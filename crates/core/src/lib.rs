//! `drinkstock-core`: domain building blocks shared by the drink inventory.
//!
//! Pure domain primitives only (no IO).

pub mod aggregate;
pub mod id;

pub use aggregate::{Aggregate, AggregateRoot};
pub use id::InventoryId;
