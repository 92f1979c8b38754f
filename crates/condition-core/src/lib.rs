//! Parameterized inventory predicates for event and rules engines.
//!
//! `condition-core` defines the inventory quantity check: given an actor
//! reference, an item identifier, a comparison operator, and a threshold
//! quantity, resolve the actor's held quantity and report whether the
//! comparison holds. Evaluation is pure and synchronous; actor resolution is
//! injected through the [`ActorRegistry`] trait, and all state is read fresh
//! per call.
pub mod condition;
pub mod error;
pub mod inventory;
pub mod operator;
pub mod params;
pub mod registry;

pub use condition::{EventCondition, HasItemCondition, evaluate};
pub use error::{ConditionError, ErrorSeverity};
pub use inventory::{Inventory, InventoryView, ItemEntry};
pub use operator::CompareOp;
pub use params::CheckRequest;
pub use registry::{ActorRegistry, PLAYER_REF};
