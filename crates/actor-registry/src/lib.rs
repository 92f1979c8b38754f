//! In-memory actor registry for condition evaluation.
//!
//! `actor-registry` is the reference implementation of the
//! [`ActorRegistry`](condition_core::ActorRegistry) boundary: owned actor
//! records with inventories, resolvable by the distinguished `"player"`
//! reference or by NPC slug. Suitable for tests, tools, and hosts that keep
//! actor state in memory.
pub mod actor;
pub mod memory;

pub use actor::Actor;
pub use memory::InMemoryActorRegistry;
