//! Host collaboration surface for the coffee buff core.
//!
//! The buff core runs inside a larger host simulation it does not control.
//! This crate defines the slice of that host the core is allowed to touch:
//! online players and their persisted attribute maps, the capability traits
//! through which external subsystems (thermal, satiation) are mutated, the
//! session view a tick observes, and the tick scheduler with its
//! registration tokens. Host builds satisfy these contracts with adapters;
//! tests satisfy them with in-memory doubles.

/// String-keyed, typed-get-with-default attribute storage.
pub mod attributes;
/// Capability traits for the external thermal and satiation subsystems.
pub mod capability;
/// Error types used throughout the crate.
pub mod error;
/// Player entities and identifiers.
pub mod player;
/// Tick registration and dispatch.
pub mod scheduler;
/// The read surface a tick callback observes.
pub mod session;

/// Re-export attribute storage types.
pub use attributes::{AttributeMap, AttributeValue};
/// Re-export capability traits and value types.
pub use capability::{FoodCategory, RestoreForm, SatiationCapability, ThermalCapability};
/// Re-export error types.
pub use error::{HostError, HostResult};
/// Re-export player types.
pub use player::{Player, PlayerId};
/// Re-export scheduler types.
pub use scheduler::{ListenerId, TickFn, TickScheduler};
/// Re-export of [`session::Session`].
pub use session::Session;
