//! Tick-driven coffee buff core.
//!
//! Applies two timed, decaying status effects to online players: a
//! body-warmth boost and a hunger-drain reduction. The effect windows
//! themselves (expiry timestamps and rate parameters) are written by the
//! granting logic into host-persisted player attributes; this crate only
//! reads them each tick and, while a window is open, pushes a proportional
//! per-tick adjustment through capability handles resolved once against the
//! host build. Missing capabilities disable the corresponding effect class
//! instead of failing.

/// Error types for the effect core.
pub mod error;
/// Module lifecycle: world-loaded hook, tick registration, disposal.
pub mod module;
/// One-time capability resolution against the host build.
pub mod resolver;
/// The per-tick effect application loop.
pub mod system;
/// Effect-window parameters stored in player attributes, and their math.
pub mod window;

#[cfg(test)]
pub(crate) mod testutil;

/// Re-exports of [`error::EffectError`] and [`error::EffectResult`].
pub use error::{EffectError, EffectResult};
/// Re-export of [`module::CoffeeBuffModule`].
pub use module::CoffeeBuffModule;
/// Re-export of resolver types.
pub use resolver::{Capabilities, CapabilityResolver, ResolutionEvent, SatiationBinding};
/// Re-export of [`system::CoffeeBuffSystem`].
pub use system::CoffeeBuffSystem;
/// Re-exports of the window parameter readers.
pub use window::{HungerWindow, WarmthWindow};
