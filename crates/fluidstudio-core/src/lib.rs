//! Fluid Studio Core: control model behind the studio panels.
//!
//! This crate contains the bounded stepped value model shared by every
//! slider, the post-FX effect stack, color conversions and the config
//! slices and partial updates exchanged with the studio store. No UI
//! framework dependencies.

pub mod color;
pub mod config;
pub mod controls;
pub mod error;
pub mod params;
pub mod postfx;
pub mod store;

// Re-exports for convenience.
pub use color::Color3;
pub use config::{ConfigDelta, RenderConfigDelta, RenderConfigSlice, SimConfigDelta, SimConfigSlice};
pub use controls::{Direction, NumericControlSpec};
pub use error::{ColorError, ControlError, UnknownEffect};
pub use params::ParamId;
pub use postfx::{PostFxEffectId, PostFxOrder, PostFxStack};
pub use store::{ConfigStore, MemoryStore};
