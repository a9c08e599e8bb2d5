//! Frontend core abstractions for the fluid studio panels.
//!
//! Defines the input event types the host UI forwards, the interactive
//! slider state machine built on the core's stepped value model, the row
//! model for the post-FX panel, and the message contract between panels and
//! the studio store.

pub mod ipc;
pub mod postfx_panel;
pub mod slider;

use serde::{Deserialize, Serialize};

use fluidstudio_core::{ColorError, ParamId, PostFxEffectId, UnknownEffect};

pub use ipc::{PanelToStore, StoreToPanel, dispatch, handle_message};
pub use postfx_panel::{PanelRow, RowControls, post_fx_rows};
pub use slider::{CaptureHost, InteractionConfig, SliderInteraction, SliderView, TrackGeometry};

// ── Errors ───────────────────────────────────────────────────────

/// Errors raised while turning panel messages into store writes. A failed
/// message never writes anything.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("{0} is a core effect and cannot be toggled or moved")]
    CoreEffect(PostFxEffectId),

    #[error("non-finite value {value} for {param:?}")]
    InvalidValue { param: ParamId, value: f32 },

    #[error(transparent)]
    UnknownEffect(#[from] UnknownEffect),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("malformed panel message: {0}")]
    Json(#[from] serde_json::Error),
}

// ── Input events ─────────────────────────────────────────────────

/// Pointer event forwarded from the host UI. Positions are in the same
/// coordinate space as the control's [`TrackGeometry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MouseEvent {
    Enter { x: f32, y: f32 },
    Leave,
    Move { x: f32, y: f32 },
    ButtonDown { button: MouseButton, pointer_id: u32, x: f32, y: f32 },
    ButtonUp { button: MouseButton, pointer_id: u32, x: f32, y: f32 },
    /// The host revoked pointer capture (window blur, touch cancel).
    Cancel { pointer_id: u32 },
    Scroll { delta_x: f32, delta_y: f32, x: f32, y: f32 },
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keyboard input event forwarded to a focused control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardEvent {
    pub key: String,
    pub pressed: bool,
    pub modifiers: Modifiers,
}

/// Keyboard modifier keys state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}
