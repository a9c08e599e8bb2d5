//! Error types for the construction and parse boundaries of the control core.
//!
//! The pure operations (stepping, sanitizing, toggling) never fail; they
//! clamp, repair or ignore. These errors only surface where a caller builds
//! a control or hands in text.

/// Rejected numeric control configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControlError {
    #[error("degenerate range: min {min} must be less than max {max}")]
    DegenerateRange { min: f32, max: f32 },
    #[error("range bounds must be finite")]
    NonFinite,
    #[error("step must be positive and finite, got {0}")]
    InvalidStep(f32),
}

/// Malformed color input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// A post-FX identifier outside the closed effect set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown post-fx effect: {0:?}")]
pub struct UnknownEffect(pub String);
