//! Bounded stepped value model shared by every slider and number field.
//!
//! A [`NumericControlSpec`] is rebuilt from the current config value on each
//! render. The free functions in [`stepped`] turn raw input (track fraction,
//! wheel/arrow steps, typed text) into a quantized, clamped value, or into
//! `None` when the input should be ignored.

pub mod spec;
pub mod stepped;

pub use spec::{Direction, NumericControlSpec, precision_for_step};
pub use stepped::{format_value, parse_input, percent, value_from_delta, value_from_pointer};
