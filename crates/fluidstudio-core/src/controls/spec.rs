//! Control configuration: range, step, display precision and presentation
//! options.

use serde::{Deserialize, Serialize};

use crate::color::Color3;
use crate::error::ControlError;

/// Step used when a control does not specify one.
pub const DEFAULT_STEP: f32 = 0.01;

/// Increment direction for wheel, arrow-key and reorder input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Toward `min` (or toward the front of an ordered list).
    Decrease,
    /// Toward `max` (or toward the back of an ordered list).
    Increase,
}

impl Direction {
    pub const fn sign(self) -> f32 {
        match self {
            Self::Decrease => -1.0,
            Self::Increase => 1.0,
        }
    }

    pub const fn offset(self) -> isize {
        match self {
            Self::Decrease => -1,
            Self::Increase => 1,
        }
    }

    /// Map a signed wheel delta to a direction. Zero and NaN map to `None`.
    pub fn from_wheel(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::Increase)
        } else if delta < 0.0 {
            Some(Self::Decrease)
        } else {
            None
        }
    }
}

/// Decimal places shown for a given step: `0` for `step >= 1`, `1` for
/// `step >= 0.1`, otherwise `2`.
pub fn precision_for_step(step: f32) -> u32 {
    if step >= 1.0 {
        0
    } else if step >= 0.1 {
        1
    } else {
        2
    }
}

/// One bounded numeric control.
///
/// Invariants after construction: `min < max`, both finite, `step > 0`,
/// `min <= value <= max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericControlSpec {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub value: f32,
    /// Display decimals. `None` derives them from `step`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    /// Fill color for the track. `None` uses the panel accent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Color3>,
    #[serde(default)]
    pub disabled: bool,
}

impl NumericControlSpec {
    /// Control over `[min, max]` with the default step, valued at `min`.
    pub fn new(min: f32, max: f32) -> Result<Self, ControlError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ControlError::NonFinite);
        }
        if min >= max {
            return Err(ControlError::DegenerateRange { min, max });
        }
        Ok(Self {
            min,
            max,
            step: DEFAULT_STEP,
            value: min,
            precision: None,
            accent: None,
            disabled: false,
        })
    }

    pub fn step(mut self, step: f32) -> Result<Self, ControlError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ControlError::InvalidStep(step));
        }
        self.step = step;
        Ok(self)
    }

    /// Set the current value, clamped into range. Non-finite values leave
    /// the previous value in place.
    pub fn value(mut self, value: f32) -> Self {
        if value.is_finite() {
            self.value = value;
            self.normalize();
        }
        self
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn accent(mut self, accent: Color3) -> Self {
        self.accent = Some(accent);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Explicit precision if set, otherwise derived from the step.
    pub fn display_precision(&self) -> u32 {
        self.precision.unwrap_or_else(|| precision_for_step(self.step))
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// `true` when the bounds violate `min < max` or the step is not a
    /// positive finite number. Only reachable for specs that were
    /// deserialized or edited field by field rather than built.
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        let bad_range = span.is_nan() || span.is_infinite() || span <= 0.0;
        let bad_step = !self.step.is_finite() || self.step <= 0.0;
        bad_range || bad_step
    }

    /// Clamp into `[min, max]`. Never panics, even on a degenerate spec.
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Re-establish `min <= value <= max`.
    pub fn normalize(&mut self) {
        if self.value.is_finite() {
            self.value = self.clamp(self.value);
        } else {
            self.value = self.min;
        }
    }

    /// Value to restore on a reset gesture: `default` clamped into range.
    pub fn reset_value(&self, default: f32) -> Option<f32> {
        default.is_finite().then(|| self.clamp(default))
    }

    pub fn formatted(&self) -> String {
        super::format_value(self.value, self.display_precision())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_thresholds() {
        assert_eq!(precision_for_step(1.0), 0);
        assert_eq!(precision_for_step(5.0), 0);
        assert_eq!(precision_for_step(0.5), 1);
        assert_eq!(precision_for_step(0.1), 1);
        assert_eq!(precision_for_step(0.05), 2);
        assert_eq!(precision_for_step(0.001), 2);
    }

    #[test]
    fn test_rejects_degenerate_range() {
        assert_eq!(
            NumericControlSpec::new(1.0, 1.0),
            Err(ControlError::DegenerateRange { min: 1.0, max: 1.0 })
        );
        assert!(NumericControlSpec::new(2.0, 1.0).is_err());
        assert_eq!(
            NumericControlSpec::new(0.0, f32::INFINITY),
            Err(ControlError::NonFinite)
        );
    }

    #[test]
    fn test_rejects_bad_step() {
        let spec = NumericControlSpec::new(0.0, 1.0).unwrap();
        assert!(spec.clone().step(0.0).is_err());
        assert!(spec.clone().step(-0.1).is_err());
        assert!(spec.step(f32::NAN).is_err());
    }

    #[test]
    fn test_value_is_clamped_and_nan_ignored() {
        let spec = NumericControlSpec::new(0.0, 10.0).unwrap().value(42.0);
        assert_eq!(spec.value, 10.0);
        let spec = spec.value(f32::NAN);
        assert_eq!(spec.value, 10.0);
    }

    #[test]
    fn test_explicit_precision_overrides_step() {
        let spec = NumericControlSpec::new(0.0, 100.0)
            .unwrap()
            .step(1.0)
            .unwrap()
            .precision(3)
            .value(12.0);
        assert_eq!(spec.display_precision(), 3);
        assert_eq!(spec.formatted(), "12.000");
    }

    #[test]
    fn test_deserialized_spec_can_be_degenerate() {
        let spec: NumericControlSpec =
            serde_json::from_str(r#"{"min":1.0,"max":1.0,"step":0.1,"value":1.0}"#).unwrap();
        assert!(spec.is_degenerate());
        assert!(!spec.disabled);
    }

    #[test]
    fn test_zero_or_nan_step_is_degenerate() {
        let spec: NumericControlSpec =
            serde_json::from_str(r#"{"min":0.0,"max":10.0,"step":0.0,"value":2.0}"#).unwrap();
        assert!(spec.is_degenerate());

        let mut spec = NumericControlSpec::new(0.0, 1.0).unwrap();
        spec.step = f32::NAN;
        assert!(spec.is_degenerate());
    }

    #[test]
    fn test_normalize_restores_range() {
        let mut spec = NumericControlSpec::new(0.0, 1.0).unwrap();
        spec.value = 3.0;
        spec.normalize();
        assert_eq!(spec.value, 1.0);
        spec.value = f32::NAN;
        spec.normalize();
        assert_eq!(spec.value, 0.0);
    }
}
