//! Pure input → value functions for stepped controls.
//!
//! Every function returns `None` for input that must not reach the store
//! (non-finite numbers, fractions outside the track, unparsable text).
//! Callers keep their previous value in that case.

use super::spec::{Direction, NumericControlSpec};

/// Snap `value` to the nearest multiple of `step` measured from `min`, then
/// clamp into range.
fn quantize(value: f32, spec: &NumericControlSpec) -> f32 {
    let stepped = spec.min + ((value - spec.min) / spec.step).round() * spec.step;
    spec.clamp(stepped)
}

/// Value for a pointer at `fraction` of the track, `0.0` being `min`.
///
/// ```text
/// raw    = min + fraction × (max − min)
/// result = clamp(min + round((raw − min) / step) × step, min, max)
/// ```
///
/// Feeding `percent(result) / 100` back in yields `result` again.
pub fn value_from_pointer(fraction: f32, spec: &NumericControlSpec) -> Option<f32> {
    if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
        tracing::debug!(fraction, "ignoring pointer fraction outside the track");
        return None;
    }
    if spec.is_degenerate() {
        tracing::warn!(min = spec.min, max = spec.max, "control has a degenerate range or step");
        return None;
    }
    let raw = spec.min + fraction * spec.span();
    Some(quantize(raw, spec))
}

/// One step up or down from `current`, clamped. Used for wheel and arrow keys.
pub fn value_from_delta(
    current: f32,
    direction: Direction,
    spec: &NumericControlSpec,
) -> Option<f32> {
    if !current.is_finite() {
        tracing::debug!(current, "ignoring step from a non-finite value");
        return None;
    }
    if spec.is_degenerate() {
        tracing::warn!(step = spec.step, "control has a degenerate range or step");
        return None;
    }
    Some(spec.clamp(current + direction.sign() * spec.step))
}

/// Fill percentage in `[0, 100]`.
///
/// A degenerate range is a caller defect; it is logged and renders as 0%.
pub fn percent(value: f32, spec: &NumericControlSpec) -> f32 {
    if spec.is_degenerate() {
        tracing::warn!(min = spec.min, max = spec.max, "control has a degenerate range or step");
        return 0.0;
    }
    if !value.is_finite() {
        return 0.0;
    }
    (((value - spec.min) / spec.span()) * 100.0).clamp(0.0, 100.0)
}

/// Fixed-decimal label. Values that round to zero never show a minus sign.
pub fn format_value(value: f32, precision: u32) -> String {
    let text = format!("{value:.prec$}", prec = precision as usize);
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}

/// Typed entry: parse, reject non-finite, then quantize and clamp like the
/// pointer path.
pub fn parse_input(text: &str, spec: &NumericControlSpec) -> Option<f32> {
    let parsed = match text.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            tracing::debug!(input = text, "discarding non-numeric control input");
            return None;
        }
    };
    if spec.is_degenerate() {
        tracing::warn!(step = spec.step, "control has a degenerate range or step");
        return None;
    }
    Some(quantize(parsed, spec))
}
