//! Post-processing effect stack: the ordered, partly toggleable list of
//! effects applied to each rendered frame.
//!
//! `grading` and `vignette` are core effects: always on, never toggled or
//! moved from the panel. Every other effect's on/off state is derived from
//! the render config field that drives it, and toggling produces a
//! [`RenderConfigDelta`] for the store to merge.

pub mod effect;
pub mod order;
pub mod stack;

pub use effect::{CoreEffect, EffectKind, OptionalEffect, PostFxEffectId};
pub use order::{DEFAULT_POST_FX_ORDER, PostFxOrder, move_effect, reset_order, sanitize_order};
pub use stack::{PostFxStack, StackEntry};

use crate::config::{RenderConfigDelta, RenderConfigSlice};

/// Whether `id` currently contributes to the frame. Core effects always do.
pub fn is_active(id: PostFxEffectId, config: &RenderConfigSlice) -> bool {
    match id.kind() {
        EffectKind::Core(_) => true,
        EffectKind::Optional(effect) => effect.is_active(config),
    }
}

/// Partial update flipping `id`. Core effects yield an empty delta.
pub fn toggle(id: PostFxEffectId, config: &RenderConfigSlice) -> RenderConfigDelta {
    match id.kind() {
        EffectKind::Core(_) => RenderConfigDelta::default(),
        EffectKind::Optional(effect) => effect.toggle(config),
    }
}

/// [`is_active`] for an identifier that has not been validated. Unknown ids
/// are inactive.
pub fn is_active_str(id: &str, config: &RenderConfigSlice) -> bool {
    match id.parse::<PostFxEffectId>() {
        Ok(id) => is_active(id, config),
        Err(err) => {
            tracing::debug!(%err, "activity query for unknown effect");
            false
        }
    }
}

/// [`toggle`] for an identifier that has not been validated. Unknown ids
/// yield an empty delta.
pub fn toggle_str(id: &str, config: &RenderConfigSlice) -> RenderConfigDelta {
    match id.parse::<PostFxEffectId>() {
        Ok(id) => toggle(id, config),
        Err(err) => {
            tracing::debug!(%err, "toggle requested for unknown effect");
            RenderConfigDelta::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(edit: impl FnOnce(&mut RenderConfigSlice)) -> RenderConfigSlice {
        let mut config = RenderConfigSlice::default();
        edit(&mut config);
        config
    }

    #[test]
    fn test_core_effects_always_active() {
        let config = RenderConfigSlice::default();
        assert!(is_active(PostFxEffectId::Grading, &config));
        assert!(is_active(PostFxEffectId::Vignette, &config));
    }

    #[test]
    fn test_bloom_toggle_snaps_between_zero_and_default() {
        let off = with(|c| c.bloom_intensity = 0.0);
        assert_eq!(
            toggle(PostFxEffectId::Bloom, &off).bloom_intensity,
            Some(0.3)
        );
        let on = with(|c| c.bloom_intensity = 0.3);
        assert_eq!(toggle(PostFxEffectId::Bloom, &on).bloom_intensity, Some(0.0));
    }

    #[test]
    fn test_toggle_touches_only_its_field() {
        let delta = toggle(PostFxEffectId::Bloom, &RenderConfigSlice::default());
        let json = serde_json::to_string(&delta).unwrap();
        assert_eq!(json, r#"{"bloomIntensity":0.3}"#);
    }

    #[test]
    fn test_chromatic_threshold() {
        let tiny = with(|c| c.chromatic_aberration = 0.000_000_1);
        assert!(!is_active(PostFxEffectId::Chromatic, &tiny));
        let visible = with(|c| c.chromatic_aberration = 0.01);
        assert!(is_active(PostFxEffectId::Chromatic, &visible));
    }

    #[test]
    fn test_bloom_threshold_is_coarser() {
        let faint = with(|c| c.bloom_intensity = 0.000_5);
        assert!(!is_active(PostFxEffectId::Bloom, &faint));
        let grain = with(|c| c.noise_intensity = 0.000_5);
        assert!(is_active(PostFxEffectId::Grain, &grain));
    }

    #[test]
    fn test_flag_effects_follow_their_fields() {
        let config = with(|c| {
            c.sharpen_enabled = true;
            c.trail_enabled = true;
        });
        assert!(is_active(PostFxEffectId::Sharpen, &config));
        assert!(is_active(PostFxEffectId::Trails, &config));
        assert!(!is_active(PostFxEffectId::MotionBlur, &config));
        assert_eq!(
            toggle(PostFxEffectId::Sharpen, &config).sharpen_enabled,
            Some(false)
        );
    }

    #[test]
    fn test_intensity_defaults_on_toggle() {
        let config = RenderConfigSlice::default();
        assert_eq!(toggle(PostFxEffectId::Chromatic, &config).chromatic_aberration, Some(1.0));
        assert_eq!(toggle(PostFxEffectId::Grain, &config).noise_intensity, Some(0.15));
        assert_eq!(toggle(PostFxEffectId::Clarity, &config).clarity, Some(0.25));
    }

    #[test]
    fn test_core_toggle_is_empty() {
        let config = RenderConfigSlice::default();
        assert!(toggle(PostFxEffectId::Grading, &config).is_empty());
        assert!(toggle(PostFxEffectId::Vignette, &config).is_empty());
    }

    #[test]
    fn test_unknown_string_ids_degrade_safely() {
        let config = RenderConfigSlice::default();
        assert!(!is_active_str("lensFlare", &config));
        assert!(toggle_str("lensFlare", &config).is_empty());
        assert!(is_active_str("grading", &config));
        assert_eq!(toggle_str("grain", &config).noise_intensity, Some(0.15));
    }
}
