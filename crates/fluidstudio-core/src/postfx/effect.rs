//! The closed set of post-processing effects and their core/optional split.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownEffect;
use crate::config::{RenderConfigDelta, RenderConfigSlice};

/// Bloom counts as on above this intensity.
pub const BLOOM_ACTIVE_THRESHOLD: f32 = 1e-3;
/// Threshold for the remaining intensity-driven effects.
pub const INTENSITY_ACTIVE_THRESHOLD: f32 = 1e-6;

/// Intensities restored when an intensity-driven effect is toggled on.
pub const BLOOM_ON_INTENSITY: f32 = 0.3;
pub const CHROMATIC_ON_INTENSITY: f32 = 1.0;
pub const GRAIN_ON_INTENSITY: f32 = 0.15;
pub const CLARITY_ON_INTENSITY: f32 = 0.25;

/// Identifies one post-processing effect.
///
/// Serialized with the camelCase names the store persists
/// (`"motionBlur"`, `"rgbShift"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PostFxEffectId {
    Grading,
    Vignette,
    Bloom,
    Sharpen,
    MotionBlur,
    Chromatic,
    RgbShift,
    Clarity,
    Grain,
    AfterImage,
    Trails,
}

impl PostFxEffectId {
    /// Every effect, in canonical stack order.
    pub const ALL: [Self; 11] = [
        Self::Grading,
        Self::Vignette,
        Self::Bloom,
        Self::Sharpen,
        Self::MotionBlur,
        Self::Chromatic,
        Self::RgbShift,
        Self::Clarity,
        Self::Grain,
        Self::AfterImage,
        Self::Trails,
    ];

    /// Persisted identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grading => "grading",
            Self::Vignette => "vignette",
            Self::Bloom => "bloom",
            Self::Sharpen => "sharpen",
            Self::MotionBlur => "motionBlur",
            Self::Chromatic => "chromatic",
            Self::RgbShift => "rgbShift",
            Self::Clarity => "clarity",
            Self::Grain => "grain",
            Self::AfterImage => "afterImage",
            Self::Trails => "trails",
        }
    }

    /// Human-readable label for panel rows.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grading => "Color Grading",
            Self::Vignette => "Vignette",
            Self::Bloom => "Bloom",
            Self::Sharpen => "Sharpen",
            Self::MotionBlur => "Motion Blur",
            Self::Chromatic => "Chromatic Aberration",
            Self::RgbShift => "RGB Shift",
            Self::Clarity => "Clarity",
            Self::Grain => "Film Grain",
            Self::AfterImage => "Afterimage",
            Self::Trails => "Trails",
        }
    }

    pub const fn kind(self) -> EffectKind {
        match self {
            Self::Grading => EffectKind::Core(CoreEffect::Grading),
            Self::Vignette => EffectKind::Core(CoreEffect::Vignette),
            Self::Bloom => EffectKind::Optional(OptionalEffect::Bloom),
            Self::Sharpen => EffectKind::Optional(OptionalEffect::Sharpen),
            Self::MotionBlur => EffectKind::Optional(OptionalEffect::MotionBlur),
            Self::Chromatic => EffectKind::Optional(OptionalEffect::Chromatic),
            Self::RgbShift => EffectKind::Optional(OptionalEffect::RgbShift),
            Self::Clarity => EffectKind::Optional(OptionalEffect::Clarity),
            Self::Grain => EffectKind::Optional(OptionalEffect::Grain),
            Self::AfterImage => EffectKind::Optional(OptionalEffect::AfterImage),
            Self::Trails => EffectKind::Optional(OptionalEffect::Trails),
        }
    }

    pub const fn is_core(self) -> bool {
        matches!(self.kind(), EffectKind::Core(_))
    }
}

impl fmt::Display for PostFxEffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostFxEffectId {
    type Err = UnknownEffect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownEffect(s.to_string()))
    }
}

/// Core or optional, so renderers match on the variant instead of comparing
/// identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Always applied; never toggled or moved from the panel.
    Core(CoreEffect),
    /// User-toggleable and reorderable.
    Optional(OptionalEffect),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreEffect {
    Grading,
    Vignette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalEffect {
    Bloom,
    Sharpen,
    MotionBlur,
    Chromatic,
    RgbShift,
    Clarity,
    Grain,
    AfterImage,
    Trails,
}

impl CoreEffect {
    pub const fn id(self) -> PostFxEffectId {
        match self {
            Self::Grading => PostFxEffectId::Grading,
            Self::Vignette => PostFxEffectId::Vignette,
        }
    }
}

impl OptionalEffect {
    pub const fn id(self) -> PostFxEffectId {
        match self {
            Self::Bloom => PostFxEffectId::Bloom,
            Self::Sharpen => PostFxEffectId::Sharpen,
            Self::MotionBlur => PostFxEffectId::MotionBlur,
            Self::Chromatic => PostFxEffectId::Chromatic,
            Self::RgbShift => PostFxEffectId::RgbShift,
            Self::Clarity => PostFxEffectId::Clarity,
            Self::Grain => PostFxEffectId::Grain,
            Self::AfterImage => PostFxEffectId::AfterImage,
            Self::Trails => PostFxEffectId::Trails,
        }
    }

    /// Derived on/off state. There is no separate enabled bit: the state is
    /// read straight from the field the effect is driven by.
    pub fn is_active(self, config: &RenderConfigSlice) -> bool {
        match self {
            Self::Bloom => config.bloom_intensity > BLOOM_ACTIVE_THRESHOLD,
            Self::Sharpen => config.sharpen_enabled,
            Self::MotionBlur => config.motion_blur_enabled,
            Self::Chromatic => config.chromatic_aberration > INTENSITY_ACTIVE_THRESHOLD,
            Self::RgbShift => config.rgb_shift_enabled,
            Self::Clarity => config.clarity > INTENSITY_ACTIVE_THRESHOLD,
            Self::Grain => config.noise_intensity > INTENSITY_ACTIVE_THRESHOLD,
            Self::AfterImage => config.after_image_enabled,
            Self::Trails => config.trail_enabled,
        }
    }

    /// Partial update flipping this effect. Flags invert; intensities snap
    /// between `0.0` and the effect's on-intensity.
    pub fn toggle(self, config: &RenderConfigSlice) -> RenderConfigDelta {
        let active = self.is_active(config);
        let snap = |on: f32| if active { 0.0 } else { on };

        let mut delta = RenderConfigDelta::default();
        match self {
            Self::Bloom => delta.bloom_intensity = Some(snap(BLOOM_ON_INTENSITY)),
            Self::Sharpen => delta.sharpen_enabled = Some(!active),
            Self::MotionBlur => delta.motion_blur_enabled = Some(!active),
            Self::Chromatic => delta.chromatic_aberration = Some(snap(CHROMATIC_ON_INTENSITY)),
            Self::RgbShift => delta.rgb_shift_enabled = Some(!active),
            Self::Clarity => delta.clarity = Some(snap(CLARITY_ON_INTENSITY)),
            Self::Grain => delta.noise_intensity = Some(snap(GRAIN_ON_INTENSITY)),
            Self::AfterImage => delta.after_image_enabled = Some(!active),
            Self::Trails => delta.trail_enabled = Some(!active),
        }
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_round_trip_for_every_id() {
        for id in PostFxEffectId::ALL {
            assert_eq!(id.as_str().parse::<PostFxEffectId>(), Ok(id));
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        assert_eq!(
            "lensFlare".parse::<PostFxEffectId>(),
            Err(UnknownEffect("lensFlare".to_string()))
        );
        assert!("MotionBlur".parse::<PostFxEffectId>().is_err());
    }

    #[test]
    fn test_only_grading_and_vignette_are_core() {
        let core: Vec<_> = PostFxEffectId::ALL
            .into_iter()
            .filter(|id| id.is_core())
            .collect();
        assert_eq!(core, [PostFxEffectId::Grading, PostFxEffectId::Vignette]);
    }

    #[test]
    fn test_kind_ids_agree() {
        for id in PostFxEffectId::ALL {
            let back = match id.kind() {
                EffectKind::Core(core) => core.id(),
                EffectKind::Optional(opt) => opt.id(),
            };
            assert_eq!(back, id);
        }
    }

    #[test]
    fn test_toggle_is_consistent_with_is_active() {
        let mut config = RenderConfigSlice::default();
        for id in PostFxEffectId::ALL {
            let EffectKind::Optional(effect) = id.kind() else {
                continue;
            };
            assert!(!effect.is_active(&config), "{id} should start off");
            effect.toggle(&config).apply_to(&mut config);
            assert!(effect.is_active(&config), "{id} should be on after toggle");
            effect.toggle(&config).apply_to(&mut config);
            assert!(!effect.is_active(&config), "{id} should be off again");
        }
    }
}
