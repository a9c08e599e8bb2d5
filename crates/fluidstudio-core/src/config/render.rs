//! Render look: grading, vignette and the optional post-FX fields.

use serde::{Deserialize, Serialize};

use super::DeltaValue;
use crate::color::Color3;
use crate::postfx::PostFxOrder;

/// Render fields the panels read. Field names follow the store's camelCase
/// wire names (`bloomIntensity`, `postFxOrder`, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfigSlice {
    // Grading (core)
    /// Exposure multiplier. 1.0 = neutral.
    pub exposure: f32,
    /// Contrast multiplier. 1.0 = neutral.
    pub contrast: f32,
    /// Saturation multiplier. 1.0 = neutral.
    pub saturation: f32,
    /// Multiplicative tint. White = neutral.
    pub tint: Color3,

    // Vignette (core)
    pub vignette_intensity: f32,

    // Optional effects
    pub bloom_intensity: f32,
    pub sharpen_enabled: bool,
    pub motion_blur_enabled: bool,
    pub chromatic_aberration: f32,
    pub rgb_shift_enabled: bool,
    pub clarity: f32,
    /// Film grain amount.
    pub noise_intensity: f32,
    pub after_image_enabled: bool,
    pub trail_enabled: bool,

    /// Application order of the post-FX stack.
    pub post_fx_order: PostFxOrder,
}

impl Default for RenderConfigSlice {
    /// Neutral grading, a light vignette, every optional effect off.
    fn default() -> Self {
        Self {
            exposure: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            tint: Color3::WHITE,
            vignette_intensity: 0.35,
            bloom_intensity: 0.0,
            sharpen_enabled: false,
            motion_blur_enabled: false,
            chromatic_aberration: 0.0,
            rgb_shift_enabled: false,
            clarity: 0.0,
            noise_intensity: 0.0,
            after_image_enabled: false,
            trail_enabled: false,
            post_fx_order: PostFxOrder::default(),
        }
    }
}

config_delta! {
    /// Partial update to a [`RenderConfigSlice`].
    pub struct RenderConfigDelta for RenderConfigSlice {
        exposure: f32,
        contrast: f32,
        saturation: f32,
        tint: Color3,
        vignette_intensity: f32,
        bloom_intensity: f32,
        sharpen_enabled: bool,
        motion_blur_enabled: bool,
        chromatic_aberration: f32,
        rgb_shift_enabled: bool,
        clarity: f32,
        noise_intensity: f32,
        after_image_enabled: bool,
        trail_enabled: bool,
        post_fx_order: PostFxOrder,
    }
}
