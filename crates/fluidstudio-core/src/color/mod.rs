//! Color values shared by the panels: `[0, 1]` float triples with hex and
//! HSL conversions.
//!
//! Every color field in the render config is a [`Color3`]. Hex strings are
//! the 8-bit `#rrggbb` form used by swatches and text entry, so a hex round
//! trip is lossy down to 8-bit quantization and exact from there on.

pub mod hex;
pub mod hsl;

use serde::{Deserialize, Serialize};

pub use hex::{color3_to_hex, hex_to_color3};
pub use hsl::Hsl;

/// Non-linear sRGB `[r, g, b]` triple with each channel nominally in `[0, 1]`,
/// the same encoding the hex and HSL forms use.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color3(pub [f32; 3]);

impl Color3 {
    pub const WHITE: Self = Self([1.0, 1.0, 1.0]);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    /// Quantize to 8 bits per channel: `round(c * 255)` clamped to `[0, 255]`.
    ///
    /// NaN channels quantize to 0.
    pub fn to_rgb8(self) -> [u8; 3] {
        self.0.map(channel_to_u8)
    }

    /// Expand 8-bit channels back to `[0, 1]`.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self(rgb.map(|c| f32::from(c) / 255.0))
    }

    /// Clamp every channel into `[0, 1]`, mapping NaN to 0.
    pub fn clamped(self) -> Self {
        Self(self.0.map(|c| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) }))
    }

    pub fn to_hex(self) -> String {
        color3_to_hex(self)
    }

    pub fn to_hsl(self) -> Hsl {
        Hsl::from_color3(self)
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        hsl.to_color3()
    }
}

impl From<[f32; 3]> for Color3 {
    fn from(rgb: [f32; 3]) -> Self {
        Self(rgb)
    }
}

fn channel_to_u8(c: f32) -> u8 {
    if c.is_nan() {
        return 0;
    }
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}
