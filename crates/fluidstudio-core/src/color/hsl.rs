//! Hue / saturation / lightness view of a [`Color3`].
//!
//! Conversion goes through `palette`, treating the triple as non-linear sRGB
//! the same way the swatch picker displays it.

use palette::{FromColor, Hsl as PaletteHsl, Srgb};
use serde::{Deserialize, Serialize};

use super::Color3;

/// HSL with hue in degrees `[0, 360)` and saturation/lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub hue_degrees: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue_degrees: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue_degrees,
            saturation,
            lightness,
        }
    }

    pub fn from_color3(color: Color3) -> Self {
        let [r, g, b] = color.clamped().0;
        let hsl: PaletteHsl = PaletteHsl::from_color(Srgb::new(r, g, b));
        Self {
            hue_degrees: hsl.hue.into_positive_degrees(),
            saturation: hsl.saturation,
            lightness: hsl.lightness,
        }
    }

    /// Saturation and lightness are clamped to `[0, 1]`; hue wraps.
    pub fn to_color3(self) -> Color3 {
        let hsl: PaletteHsl = PaletteHsl::new(
            self.hue_degrees.rem_euclid(360.0),
            self.saturation.clamp(0.0, 1.0),
            self.lightness.clamp(0.0, 1.0),
        );
        let rgb: Srgb = Srgb::from_color(hsl);
        Color3::new(rgb.red, rgb.green, rgb.blue).clamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_close(a: Color3, b: Color3) {
        for i in 0..3 {
            assert!(
                (a.0[i] - b.0[i]).abs() < EPSILON,
                "channel {i}: {:.6} vs {:.6}",
                a.0[i],
                b.0[i]
            );
        }
    }

    #[test]
    fn test_primary_hues() {
        assert!((Color3::new(1.0, 0.0, 0.0).to_hsl().hue_degrees - 0.0).abs() < EPSILON);
        assert!((Color3::new(0.0, 1.0, 0.0).to_hsl().hue_degrees - 120.0).abs() < EPSILON);
        assert!((Color3::new(0.0, 0.0, 1.0).to_hsl().hue_degrees - 240.0).abs() < EPSILON);
    }

    #[test]
    fn test_gray_has_no_saturation() {
        let hsl = Color3::new(0.5, 0.5, 0.5).to_hsl();
        assert!(hsl.saturation.abs() < EPSILON);
        assert!((hsl.lightness - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_round_trip_through_hsl() {
        let c = Color3::new(0.8, 0.4, 0.2);
        assert_close(Color3::from_hsl(c.to_hsl()), c);
    }

    #[test]
    fn test_hue_wraps() {
        let a = Hsl::new(-120.0, 1.0, 0.5).to_color3();
        let b = Hsl::new(240.0, 1.0, 0.5).to_color3();
        assert_close(a, b);
    }
}
