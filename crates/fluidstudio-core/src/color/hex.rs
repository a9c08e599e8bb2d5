//! `#rrggbb` hex strings for swatches and text entry.

use super::Color3;
use crate::error::ColorError;

/// Format as lower-case `#rrggbb`.
pub fn color3_to_hex(color: Color3) -> String {
    let [r, g, b] = color.to_rgb8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parse `#rrggbb`, `rrggbb` or the `#rgb` shorthand, case-insensitive.
pub fn hex_to_color3(hex: &str) -> Result<Color3, ColorError> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }

    let rgb = match digits.len() {
        6 => [
            parse_pair(&digits[0..2]),
            parse_pair(&digits[2..4]),
            parse_pair(&digits[4..6]),
        ],
        3 => [
            parse_nibble(&digits[0..1]),
            parse_nibble(&digits[1..2]),
            parse_nibble(&digits[2..3]),
        ],
        _ => return Err(ColorError::InvalidHex(hex.to_string())),
    };

    match rgb {
        [Some(r), Some(g), Some(b)] => Ok(Color3::from_rgb8([r, g, b])),
        _ => Err(ColorError::InvalidHex(hex.to_string())),
    }
}

fn parse_pair(pair: &str) -> Option<u8> {
    u8::from_str_radix(pair, 16).ok()
}

/// `f` expands to `ff`.
fn parse_nibble(nibble: &str) -> Option<u8> {
    u8::from_str_radix(nibble, 16).ok().map(|n| n * 17)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_red_formats_lowercase() {
        assert_eq!(color3_to_hex(Color3::new(1.0, 0.0, 0.0)), "#ff0000");
    }

    #[test]
    fn test_out_of_range_channels_clamp() {
        assert_eq!(color3_to_hex(Color3::new(2.0, -1.0, 0.5)), "#ff0080");
    }

    #[test]
    fn test_every_8bit_triple_quantizes_back_exactly() {
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                for b in 0..=255u8 {
                    let rgb = [r, g, b];
                    assert_eq!(Color3::from_rgb8(rgb).to_rgb8(), rgb, "drift for {rgb:?}");
                }
            }
        }
    }

    #[test]
    fn test_every_channel_value_round_trips_through_hex() {
        // Channels are encoded independently, so each position covers all 256 values.
        for v in 0..=255u8 {
            for rgb in [[v, 0, 0], [0, v, 0], [0, 0, v], [v, 255 - v, v]] {
                let c = Color3::from_rgb8(rgb);
                let back = hex_to_color3(&color3_to_hex(c)).unwrap();
                assert_eq!(back, c, "drift for {rgb:?}");
            }
        }
    }

    #[test]
    fn test_accepts_missing_hash_and_uppercase() {
        assert_eq!(
            hex_to_color3("00FF00").unwrap(),
            Color3::new(0.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_short_form_expands() {
        assert_eq!(hex_to_color3("#f0a").unwrap(), hex_to_color3("#ff00aa").unwrap());
    }

    #[test]
    fn test_rejects_garbage() {
        for bad in ["", "#", "#12345", "#gggggg", "#ff00ff00", "#ÿÿÿ"] {
            assert!(hex_to_color3(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
