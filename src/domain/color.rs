//! RGB colors and color resolution
//!
//! Colors are compared by exact channel match, no tolerance. On the wire (storage,
//! JS) a color is the CSS string `rgb(r, g, b)`.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Display default for every cell that was never painted.
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(200, 200, 200);

/// "No paint" marker used only by image export. Unrelated to `DEFAULT_BACKGROUND`.
pub const EXPORT_SENTINEL: Rgb = Rgb::new(214, 255, 148);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `rgb(r, g, b)` with any whitespace around the channels.
    pub fn parse_css(s: &str) -> Option<Self> {
        let inner = s
            .trim()
            .strip_prefix("rgb(")?
            .strip_suffix(')')?;

        let mut channels = inner.split(',').map(|c| c.trim().parse::<u8>());
        let r = channels.next()?.ok()?;
        let g = channels.next()?.ok()?;
        let b = channels.next()?.ok()?;
        if channels.next().is_some() {
            return None;
        }
        Some(Self { r, g, b })
    }

    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Opaque ABGR (little-endian bytes `[R, G, B, A]`) for direct canvas copy.
    #[inline]
    pub fn to_abgr(self) -> u32 {
        0xFF00_0000 | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }

    /// Per-channel linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CssVisitor;

        impl Visitor<'_> for CssVisitor {
            type Value = Rgb;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a css color of the form rgb(r, g, b)")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Rgb, E> {
                Rgb::parse_css(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(CssVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_browser_style_strings() {
        assert_eq!(Rgb::parse_css("rgb(0, 128, 0)"), Some(Rgb::new(0, 128, 0)));
        assert_eq!(Rgb::parse_css("rgb(255,0,0)"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::parse_css("  rgb( 1 ,2,  3 ) "), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert_eq!(Rgb::parse_css("rgb(256, 0, 0)"), None);
        assert_eq!(Rgb::parse_css("rgb(1, 2)"), None);
        assert_eq!(Rgb::parse_css("rgb(1, 2, 3, 4)"), None);
        assert_eq!(Rgb::parse_css("rgba(1, 2, 3)"), None);
        assert_eq!(Rgb::parse_css("red"), None);
        assert_eq!(Rgb::parse_css(""), None);
    }

    #[test]
    fn css_form_survives_json() {
        let json = serde_json::to_string(&vec![Rgb::new(135, 206, 235)]).unwrap();
        assert_eq!(json, r#"["rgb(135, 206, 235)"]"#);
        let back: Vec<Rgb> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Rgb::new(135, 206, 235)]);
    }

    #[test]
    fn backgrounds_are_distinct() {
        assert_ne!(DEFAULT_BACKGROUND, EXPORT_SENTINEL);
    }

    #[test]
    fn abgr_packs_red_in_low_byte() {
        assert_eq!(Rgb::new(0x11, 0x22, 0x33).to_abgr(), 0xFF33_2211);
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(100, 50, 25));
        assert_eq!(a.lerp(b, 7.0), b);
    }
}
