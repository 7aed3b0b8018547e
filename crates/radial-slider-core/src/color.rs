//! CSS hex colors for slider strokes.

use crate::error::ConfigError;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A slider color, written and read as `#rgb`, `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SliderColor(Color);

impl SliderColor {
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self(Color::from_rgba8(r, g, b, 255))
    }

    fn rgba8(&self) -> (u8, u8, u8, u8) {
        let rgba = self.0.to_rgba8();
        (rgba.r, rgba.g, rgba.b, rgba.a)
    }

    /// The underlying color.
    pub fn color(&self) -> Color {
        self.0
    }

    /// CSS representation; the alpha channel is only written when not opaque.
    pub fn to_css(&self) -> String {
        let (r, g, b, a) = self.rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl PartialEq for SliderColor {
    fn eq(&self, other: &Self) -> bool {
        self.rgba8() == other.rgba8()
    }
}

impl From<Color> for SliderColor {
    fn from(color: Color) -> Self {
        Self(color)
    }
}

impl From<SliderColor> for Color {
    fn from(color: SliderColor) -> Self {
        color.0
    }
}

impl FromStr for SliderColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        // from_str_radix alone would accept a leading '+'
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = channel(0..1)? * 17;
                let g = channel(1..2)? * 17;
                let b = channel(2..3)? * 17;
                Ok(Self(Color::from_rgba8(r, g, b, 255)))
            }
            6 => Ok(Self(Color::from_rgba8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                255,
            ))),
            8 => Ok(Self(Color::from_rgba8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            ))),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for SliderColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SliderColor> for String {
    fn from(color: SliderColor) -> Self {
        color.to_css()
    }
}

impl fmt::Display for SliderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        let color: SliderColor = "#2a9fd6".parse().unwrap();
        assert_eq!(color.to_css(), "#2a9fd6");
        let rgba = color.color().to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0x2a, 0x9f, 0xd6, 255));
    }

    #[test]
    fn test_parse_short_hex() {
        let color: SliderColor = "#fff".parse().unwrap();
        assert_eq!(color.to_css(), "#ffffff");
    }

    #[test]
    fn test_parse_alpha_hex() {
        let color: SliderColor = "#00000080".parse().unwrap();
        assert_eq!(color.to_css(), "#00000080");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("red".parse::<SliderColor>().is_err());
        assert!("#12345".parse::<SliderColor>().is_err());
        assert!("#gggggg".parse::<SliderColor>().is_err());
        assert!("#ééé".parse::<SliderColor>().is_err());
        assert!("#+f+f+f".parse::<SliderColor>().is_err());
        assert!("#+fffff".parse::<SliderColor>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let color = SliderColor::from_rgb8(255, 0, 0);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#ff0000\"");
        let back: SliderColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<SliderColor>("\"nope\"").is_err());
    }
}
