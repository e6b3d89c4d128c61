use crate::error::ColorError;
use palette::{Srgb, Srgba, WithAlpha};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// A user-supplied color: a CSS color keyword (`white`) or a hex triplet (`#1e1e1e`, `#fff`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeserializeFromStr, SerializeDisplay)]
pub struct ColorSpec(Srgb<u8>);

impl ColorSpec {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Opaque color with `f64` components, ready for cairo.
    pub fn to_srgba(&self) -> Srgba<f64> {
        self.0.into_format::<f64>().with_alpha(1.0)
    }
}

impl FromStr for ColorSpec {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(named) = palette::named::from_str(&trimmed.to_ascii_lowercase()) {
            return Ok(Self(named));
        }
        trimmed
            .strip_prefix('#')
            .and_then(|hex| hex.parse::<Srgb<u8>>().ok())
            .map(Self)
            .ok_or_else(|| ColorError::Invalid(s.to_string()))
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.0.into_components();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        let cases = vec![
            ("white", ColorSpec::rgb(255, 255, 255)),
            ("White", ColorSpec::rgb(255, 255, 255)),
            ("#1e1e1e", ColorSpec::rgb(0x1e, 0x1e, 0x1e)),
            ("#9255D9", ColorSpec::rgb(0x92, 0x55, 0xd9)),
            ("#fff", ColorSpec::rgb(255, 255, 255)),
            (" darkgray ", ColorSpec::rgb(169, 169, 169)),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<ColorSpec>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_invalid_colors_are_rejected() {
        for input in ["", "#12", "9255d9", "#gggggg", "not-a-color"] {
            assert_eq!(
                input.parse::<ColorSpec>(),
                Err(ColorError::Invalid(input.to_string()))
            );
        }
    }

    #[test]
    fn test_color_serde() {
        let color: ColorSpec = serde_json::from_str("\"#2D2D2D\"").unwrap();
        assert_eq!(color, ColorSpec::rgb(0x2d, 0x2d, 0x2d));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#2d2d2d\"");
    }

    #[test]
    fn test_srgba_is_opaque() {
        let c = ColorSpec::rgb(255, 0, 0).to_srgba();
        assert_eq!(c.into_components(), (1.0, 0.0, 0.0, 1.0));
    }
}
