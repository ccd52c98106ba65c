//! Colours for each token kind
//!
//! A theme can be written in TOML, any kind left out keeps its default colour:
//!
//! ```toml
//! keyword = "#af52de"
//! comment = [52, 199, 89]
//! ```

use crate::{Error, Kind, Result};
use serde::Deserialize;

/// A foreground colour, either as RGB components or a `#rrggbb` hex string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Rgb(u8, u8, u8),
    Hex(String),
}

impl Color {
    /// Resolve this colour into its red, green and blue components
    pub fn rgb(&self) -> Result<(u8, u8, u8)> {
        match self {
            Color::Rgb(r, g, b) => Ok((*r, *g, *b)),
            Color::Hex(hex) => {
                let digits = hex.strip_prefix('#').unwrap_or(hex);
                if digits.len() != 6 || !digits.is_ascii() {
                    return Err(Error::InvalidColour(hex.clone()));
                }
                let part = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 2], 16)
                        .map_err(|_| Error::InvalidColour(hex.clone()))
                };
                Ok((part(0)?, part(2)?, part(4)?))
            }
        }
    }
}

/// Maps each token kind to the colour it is drawn in
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub comment: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            keyword: Color::Rgb(175, 82, 222),
            string: Color::Rgb(255, 45, 85),
            number: Color::Rgb(0, 122, 255),
            comment: Color::Rgb(52, 199, 89),
        }
    }
}

impl Theme {
    /// Load a theme from TOML, checking that every colour resolves
    pub fn from_toml(source: &str) -> Result<Self> {
        let theme: Theme = toml::from_str(source)?;
        for colour in [&theme.keyword, &theme.string, &theme.number, &theme.comment] {
            colour.rgb()?;
        }
        Ok(theme)
    }

    /// The colour used to draw a token kind
    pub fn colour(&self, kind: Kind) -> &Color {
        match kind {
            Kind::Keyword => &self.keyword,
            Kind::String => &self.string,
            Kind::Number => &self.number,
            Kind::Comment => &self.comment,
        }
    }
}
