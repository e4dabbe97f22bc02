//! Six-digit hex color strings

use std::fmt;
use std::str::FromStr;

use colorgrad::Color;
use serde::Serialize;

use crate::error::PaletteError;

/// RGB color as exactly 6 hex digits, without a leading `#`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Format 8-bit channels as lowercase hex (`#rrggbb` minus the `#`)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("{:02x}{:02x}{:02x}", r, g, b))
    }

    /// Convert an engine color stop, rounding each `[0, 1]` channel to 8 bits.
    /// Alpha is dropped.
    pub fn from_color(color: &Color) -> Self {
        let [r, g, b, _] = color.to_rgba8();
        Self::from_rgb(r, g, b)
    }

    /// Parse a literal, accepting an optional leading `#`. Case is preserved.
    pub fn parse(literal: &str) -> Result<Self, PaletteError> {
        let digits = literal.strip_prefix('#').unwrap_or(literal);
        if digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(digits.to_string()))
        } else {
            Err(PaletteError::InvalidHexColor(literal.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels
    pub fn rgb(&self) -> [u8; 3] {
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or_default();
        [channel(0), channel(2), channel(4)]
    }

    /// CSS form with the leading `#`, as the renderer expects
    pub fn to_css(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
