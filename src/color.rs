//! RGB colors and the shell's packed `0x00BBGGRR` encoding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB triple with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Light desktop background.
    pub const LIGHT: Color = Color::rgb(187, 187, 187);
    /// Dark desktop background.
    pub const DARK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the shell's 24-bit value: blue in bits 16-23, green in 8-15,
    /// red in 0-7. The byte order is fixed by the shell API.
    pub const fn packed(self) -> u32 {
        (self.b as u32) << 16 | (self.g as u32) << 8 | self.r as u32
    }

    /// Decode a packed value. Bits above 23 are ignored.
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: (value & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: ((value >> 16) & 0xFF) as u8,
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_round_trips_through_packed_value() {
        let packed = Color::rgb(187, 187, 187).packed();
        assert_eq!(packed, 0x00BB_BBBB);
        assert_eq!(Color::from_packed(packed), Color::rgb(187, 187, 187));
    }

    #[test]
    fn black_packs_to_zero() {
        assert_eq!(Color::DARK.packed(), 0);
    }

    #[test]
    fn packing_uses_blue_green_red_byte_order() {
        assert_eq!(Color::rgb(0x01, 0x02, 0x03).packed(), 0x0003_0201);
        assert_eq!(Color::from_packed(0x00FF_0000), Color::rgb(0, 0, 255));
    }

    #[test]
    fn from_packed_ignores_high_byte() {
        assert_eq!(Color::from_packed(0xFF00_0010), Color::rgb(0x10, 0, 0));
    }

    #[test]
    fn display_uses_comma_separated_channels() {
        assert_eq!(Color::rgb(10, 20, 30).to_string(), "10,20,30");
    }

    #[test]
    fn deserializes_from_channel_array() {
        #[derive(Deserialize)]
        struct Wrapper {
            c: Color,
        }
        let parsed: Wrapper = toml::from_str("c = [1, 2, 3]").expect("parse");
        assert_eq!(parsed.c, Color::rgb(1, 2, 3));
        assert!(toml::from_str::<Wrapper>("c = [1, 2, 300]").is_err());
    }
}
