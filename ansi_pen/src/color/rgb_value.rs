// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.

use super::hex_color_parser::parse_hex_color;
use crate::{AnsiPenError, AnsiPenResult, TransformColor};

/// Represents a color in RGB (24-bit truecolor) format. The [`Default`] is black.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// `0xRRGGBB`. The top byte is ignored.
impl From<u32> for RgbValue {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl From<RgbValue> for (u8, u8, u8) {
    fn from(value: RgbValue) -> Self { (value.red, value.green, value.blue) }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Resolve any color once, so it can be reused without converting again.
    #[must_use]
    pub fn from_color(color: &impl TransformColor) -> Self { color.as_rgb() }

    /// Parse a `#RRGGBB` string. Anything after the six hex digits is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiPenError::InvalidHexColor`] if the input is not in the `#RRGGBB`
    /// format.
    pub fn try_from_hex_color(input: &str) -> AnsiPenResult<RgbValue> {
        match parse_hex_color(input) {
            Ok(("", color)) => Ok(color),
            _ => Err(AnsiPenError::InvalidHexColor {
                input: input.into(),
            }),
        }
    }
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::HslValue;

    #[test]
    fn test_new() {
        let value = RgbValue::from_u8(1, 2, 3);
        assert_eq!((value.red, value.green, value.blue), (1, 2, 3));
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(RgbValue::default(), RgbValue::from_u8(0, 0, 0));
    }

    #[test_case(0x00_FF_80_00, (255, 128, 0))]
    #[test_case(0x00_00_00_00, (0, 0, 0))]
    #[test_case(0xAB_12_34_56, (0x12, 0x34, 0x56))]
    fn test_from_u32(value: u32, expected: (u8, u8, u8)) {
        assert_eq!(RgbValue::from(value).rgb_components(), expected);
    }

    #[test]
    fn test_from_color_resolves_hsl() {
        let hsl = HslValue::new(240.0, 1.0, 0.5);
        let rgb = RgbValue::from_color(&hsl);
        assert_eq!(rgb, RgbValue::from_u8(0, 0, 255));
        assert_eq!(RgbValue::from_color(&rgb), rgb);
    }

    #[test_case("#ff0000", (255, 0, 0))]
    #[test_case("#2F14DF", (47, 20, 223))]
    #[test_case("#000000", (0, 0, 0))]
    fn test_try_from_hex_color_valid(input: &str, expected: (u8, u8, u8)) {
        let value = RgbValue::try_from_hex_color(input).unwrap();
        assert_eq!(value.rgb_components(), expected);
    }

    #[test_case("#ff000")]
    #[test_case("ff0000")]
    #[test_case("#gg0000")]
    #[test_case("#ff0000ff")]
    #[test_case("")]
    fn test_try_from_hex_color_invalid(input: &str) {
        let result = RgbValue::try_from_hex_color(input);
        assert_eq!(
            result,
            Err(AnsiPenError::InvalidHexColor {
                input: input.into()
            })
        );
    }
}
