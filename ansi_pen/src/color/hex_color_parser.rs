// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parser for hex color strings in the `#RRGGBB` format, eg: `#FF0000` for red.

use nom::{IResult,
          Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::map_res};

use crate::RgbValue;

/// Parse a `#RRGGBB` prefix of `input` into a [`RgbValue`]. The unparsed remainder is
/// returned alongside the color.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = tag("#").parse(input)?;
    let (input, (red, green, blue)) =
        (parse_hex_seg, parse_hex_seg, parse_hex_seg).parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |it: char| it.is_ascii_hexdigit()),
        |it: &str| u8::from_str_radix(it, 16),
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_valid_color() {
        let mut input = String::new();
        input.push_str("#2F14DF");
        input.push('🔅');

        let Ok((remainder, color)) = parse_hex_color(&input) else {
            panic!();
        };
        assert_eq!(remainder, "🔅");
        assert_eq!(color, RgbValue::from_u8(47, 20, 223));
    }

    #[test]
    fn parse_invalid_color() {
        assert!(parse_hex_color("🔅#2F14DF").is_err());
        assert!(parse_hex_color("#2F14D").is_err());
        assert!(parse_hex_color("#2G14DF").is_err());
    }
}
