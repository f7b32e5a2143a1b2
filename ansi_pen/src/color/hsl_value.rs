// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HSL (hue, saturation, lightness) color representation, converted to [`RgbValue`] on
//! demand.

use crate::{RgbValue, TransformColor};

/// A color given as hue in degrees, plus saturation and lightness in `[0, 1]`.
///
/// Construction never fails. Out of range values are normalized when the color is
/// resolved:
/// - `hue` wraps modulo 360, so `-120.0` and `240.0` are the same color. A hue that is
///   not finite is treated as `0.0`.
/// - `saturation` and `lightness` are clamped to `[0, 1]`. `NaN` is treated as `0.0`.
///
/// ```
/// use r3bl_ansi_pen::{HslValue, RgbValue};
///
/// let red = RgbValue::from(HslValue::new(0.0, 1.0, 0.5));
/// assert_eq!(red, RgbValue::from_u8(255, 0, 0));
/// ```
#[derive(Clone, PartialEq, Copy, Debug, Default)]
pub struct HslValue {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl HslValue {
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl TransformColor for HslValue {
    fn as_rgb(&self) -> RgbValue { convert_hsl_into_rgb(*self) }
}

impl From<HslValue> for RgbValue {
    fn from(value: HslValue) -> Self { convert_hsl_into_rgb(value) }
}

/// Chroma and hue sector conversion. Each component is scaled by 255 and truncated, so
/// a lightness of `0.5` with no saturation gives `127`, not `128`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn convert_hsl_into_rgb(hsl: HslValue) -> RgbValue {
    let hue = normalize_hue(hsl.hue);
    let saturation = clamp_unit(hsl.saturation);
    let lightness = clamp_unit(hsl.lightness);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hue_sector = hue / 60.0;
    let x = chroma * (1.0 - (hue_sector % 2.0 - 1.0).abs());

    // `rem_euclid` can round up to exactly 360, which is sector 6, the same as 0.
    let (red, green, blue) = match hue_sector as u8 % 6 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = lightness - chroma / 2.0;

    // Float to int `as` casts saturate, so rounding noise can't wrap around.
    RgbValue {
        red: ((red + m) * 255.0) as u8,
        green: ((green + m) * 255.0) as u8,
        blue: ((blue + m) * 255.0) as u8,
    }
}

fn normalize_hue(hue: f32) -> f32 {
    if hue.is_finite() {
        hue.rem_euclid(360.0)
    } else {
        0.0
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
        HslValue::new(hue, saturation, lightness).rgb_components()
    }

    #[test_case(0.0, (255, 0, 0) ; "red")]
    #[test_case(60.0, (255, 255, 0) ; "yellow")]
    #[test_case(120.0, (0, 255, 0) ; "green")]
    #[test_case(180.0, (0, 255, 255) ; "cyan")]
    #[test_case(240.0, (0, 0, 255) ; "blue")]
    #[test_case(300.0, (255, 0, 255) ; "magenta")]
    #[test_case(30.0, (255, 127, 0) ; "orange truncates")]
    fn test_fully_saturated_hues(hue: f32, expected: (u8, u8, u8)) {
        assert_eq!(rgb(hue, 1.0, 0.5), expected);
    }

    #[test_case(0.0, 0)]
    #[test_case(0.25, 63)]
    #[test_case(0.5, 127)]
    #[test_case(0.75, 191)]
    #[test_case(1.0, 255)]
    fn test_no_saturation_is_gray(lightness: f32, expected: u8) {
        for hue in [0.0, 90.0, 200.0, 359.0] {
            assert_eq!(rgb(hue, 0.0, lightness), (expected, expected, expected));
        }
    }

    #[test]
    fn test_hue_wraps_modulo_360() {
        for hue in [0.0, 30.0, 135.0, 200.5, 359.0] {
            let expected = rgb(hue, 0.8, 0.4);
            for k in [-3.0, -1.0, 1.0, 2.0, 5.0] {
                assert_eq!(rgb(hue + 360.0 * k, 0.8, 0.4), expected, "hue {hue}, k {k}");
            }
        }
        assert_eq!(rgb(-120.0, 1.0, 0.5), rgb(240.0, 1.0, 0.5));
        assert_eq!(rgb(360.0, 1.0, 0.5), rgb(0.0, 1.0, 0.5));
    }

    /// These hues are a hair below 0, so `rem_euclid` rounds them up to exactly 360
    /// (sector 6), which must land on red and not black.
    #[test_case(-1e-6)]
    #[test_case(-1e-5)]
    #[allow(clippy::float_cmp)]
    fn test_hue_rounding_up_to_360_folds_to_red(hue: f32) {
        assert_eq!(normalize_hue(hue), 360.0);
        assert_eq!(rgb(hue, 1.0, 0.5), (255, 0, 0));
    }

    #[test]
    fn test_saturation_and_lightness_clamp() {
        assert_eq!(rgb(120.0, 7.0, 0.5), rgb(120.0, 1.0, 0.5));
        assert_eq!(rgb(120.0, -2.0, 0.5), rgb(120.0, 0.0, 0.5));
        assert_eq!(rgb(120.0, 1.0, 3.0), (255, 255, 255));
        assert_eq!(rgb(120.0, 1.0, -3.0), (0, 0, 0));
    }

    #[test]
    fn test_non_finite_input_is_normalized() {
        assert_eq!(rgb(f32::NAN, 1.0, 0.5), rgb(0.0, 1.0, 0.5));
        assert_eq!(rgb(f32::INFINITY, 1.0, 0.5), rgb(0.0, 1.0, 0.5));
        assert_eq!(rgb(120.0, f32::NAN, 0.5), rgb(120.0, 0.0, 0.5));
        assert_eq!(rgb(120.0, 1.0, f32::NAN), (0, 0, 0));
        assert_eq!(rgb(120.0, f32::INFINITY, 0.5), rgb(120.0, 1.0, 0.5));
        assert_eq!(rgb(120.0, 1.0, f32::NEG_INFINITY), (0, 0, 0));
    }

    #[test]
    fn test_from_hsl_for_rgb() {
        let hsl = HslValue::new(300.0, 1.0, 0.5);
        assert_eq!(RgbValue::from(hsl), hsl.as_rgb());
    }
}
