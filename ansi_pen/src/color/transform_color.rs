// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::RgbValue;

/// Anything that can resolve itself to a 24-bit truecolor value. Implemented by
/// [`RgbValue`], [`HslValue`], `(u8, u8, u8)` tuples, and references to any of them.
///
/// ```
/// use r3bl_ansi_pen::{HslValue, TransformColor};
///
/// let orange = HslValue::new(30.0, 1.0, 0.5);
/// assert_eq!(orange.rgb_components(), (255, 127, 0));
/// ```
///
/// [`HslValue`]: crate::HslValue
pub trait TransformColor {
    /// Returns a [`RgbValue`] representation of the `self` color.
    fn as_rgb(&self) -> RgbValue;

    /// Returns the `(red, green, blue)` components of the `self` color.
    fn rgb_components(&self) -> (u8, u8, u8) {
        let RgbValue { red, green, blue } = self.as_rgb();
        (red, green, blue)
    }
}

impl<T: TransformColor + ?Sized> TransformColor for &T {
    fn as_rgb(&self) -> RgbValue { (**self).as_rgb() }
}

impl TransformColor for (u8, u8, u8) {
    fn as_rgb(&self) -> RgbValue { RgbValue::from(*self) }
}

/// Free function form of [`TransformColor::rgb_components`].
pub fn rgb_components(color: &impl TransformColor) -> (u8, u8, u8) {
    color.rgb_components()
}
