// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{RgbValue, StyleAttrib, StyleAttribs, TransformColor};

/// The style state a pen writes with: which attributes are active, plus optional
/// foreground and background colors.
///
/// Colors are resolved to [`RgbValue`] when they are set, so an [`HslValue`] is
/// converted once and not on every write. Every mutator is idempotent and returns
/// `&mut Self` so calls can be chained.
///
/// ```
/// use r3bl_ansi_pen::{HslValue, PenStyle, StyleAttrib};
///
/// let mut style = PenStyle::default();
/// style
///     .enable(StyleAttrib::Bold)
///     .set_fg(HslValue::new(120.0, 1.0, 0.5));
/// assert_eq!(style.to_string(), "\x1b[1;38;2;0;255;0m");
///
/// style.clear_all();
/// assert!(style.is_empty());
/// assert_eq!(style.to_string(), "\x1b[m");
/// ```
///
/// [`HslValue`]: crate::HslValue
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct PenStyle {
    pub attribs: StyleAttribs,
    pub color_fg: Option<RgbValue>,
    pub color_bg: Option<RgbValue>,
}

mod pen_style_impl_block {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl PenStyle {
        pub fn enable(&mut self, attrib: StyleAttrib) -> &mut Self {
            self.attribs.insert(attrib);
            self
        }

        pub fn disable(&mut self, attrib: StyleAttrib) -> &mut Self {
            self.attribs.remove(attrib);
            self
        }

        #[must_use]
        pub fn contains(&self, attrib: StyleAttrib) -> bool { self.attribs.contains(attrib) }

        pub fn set_fg(&mut self, color: impl TransformColor) -> &mut Self {
            self.color_fg = Some(color.as_rgb());
            self
        }

        pub fn clear_fg(&mut self) -> &mut Self {
            self.color_fg = None;
            self
        }

        pub fn set_bg(&mut self, color: impl TransformColor) -> &mut Self {
            self.color_bg = Some(color.as_rgb());
            self
        }

        pub fn clear_bg(&mut self) -> &mut Self {
            self.color_bg = None;
            self
        }

        /// Every attribute off and both colors unset.
        pub fn clear_all(&mut self) -> &mut Self {
            *self = Self::default();
            self
        }

        /// `true` iff no attribute and no color is set.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.attribs.is_none() && self.color_fg.is_none() && self.color_bg.is_none()
        }

        #[must_use]
        pub fn fg(&self) -> Option<RgbValue> { self.color_fg }

        #[must_use]
        pub fn bg(&self) -> Option<RgbValue> { self.color_bg }
    }

    /// By value variants, for building a style in one expression.
    impl PenStyle {
        #[must_use]
        pub fn with(mut self, attrib: StyleAttrib) -> Self {
            self.enable(attrib);
            self
        }

        #[must_use]
        pub fn with_fg(mut self, color: impl TransformColor) -> Self {
            self.set_fg(color);
            self
        }

        #[must_use]
        pub fn with_bg(mut self, color: impl TransformColor) -> Self {
            self.set_bg(color);
            self
        }
    }

    impl From<StyleAttribs> for PenStyle {
        fn from(attribs: StyleAttribs) -> Self {
            Self {
                attribs,
                ..Self::default()
            }
        }
    }

    impl From<StyleAttrib> for PenStyle {
        fn from(attrib: StyleAttrib) -> Self { StyleAttribs::from(attrib).into() }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::HslValue;

    #[test]
    fn test_new_style_is_empty() {
        let style = PenStyle::default();
        assert!(style.is_empty());
        assert_eq!(style.fg(), None);
        assert_eq!(style.bg(), None);
    }

    #[test]
    fn test_enable_disable_round_trip_is_empty() {
        let mut style = PenStyle::default();
        style
            .enable(StyleAttrib::Underline)
            .enable(StyleAttrib::Underline)
            .disable(StyleAttrib::Underline);
        assert!(style.is_empty());
        assert_eq!(style, PenStyle::default());
    }

    #[test]
    fn test_colors_are_resolved_when_set() {
        let mut style = PenStyle::default();
        style
            .set_fg(HslValue::new(0.0, 1.0, 0.5))
            .set_bg((1_u8, 2_u8, 3_u8));
        assert_eq!(style.fg(), Some(RgbValue::from_u8(255, 0, 0)));
        assert_eq!(style.bg(), Some(RgbValue::from_u8(1, 2, 3)));
        assert!(!style.is_empty());

        style.clear_fg();
        assert_eq!(style.fg(), None);
        assert!(!style.is_empty());

        style.clear_bg();
        assert!(style.is_empty());
    }

    #[test]
    fn test_clear_all() {
        let mut style = PenStyle::from(StyleAttrib::Bold + StyleAttrib::Strikethrough)
            .with_fg(RgbValue::from_u8(9, 9, 9))
            .with_bg(RgbValue::from_u8(8, 8, 8));
        assert!(style.contains(StyleAttrib::Strikethrough));
        style.clear_all();
        assert!(style.is_empty());
    }

    #[test]
    fn test_setting_a_color_twice_keeps_the_last() {
        let style = PenStyle::default()
            .with_fg(RgbValue::from_u8(1, 1, 1))
            .with_fg(RgbValue::from_u8(2, 2, 2));
        assert_eq!(style.fg(), Some(RgbValue::from_u8(2, 2, 2)));
    }
}
