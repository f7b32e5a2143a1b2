// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use core::fmt::Debug;
use std::ops::{Add, AddAssign};

use strum_macros::{EnumCount, EnumIter};

/// One of the text attributes a [`StyleAttribs`] can hold.
///
/// The declaration order is the order in which attributes are serialized into a
/// sequence.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, EnumCount, EnumIter)]
pub enum StyleAttrib {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

/// The set of text attributes that are currently active. Each flag is independent.
///
/// ### Combining attributes with + and +=
///
/// ```
/// use r3bl_ansi_pen::{StyleAttrib::{Bold, Italic, Underline}, StyleAttribs};
///
/// let bold_italic: StyleAttribs = Bold + Italic;
/// assert!(bold_italic.contains(Bold));
///
/// let mut attribs = StyleAttribs::default();
/// attribs += Underline;
/// assert_eq!(attribs.enabled().collect::<Vec<_>>(), vec![Underline]);
///
/// attribs.reset();
/// assert!(attribs.is_none());
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct StyleAttribs {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl StyleAttribs {
    /// Returns `true` if no attribute is set.
    #[must_use]
    pub fn is_none(&self) -> bool {
        !(self.bold || self.italic || self.underline || self.strikethrough)
    }

    /// Turns every attribute off.
    pub fn reset(&mut self) { *self = Self::default(); }

    #[must_use]
    pub fn contains(&self, attrib: StyleAttrib) -> bool {
        match attrib {
            StyleAttrib::Bold => self.bold,
            StyleAttrib::Italic => self.italic,
            StyleAttrib::Underline => self.underline,
            StyleAttrib::Strikethrough => self.strikethrough,
        }
    }

    pub fn insert(&mut self, attrib: StyleAttrib) { *self.flag_mut(attrib) = true; }

    pub fn remove(&mut self, attrib: StyleAttrib) { *self.flag_mut(attrib) = false; }

    /// The attributes that are set, in serialization order.
    pub fn enabled(self) -> impl Iterator<Item = StyleAttrib> {
        use strum::IntoEnumIterator as _;
        StyleAttrib::iter().filter(move |it| self.contains(*it))
    }

    fn flag_mut(&mut self, attrib: StyleAttrib) -> &mut bool {
        match attrib {
            StyleAttrib::Bold => &mut self.bold,
            StyleAttrib::Italic => &mut self.italic,
            StyleAttrib::Underline => &mut self.underline,
            StyleAttrib::Strikethrough => &mut self.strikethrough,
        }
    }
}

impl From<StyleAttrib> for StyleAttribs {
    fn from(attrib: StyleAttrib) -> Self {
        let mut it = Self::default();
        it.insert(attrib);
        it
    }
}

impl Add for StyleAttribs {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            bold: self.bold || rhs.bold,
            italic: self.italic || rhs.italic,
            underline: self.underline || rhs.underline,
            strikethrough: self.strikethrough || rhs.strikethrough,
        }
    }
}

impl Add<StyleAttrib> for StyleAttribs {
    type Output = Self;
    fn add(mut self, rhs: StyleAttrib) -> Self::Output {
        self.insert(rhs);
        self
    }
}

impl Add for StyleAttrib {
    type Output = StyleAttribs;
    fn add(self, rhs: Self) -> Self::Output { StyleAttribs::from(self) + rhs }
}

impl AddAssign<StyleAttrib> for StyleAttribs {
    fn add_assign(&mut self, rhs: StyleAttrib) { self.insert(rhs); }
}

impl AddAssign for StyleAttribs {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
