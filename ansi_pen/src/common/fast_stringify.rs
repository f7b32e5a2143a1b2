// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Trait for building escape sequences piece by piece without going through the
//! formatter for every fragment. See [`FastStringify`] and [`BufTextStorage`] for
//! details.

use std::fmt::{Display, Formatter, Result};

/// High-performance string building for the sequence types in this crate.
///
/// This trait requires [`Display`] as a supertrait. Implementors build their text in
/// [`write_to_buf()`] using [`push_str`] and [`push`], and then the [`Display`]
/// implementation (usually generated by [`generate_impl_display_for_fast_stringify!`])
/// makes a single [`write_str`] call on the [`Formatter`].
///
/// ```
/// use r3bl_ansi_pen::{BufTextStorage, FastStringify, SgrCode};
///
/// let mut acc = BufTextStorage::new();
/// SgrCode::Bold.write_to_buf(&mut acc).unwrap();
/// SgrCode::Italic.write_to_buf(&mut acc).unwrap();
/// assert_eq!(acc, "\x1b[1m\x1b[3m");
/// ```
///
/// [`write_to_buf()`]: FastStringify::write_to_buf
/// [`push_str`]: String::push_str
/// [`push`]: String::push
/// [`write_str`]: std::fmt::Formatter::write_str
/// [`generate_impl_display_for_fast_stringify!`]: crate::generate_impl_display_for_fast_stringify
pub trait FastStringify: Display {
    /// Append the text representation of `self` to `acc`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the buffer fails (formatting error).
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result;

    /// Write the buffer to the formatter. Call from [`Display::fmt`] after
    /// [`write_to_buf`].
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the formatter fails (formatting error).
    ///
    /// [`write_to_buf`]: FastStringify::write_to_buf
    fn write_buf_to_fmt(&self, acc: &BufTextStorage, f: &mut Formatter<'_>) -> Result {
        f.write_str(acc)
    }
}

/// A [`FastStringify`] type whose rendering only pushes onto the buffer, so it can't
/// fail. Implement [`push_to_buf`] and generate the rest with
/// [`generate_impl_fast_stringify_for_infallible!`].
///
/// [`push_to_buf`]: InfallibleFastStringify::push_to_buf
/// [`generate_impl_fast_stringify_for_infallible!`]: crate::generate_impl_fast_stringify_for_infallible
pub trait InfallibleFastStringify: FastStringify {
    /// Append the text representation of `self` to `acc`.
    fn push_to_buf(&self, acc: &mut BufTextStorage);
}

/// Buffer for building text. Plain [`String`] is used since these buffers are short
/// lived (created in every [`Display::fmt`] call and dropped right after).
pub type BufTextStorage = String;

/// Implement [`Display`] for a type that implements [`FastStringify`].
#[macro_export]
macro_rules! generate_impl_display_for_fast_stringify {
    ($type:ty) => {
        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut acc = $crate::BufTextStorage::new();
                $crate::FastStringify::write_to_buf(self, &mut acc)?;
                $crate::FastStringify::write_buf_to_fmt(self, &acc, f)
            }
        }
    };
}

/// Implement [`FastStringify`] and [`Display`] for a type that implements
/// [`InfallibleFastStringify`].
#[macro_export]
macro_rules! generate_impl_fast_stringify_for_infallible {
    ($type:ty) => {
        impl $crate::FastStringify for $type {
            fn write_to_buf(&self, acc: &mut $crate::BufTextStorage) -> ::std::fmt::Result {
                $crate::InfallibleFastStringify::push_to_buf(self, acc);
                Ok(())
            }
        }

        $crate::generate_impl_display_for_fast_stringify!($type);
    };
}

const DECIMAL_DIGITS: &[u8; 10] = b"0123456789";

/// Append the decimal representation of `value` to `acc`, without the formatter.
pub fn push_u16(acc: &mut BufTextStorage, value: u16) {
    // u16::MAX has 5 digits.
    let mut digits = [0_u8; 5];
    let mut start = digits.len();
    let mut rest = value;
    loop {
        start -= 1;
        digits[start] = DECIMAL_DIGITS[usize::from(rest % 10)];
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    for &digit in &digits[start..] {
        acc.push(char::from(digit));
    }
}

/// Append the decimal representation of `value` to `acc`, without the formatter.
pub fn push_u8(acc: &mut BufTextStorage, value: u8) { push_u16(acc, u16::from(value)); }
