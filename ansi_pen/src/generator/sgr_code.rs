// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single attribute SGR sequences. Use [`PenStyle`] to apply several attributes in one
//! sequence.
//!
//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
//!
//! [`PenStyle`]: crate::PenStyle

use crate::{BufTextStorage, CSI_START, InfallibleFastStringify, RgbValue, SGR_BG_RGB_PREFIX,
            SGR_BOLD, SGR_FG_RGB_PREFIX, SGR_ITALIC, SGR_PARAM_SEPARATOR,
            SGR_RESET_BG, SGR_RESET_BOLD, SGR_RESET_FG, SGR_RESET_ITALIC,
            SGR_RESET_STRIKETHROUGH, SGR_RESET_UNDERLINE, SGR_SET_GRAPHICS,
            SGR_STRIKETHROUGH, SGR_UNDERLINE, StyleAttrib,
            generate_impl_fast_stringify_for_infallible, push_u8};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SgrCode {
    /// `ESC [ m`, the bare reset with no parameter.
    Reset,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    ResetBold,
    ResetItalic,
    ResetUnderline,
    ResetStrikethrough,
    ForegroundRgb(u8, u8, u8),
    BackgroundRgb(u8, u8, u8),
    ResetForeground,
    ResetBackground,
}

mod sgr_code_impl_block {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl SgrCode {
        /// The code that turns `attrib` off, leaving other attributes alone.
        #[must_use]
        pub fn reset_for(attrib: StyleAttrib) -> Self {
            match attrib {
                StyleAttrib::Bold => SgrCode::ResetBold,
                StyleAttrib::Italic => SgrCode::ResetItalic,
                StyleAttrib::Underline => SgrCode::ResetUnderline,
                StyleAttrib::Strikethrough => SgrCode::ResetStrikethrough,
            }
        }

        #[must_use]
        pub fn foreground(color: RgbValue) -> Self {
            SgrCode::ForegroundRgb(color.red, color.green, color.blue)
        }

        #[must_use]
        pub fn background(color: RgbValue) -> Self {
            SgrCode::BackgroundRgb(color.red, color.green, color.blue)
        }
    }

    impl From<StyleAttrib> for SgrCode {
        fn from(attrib: StyleAttrib) -> Self {
            match attrib {
                StyleAttrib::Bold => SgrCode::Bold,
                StyleAttrib::Italic => SgrCode::Italic,
                StyleAttrib::Underline => SgrCode::Underline,
                StyleAttrib::Strikethrough => SgrCode::Strikethrough,
            }
        }
    }

    impl InfallibleFastStringify for SgrCode {
        #[rustfmt::skip]
        fn push_to_buf(&self, acc: &mut BufTextStorage) {
            acc.push_str(CSI_START);
            match *self {
                SgrCode::Reset              => {}
                SgrCode::Bold               => acc.push_str(SGR_BOLD),
                SgrCode::Italic             => acc.push_str(SGR_ITALIC),
                SgrCode::Underline          => acc.push_str(SGR_UNDERLINE),
                SgrCode::Strikethrough      => acc.push_str(SGR_STRIKETHROUGH),
                SgrCode::ResetBold          => acc.push_str(SGR_RESET_BOLD),
                SgrCode::ResetItalic        => acc.push_str(SGR_RESET_ITALIC),
                SgrCode::ResetUnderline     => acc.push_str(SGR_RESET_UNDERLINE),
                SgrCode::ResetStrikethrough => acc.push_str(SGR_RESET_STRIKETHROUGH),
                SgrCode::ResetForeground    => acc.push_str(SGR_RESET_FG),
                SgrCode::ResetBackground    => acc.push_str(SGR_RESET_BG),
                SgrCode::ForegroundRgb(r, g, b) => push_rgb(acc, SGR_FG_RGB_PREFIX, r, g, b),
                SgrCode::BackgroundRgb(r, g, b) => push_rgb(acc, SGR_BG_RGB_PREFIX, r, g, b),
            }
            acc.push(SGR_SET_GRAPHICS);
        }
    }

    fn push_rgb(acc: &mut BufTextStorage, prefix: &str, r: u8, g: u8, b: u8) {
        acc.push_str(prefix);
        push_u8(acc, r);
        acc.push(SGR_PARAM_SEPARATOR);
        push_u8(acc, g);
        acc.push(SGR_PARAM_SEPARATOR);
        push_u8(acc, b);
    }
}

generate_impl_fast_stringify_for_infallible!(SgrCode);
