// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Serializes a [`PenStyle`] into the single SGR sequence that applies exactly its
//! combination of attributes and colors.
//!
//! Parameters are written in a fixed order, separated by `;`:
//!
//! ```text
//! ESC [ 1 ; 3 ; 4 ; 9 ; 48;2;R;G;B ; 38;2;R;G;B m
//!       │   │   │   │   │            └─ foreground
//!       │   │   │   │   └─ background
//!       │   │   │   └─ strikethrough
//!       │   │   └─ underline
//!       │   └─ italic
//!       └─ bold
//! ```
//!
//! An empty style produces the bare reset `ESC [ m`.

use crate::{BufTextStorage, CSI_START, InfallibleFastStringify, InlineString, PenStyle,
            RgbValue, SGR_BG_RGB_PREFIX, SGR_BOLD, SGR_FG_RGB_PREFIX, SGR_ITALIC,
            SGR_PARAM_SEPARATOR, SGR_SET_GRAPHICS, SGR_STRIKETHROUGH, SGR_UNDERLINE,
            StyleAttrib, generate_impl_fast_stringify_for_infallible, inline_string,
            push_u8};

impl StyleAttrib {
    /// The SGR parameter that turns this attribute on.
    #[must_use]
    pub const fn sgr_param(self) -> &'static str {
        match self {
            StyleAttrib::Bold => SGR_BOLD,
            StyleAttrib::Italic => SGR_ITALIC,
            StyleAttrib::Underline => SGR_UNDERLINE,
            StyleAttrib::Strikethrough => SGR_STRIKETHROUGH,
        }
    }
}

impl InfallibleFastStringify for PenStyle {
    fn push_to_buf(&self, acc: &mut BufTextStorage) {
        acc.push_str(CSI_START);

        for attrib in self.attribs.enabled() {
            acc.push_str(attrib.sgr_param());
            acc.push(SGR_PARAM_SEPARATOR);
        }

        if let Some(color) = self.color_bg {
            push_rgb_param(acc, SGR_BG_RGB_PREFIX, color);
        }

        if let Some(color) = self.color_fg {
            push_rgb_param(acc, SGR_FG_RGB_PREFIX, color);
        }

        // Every parameter is followed by a separator; drop the last one. `CSI_START`
        // ends in `[`, so this never touches what was in `acc` before.
        if acc.ends_with(SGR_PARAM_SEPARATOR) {
            acc.pop();
        }

        acc.push(SGR_SET_GRAPHICS);
    }
}

generate_impl_fast_stringify_for_infallible!(PenStyle);

fn push_rgb_param(acc: &mut BufTextStorage, prefix: &str, color: RgbValue) {
    acc.push_str(prefix);
    for component in [color.red, color.green, color.blue] {
        push_u8(acc, component);
        acc.push(SGR_PARAM_SEPARATOR);
    }
}

impl PenStyle {
    /// The style sequence, without a heap allocation for typical styles.
    #[must_use]
    pub fn to_inline_string(&self) -> InlineString {
        inline_string!("{self}")
    }
}
