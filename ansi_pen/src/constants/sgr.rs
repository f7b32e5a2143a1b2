// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) sequence constants.

use const_format::concatcp;

use crate::CSI_START;

/// Final byte of every SGR sequence.
pub const SGR_SET_GRAPHICS: char = 'm';

/// Separator between SGR parameters.
pub const SGR_PARAM_SEPARATOR: char = ';';

// Attribute parameters.

pub const SGR_BOLD: &str = "1";
pub const SGR_ITALIC: &str = "3";
pub const SGR_UNDERLINE: &str = "4";
pub const SGR_STRIKETHROUGH: &str = "9";

// Attribute un-set parameters. 22 is "normal intensity", which also clears dim.

pub const SGR_RESET_BOLD: &str = "22";
pub const SGR_RESET_ITALIC: &str = "23";
pub const SGR_RESET_UNDERLINE: &str = "24";
pub const SGR_RESET_STRIKETHROUGH: &str = "29";

// Truecolor parameters. Followed by `R;G;B`.

pub const SGR_FG_RGB_PREFIX: &str = "38;2;";
pub const SGR_BG_RGB_PREFIX: &str = "48;2;";

pub const SGR_RESET_FG: &str = "39";
pub const SGR_RESET_BG: &str = "49";

/// SGR Reset sequence, with no parameters: ESC [ m
///
/// Resets all text attributes (color, bold, italic, etc.) to default.
pub const SGR_RESET: &str = concatcp!(CSI_START, SGR_SET_GRAPHICS);

/// [`SGR_RESET`] as bytes, for writing straight to a sink.
pub const SGR_RESET_BYTES: &[u8] = SGR_RESET.as_bytes();
