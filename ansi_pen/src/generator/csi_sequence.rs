// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI (Control Sequence Introducer) sequences for the cursor and the screen.
//!
//! These are written as is, never framed by style and reset sequences.
//!
//! ## Structure
//! - Numeric: `ESC [ n final`, eg: `ESC [ 3 A` moves the cursor up 3 rows
//! - DEC private mode: `ESC [ ? n h` to set, `ESC [ ? n l` to reset

use crate::{ALT_SCREEN_BUFFER, BRACKETED_PASTE_MODE, BufTextStorage,
            CSI_CURSOR_BACKWARD, CSI_CURSOR_DOWN, CSI_CURSOR_FORWARD,
            CSI_CURSOR_POSITION, CSI_CURSOR_UP, CSI_ERASE_DISPLAY, CSI_ERASE_LINE,
            CSI_PARAM_SEPARATOR, CSI_PRIVATE_MODE_PREFIX, CSI_SCROLL_DOWN,
            CSI_SCROLL_UP, CSI_START, DEC_PRIVATE_MODE_RESET, DEC_PRIVATE_MODE_SET,
            DECSCUSR_SET_CURSOR_STYLE, DECTCEM_SHOW_CURSOR, ERASE_ALL,
            InfallibleFastStringify, generate_impl_fast_stringify_for_infallible,
            push_u16};

/// Shape of the text cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    #[default]
    Block,
    Underline,
    Bar,
}

/// Shape and blinking of the text cursor, set with DECSCUSR. The [`Default`] is a
/// blinking block, which is what most terminals start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorStyle {
    pub shape: CursorShape,
    pub blinking: bool,
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self {
            shape: CursorShape::Block,
            blinking: true,
        }
    }
}

impl CursorStyle {
    #[must_use]
    pub const fn new(shape: CursorShape, blinking: bool) -> Self { Self { shape, blinking } }

    /// DECSCUSR parameter: 1 and 2 are block, 3 and 4 underline, 5 and 6 bar. The odd
    /// one of each pair blinks.
    #[must_use]
    pub const fn decscusr_param(self) -> u16 {
        let blinking_param = match self.shape {
            CursorShape::Block => 1,
            CursorShape::Underline => 3,
            CursorShape::Bar => 5,
        };
        if self.blinking {
            blinking_param
        } else {
            blinking_param + 1
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsiSequence {
    /// CSI n A (CUU)
    CursorUp(u16),
    /// CSI n B (CUD)
    CursorDown(u16),
    /// CSI n C (CUF)
    CursorForward(u16),
    /// CSI n D (CUB)
    CursorBackward(u16),
    /// CSI row ; col H (CUP). `row` and `col` are 0-based here and 1-based on the wire.
    MoveTo { row: u16, col: u16 },
    /// CSI n S (SU)
    ScrollUp(u16),
    /// CSI n T (SD)
    ScrollDown(u16),
    /// CSI 2 J (ED)
    EraseScreen,
    /// CSI 2 K (EL)
    EraseLine,
    /// CSI n SP q (DECSCUSR)
    SetCursorStyle(CursorStyle),
    /// CSI ? 25 h
    ShowCursor,
    /// CSI ? 25 l
    HideCursor,
    /// CSI ? 1049 h
    EnterAlternateScreen,
    /// CSI ? 1049 l
    LeaveAlternateScreen,
    /// CSI ? 2004 h
    EnableBracketedPaste,
    /// CSI ? 2004 l
    DisableBracketedPaste,
}

impl InfallibleFastStringify for CsiSequence {
    fn push_to_buf(&self, acc: &mut BufTextStorage) {
        acc.push_str(CSI_START);
        match *self {
            CsiSequence::CursorUp(n) => push_numeric(acc, n, CSI_CURSOR_UP),
            CsiSequence::CursorDown(n) => push_numeric(acc, n, CSI_CURSOR_DOWN),
            CsiSequence::CursorForward(n) => push_numeric(acc, n, CSI_CURSOR_FORWARD),
            CsiSequence::CursorBackward(n) => push_numeric(acc, n, CSI_CURSOR_BACKWARD),
            CsiSequence::MoveTo { row, col } => {
                push_u16(acc, row.saturating_add(1));
                acc.push(CSI_PARAM_SEPARATOR);
                push_numeric(acc, col.saturating_add(1), CSI_CURSOR_POSITION);
            }
            CsiSequence::ScrollUp(n) => push_numeric(acc, n, CSI_SCROLL_UP),
            CsiSequence::ScrollDown(n) => push_numeric(acc, n, CSI_SCROLL_DOWN),
            CsiSequence::EraseScreen => {
                acc.push_str(ERASE_ALL);
                acc.push(CSI_ERASE_DISPLAY);
            }
            CsiSequence::EraseLine => {
                acc.push_str(ERASE_ALL);
                acc.push(CSI_ERASE_LINE);
            }
            CsiSequence::SetCursorStyle(style) => {
                push_u16(acc, style.decscusr_param());
                acc.push_str(DECSCUSR_SET_CURSOR_STYLE);
            }
            CsiSequence::ShowCursor => {
                push_private_mode(acc, DECTCEM_SHOW_CURSOR, DEC_PRIVATE_MODE_SET);
            }
            CsiSequence::HideCursor => {
                push_private_mode(acc, DECTCEM_SHOW_CURSOR, DEC_PRIVATE_MODE_RESET);
            }
            CsiSequence::EnterAlternateScreen => {
                push_private_mode(acc, ALT_SCREEN_BUFFER, DEC_PRIVATE_MODE_SET);
            }
            CsiSequence::LeaveAlternateScreen => {
                push_private_mode(acc, ALT_SCREEN_BUFFER, DEC_PRIVATE_MODE_RESET);
            }
            CsiSequence::EnableBracketedPaste => {
                push_private_mode(acc, BRACKETED_PASTE_MODE, DEC_PRIVATE_MODE_SET);
            }
            CsiSequence::DisableBracketedPaste => {
                push_private_mode(acc, BRACKETED_PASTE_MODE, DEC_PRIVATE_MODE_RESET);
            }
        }
    }
}

generate_impl_fast_stringify_for_infallible!(CsiSequence);

fn push_numeric(acc: &mut BufTextStorage, n: u16, final_char: char) {
    push_u16(acc, n);
    acc.push(final_char);
}

fn push_private_mode(acc: &mut BufTextStorage, mode: u16, final_char: char) {
    acc.push(CSI_PRIVATE_MODE_PREFIX);
    push_numeric(acc, mode, final_char);
}
