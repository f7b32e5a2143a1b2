// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor and screen operations on a [`Pen`]. The [`CsiSequence`] is written to the
//! sink as is, never framed, whatever the styling policy.

use std::io::{self, Write};

use crate::{BufTextStorage, CsiSequence, CursorStyle, FastStringify, Hyperlink, Pen};

impl<W: Write> Pen<W> {
    /// Write `sequence` to the sink, unframed. Nothing reaches the sink if `sequence`
    /// fails to render.
    ///
    /// # Errors
    ///
    /// Returns the sink's error unchanged, or an [`io::ErrorKind::Other`] error
    /// wrapping the [`std::fmt::Error`] when rendering fails.
    pub fn write_sequence(&mut self, sequence: &impl FastStringify) -> io::Result<()> {
        let mut acc = BufTextStorage::new();
        sequence.write_to_buf(&mut acc).map_err(io::Error::other)?;
        self.get_mut().write_all(acc.as_bytes())
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn cursor_up(&mut self, n: u16) -> io::Result<()> {
        self.write_sequence(&CsiSequence::CursorUp(n))
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn cursor_down(&mut self, n: u16) -> io::Result<()> {
        self.write_sequence(&CsiSequence::CursorDown(n))
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn cursor_forward(&mut self, n: u16) -> io::Result<()> {
        self.write_sequence(&CsiSequence::CursorForward(n))
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn cursor_backward(&mut self, n: u16) -> io::Result<()> {
        self.write_sequence(&CsiSequence::CursorBackward(n))
    }

    /// Move to 0-based `row` and `col`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        self.write_sequence(&CsiSequence::MoveTo { row, col })
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn scroll_up(&mut self, n: u16) -> io::Result<()> {
        self.write_sequence(&CsiSequence::ScrollUp(n))
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn scroll_down(&mut self, n: u16) -> io::Result<()> {
        self.write_sequence(&CsiSequence::ScrollDown(n))
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn erase_screen(&mut self) -> io::Result<()> {
        self.write_sequence(&CsiSequence::EraseScreen)
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn erase_line(&mut self) -> io::Result<()> {
        self.write_sequence(&CsiSequence::EraseLine)
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn set_cursor_style(&mut self, style: CursorStyle) -> io::Result<()> {
        self.write_sequence(&CsiSequence::SetCursorStyle(style))
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn show_cursor(&mut self) -> io::Result<()> {
        self.write_sequence(&CsiSequence::ShowCursor)
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn hide_cursor(&mut self) -> io::Result<()> {
        self.write_sequence(&CsiSequence::HideCursor)
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn enter_alternate_screen(&mut self) -> io::Result<()> {
        self.write_sequence(&CsiSequence::EnterAlternateScreen)
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn leave_alternate_screen(&mut self) -> io::Result<()> {
        self.write_sequence(&CsiSequence::LeaveAlternateScreen)
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn enable_bracketed_paste(&mut self) -> io::Result<()> {
        self.write_sequence(&CsiSequence::EnableBracketedPaste)
    }

    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn disable_bracketed_paste(&mut self) -> io::Result<()> {
        self.write_sequence(&CsiSequence::DisableBracketedPaste)
    }

    /// Write an OSC 8 hyperlink. Like the cursor operations, it is not framed.
    ///
    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn hyperlink(&mut self, link: &str, text: &str) -> io::Result<()> {
        self.write_sequence(&Hyperlink::new(link, text))
    }
}
