// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{self, Display},
          io::{self, Write}};

use crate::{BufTextStorage, CsiSequence, CursorStyle, FastStringify, Hyperlink,
            InfallibleFastStringify, PenStyle, SgrCode, StyleAttrib, TransformColor};

/// A growable text buffer that sequences and text are appended to, and then written to
/// a sink in one go.
///
/// Appenders return `&mut Self` so they can be chained. Text appended with
/// [`push_str`], [`fmt::Write`] or [`io::Write`] is not escaped or framed.
///
/// ```
/// use r3bl_ansi_pen::{AnsiSequenceBuilder, RgbValue};
///
/// let mut builder = AnsiSequenceBuilder::new();
/// builder
///     .move_to(0, 0)
///     .bold()
///     .fg(RgbValue::from_u8(255, 0, 0))
///     .push_str("alert")
///     .reset();
///
/// let mut sink = Vec::<u8>::new();
/// let written = builder.flush_to(&mut sink).unwrap();
/// assert_eq!(sink, b"\x1b[1;1H\x1b[1m\x1b[38;2;255;0;0malert\x1b[m");
/// assert_eq!(written, sink.len());
/// assert!(builder.is_empty());
/// ```
///
/// [`push_str`]: AnsiSequenceBuilder::push_str
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnsiSequenceBuilder {
    acc: BufTextStorage,
}

/// Buffer management and output.
mod buffer_impl_block {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl AnsiSequenceBuilder {
        #[must_use]
        pub fn new() -> Self { Self::default() }

        #[must_use]
        pub fn with_capacity(capacity: usize) -> Self {
            Self {
                acc: BufTextStorage::with_capacity(capacity),
            }
        }

        /// Number of bytes in the buffer.
        #[must_use]
        pub fn len(&self) -> usize { self.acc.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.acc.is_empty() }

        #[must_use]
        pub fn capacity(&self) -> usize { self.acc.capacity() }

        /// Make room for at least `additional` more bytes.
        ///
        /// # Panics
        ///
        /// Panics if the new capacity overflows `usize`.
        pub fn reserve(&mut self, additional: usize) -> &mut Self {
            self.acc.reserve(additional);
            self
        }

        /// Empty the buffer, keeping its capacity.
        pub fn clear(&mut self) -> &mut Self {
            self.acc.clear();
            self
        }

        #[must_use]
        pub fn as_str(&self) -> &str { &self.acc }

        #[must_use]
        pub fn into_string(self) -> String { self.acc }

        /// Write the whole buffer to `writer`. The buffer is left as is.
        ///
        /// # Errors
        ///
        /// Returns the writer's error unchanged.
        pub fn write_to(&self, writer: &mut impl Write) -> io::Result<usize> {
            writer.write_all(self.acc.as_bytes())?;
            Ok(self.acc.len())
        }

        /// Write the whole buffer to `writer`, then clear it. On error the buffer is
        /// left as is, so the caller can retry.
        ///
        /// # Errors
        ///
        /// Returns the writer's error unchanged.
        pub fn flush_to(&mut self, writer: &mut impl Write) -> io::Result<usize> {
            let written = self.write_to(writer)?;
            self.acc.clear();
            Ok(written)
        }
    }
}

/// Appenders.
mod append_impl_block {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl AnsiSequenceBuilder {
        /// Append any [`FastStringify`] sequence. If it fails to render, the buffer is
        /// rolled back to where it was, so no partial sequence is left behind.
        ///
        /// # Errors
        ///
        /// Returns the render error unchanged.
        pub fn push(
            &mut self,
            sequence: &impl FastStringify,
        ) -> Result<&mut Self, fmt::Error> {
            let mark = self.acc.len();
            if let Err(err) = sequence.write_to_buf(&mut self.acc) {
                self.acc.truncate(mark);
                return Err(err);
            }
            Ok(self)
        }

        /// Append a sequence that can't fail to render.
        pub fn append(&mut self, sequence: &impl InfallibleFastStringify) -> &mut Self {
            sequence.push_to_buf(&mut self.acc);
            self
        }

        pub fn push_str(&mut self, text: &str) -> &mut Self {
            self.acc.push_str(text);
            self
        }

        /// The single sequence for every attribute and color in `style`.
        pub fn style(&mut self, style: &PenStyle) -> &mut Self { self.append(style) }

        pub fn reset(&mut self) -> &mut Self { self.append(&SgrCode::Reset) }

        pub fn bold(&mut self) -> &mut Self { self.append(&SgrCode::Bold) }

        pub fn italic(&mut self) -> &mut Self { self.append(&SgrCode::Italic) }

        pub fn underline(&mut self) -> &mut Self { self.append(&SgrCode::Underline) }

        pub fn strikethrough(&mut self) -> &mut Self { self.append(&SgrCode::Strikethrough) }

        /// Turn only `attrib` off.
        pub fn reset_attrib(&mut self, attrib: StyleAttrib) -> &mut Self {
            self.append(&SgrCode::reset_for(attrib))
        }

        pub fn fg(&mut self, color: impl TransformColor) -> &mut Self {
            self.append(&SgrCode::foreground(color.as_rgb()))
        }

        pub fn bg(&mut self, color: impl TransformColor) -> &mut Self {
            self.append(&SgrCode::background(color.as_rgb()))
        }

        pub fn reset_fg(&mut self) -> &mut Self { self.append(&SgrCode::ResetForeground) }

        pub fn reset_bg(&mut self) -> &mut Self { self.append(&SgrCode::ResetBackground) }

        pub fn cursor_up(&mut self, n: u16) -> &mut Self {
            self.append(&CsiSequence::CursorUp(n))
        }

        pub fn cursor_down(&mut self, n: u16) -> &mut Self {
            self.append(&CsiSequence::CursorDown(n))
        }

        pub fn cursor_forward(&mut self, n: u16) -> &mut Self {
            self.append(&CsiSequence::CursorForward(n))
        }

        pub fn cursor_backward(&mut self, n: u16) -> &mut Self {
            self.append(&CsiSequence::CursorBackward(n))
        }

        /// Move to 0-based `row` and `col`.
        pub fn move_to(&mut self, row: u16, col: u16) -> &mut Self {
            self.append(&CsiSequence::MoveTo { row, col })
        }

        pub fn scroll_up(&mut self, n: u16) -> &mut Self {
            self.append(&CsiSequence::ScrollUp(n))
        }

        pub fn scroll_down(&mut self, n: u16) -> &mut Self {
            self.append(&CsiSequence::ScrollDown(n))
        }

        pub fn erase_screen(&mut self) -> &mut Self { self.append(&CsiSequence::EraseScreen) }

        pub fn erase_line(&mut self) -> &mut Self { self.append(&CsiSequence::EraseLine) }

        pub fn set_cursor_style(&mut self, style: CursorStyle) -> &mut Self {
            self.append(&CsiSequence::SetCursorStyle(style))
        }

        pub fn show_cursor(&mut self) -> &mut Self { self.append(&CsiSequence::ShowCursor) }

        pub fn hide_cursor(&mut self) -> &mut Self { self.append(&CsiSequence::HideCursor) }

        pub fn enter_alternate_screen(&mut self) -> &mut Self {
            self.append(&CsiSequence::EnterAlternateScreen)
        }

        pub fn leave_alternate_screen(&mut self) -> &mut Self {
            self.append(&CsiSequence::LeaveAlternateScreen)
        }

        pub fn enable_bracketed_paste(&mut self) -> &mut Self {
            self.append(&CsiSequence::EnableBracketedPaste)
        }

        pub fn disable_bracketed_paste(&mut self) -> &mut Self {
            self.append(&CsiSequence::DisableBracketedPaste)
        }

        pub fn hyperlink(&mut self, link: &str, text: &str) -> &mut Self {
            self.append(&Hyperlink::new(link, text))
        }
    }
}

impl fmt::Write for AnsiSequenceBuilder {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.acc.push_str(text);
        Ok(())
    }
}

/// Accepts UTF-8 only, since the buffer is text.
impl Write for AnsiSequenceBuilder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = std::str::from_utf8(buf)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.acc.push_str(text);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl Display for AnsiSequenceBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.acc) }
}
