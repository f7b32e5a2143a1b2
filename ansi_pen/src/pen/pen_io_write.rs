// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Write`] for [`Pen`], so it works with `write!`, `writeln!` and [`io::copy`].
//!
//! `write!(pen, ...)` produces exactly one framed segment: the arguments are formatted
//! first, then framed once. Without the [`Write::write_fmt`] override, the default
//! implementation would call [`Write::write`] (and frame) once per literal piece and
//! per argument.

use std::{fmt,
          io::{self, Write}};

use crate::Pen;

impl<W: Write> Write for Pen<W> {
    /// Frames all of `buf` and reports it as written.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_styled(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { self.get_mut().flush() }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        match args.as_str() {
            Some(text) => self.write_styled(text.as_bytes()),
            None => {
                let text = args.to_string();
                self.write_styled(text.as_bytes())
            }
        }
    }
}
