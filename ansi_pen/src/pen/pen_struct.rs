// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{self, Display},
          io::{self, Write}};

use crate::{BufTextStorage, InfallibleFastStringify, InlineBytes, PenStyle, SGR_RESET,
            SGR_RESET_BYTES, StyleAttrib, StylingPolicy, TransformColor,
            global_styling_policy};

/// A styled writer. Every write to the sink is framed as:
///
/// ```text
/// [style sequence][payload, unmodified][reset]
/// ```
///
/// The frame is assembled first and handed to the sink in one [`Write::write_all`]
/// call. When styling is [`StylingPolicy::Disabled`] the payload is written alone.
///
/// The sink is whatever implements [`Write`]: `&mut Vec<u8>`, [`std::io::Stdout`], a
/// [`std::fs::File`], etc. Sink errors are returned unchanged.
///
/// ```
/// use std::io::Write;
/// use r3bl_ansi_pen::{Pen, RgbValue, StyleAttrib};
///
/// let mut pen = Pen::new(Vec::<u8>::new());
/// pen.enable(StyleAttrib::Bold).set_fg(RgbValue::from_u8(10, 20, 30));
/// write!(pen, "{} {}", "hello", 42).unwrap();
/// assert_eq!(
///     pen.get_ref(),
///     b"\x1b[1;38;2;10;20;30mhello 42\x1b[m"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pen<W> {
    writer: W,
    style: PenStyle,
    styling: StylingPolicy,
}

/// Constructors, and access to the sink.
mod pen_construct_impl_block {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<W> Pen<W> {
        /// A pen with an empty style and styling enabled.
        #[must_use]
        pub fn new(writer: W) -> Self {
            Self {
                writer,
                style: PenStyle::default(),
                styling: StylingPolicy::Enabled,
            }
        }

        /// A pen whose styling policy comes from [`global_styling_policy::detect`].
        #[must_use]
        pub fn from_env(writer: W) -> Self {
            Self {
                styling: global_styling_policy::detect(),
                ..Self::new(writer)
            }
        }

        /// An independent copy of this pen's style and policy, writing to `writer`.
        #[must_use]
        pub fn with_writer<W2>(&self, writer: W2) -> Pen<W2> {
            Pen {
                writer,
                style: self.style,
                styling: self.styling,
            }
        }

        #[must_use]
        pub fn get_ref(&self) -> &W { &self.writer }

        pub fn get_mut(&mut self) -> &mut W { &mut self.writer }

        #[must_use]
        pub fn into_inner(self) -> W { self.writer }
    }

    impl<W: Clone> Pen<W> {
        /// An independent pen on a clone of the same sink. Changing the style of one
        /// does not affect the other.
        #[must_use]
        pub fn fork(&self) -> Self { self.clone() }
    }
}

/// Style and styling policy.
mod pen_style_impl_block {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<W> Pen<W> {
        #[must_use]
        pub fn style(&self) -> &PenStyle { &self.style }

        pub fn style_mut(&mut self) -> &mut PenStyle { &mut self.style }

        pub fn set_style(&mut self, style: impl Into<PenStyle>) -> &mut Self {
            self.style = style.into();
            self
        }

        pub fn enable(&mut self, attrib: StyleAttrib) -> &mut Self {
            self.style.enable(attrib);
            self
        }

        pub fn disable(&mut self, attrib: StyleAttrib) -> &mut Self {
            self.style.disable(attrib);
            self
        }

        pub fn set_fg(&mut self, color: impl TransformColor) -> &mut Self {
            self.style.set_fg(color);
            self
        }

        pub fn clear_fg(&mut self) -> &mut Self {
            self.style.clear_fg();
            self
        }

        pub fn set_bg(&mut self, color: impl TransformColor) -> &mut Self {
            self.style.set_bg(color);
            self
        }

        pub fn clear_bg(&mut self) -> &mut Self {
            self.style.clear_bg();
            self
        }

        pub fn clear_all(&mut self) -> &mut Self {
            self.style.clear_all();
            self
        }

        #[must_use]
        pub fn styling(&self) -> StylingPolicy { self.styling }

        #[must_use]
        pub fn is_styling_enabled(&self) -> bool { self.styling.is_enabled() }

        pub fn set_styling(&mut self, policy: impl Into<StylingPolicy>) -> &mut Self {
            let policy = policy.into();
            tracing::trace!(?policy, "pen styling policy changed");
            self.styling = policy;
            self
        }
    }
}

/// Framing, and the string forms of a framed write.
mod pen_paint_impl_block {
    use std::fmt::Write as _;

    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<W> Pen<W> {
        /// The bytes a write of `payload` produces: the payload alone when styling is
        /// disabled, otherwise style sequence, payload, reset.
        #[must_use]
        pub fn frame(&self, payload: &[u8]) -> InlineBytes {
            if !self.styling.is_enabled() {
                return InlineBytes::from_slice(payload);
            }
            let mut style_sequence = BufTextStorage::new();
            self.style.push_to_buf(&mut style_sequence);

            let mut acc = InlineBytes::with_capacity(
                style_sequence.len() + payload.len() + SGR_RESET_BYTES.len(),
            );
            acc.extend_from_slice(style_sequence.as_bytes());
            acc.extend_from_slice(payload);
            acc.extend_from_slice(SGR_RESET_BYTES);
            acc
        }

        /// `text` framed the same way a write would be, without touching the sink.
        ///
        /// # Errors
        ///
        /// Returns the error from `text`'s [`Display`] impl. Nothing is returned in
        /// that case, not even a partial frame.
        pub fn try_paint(&self, text: impl Display) -> Result<String, fmt::Error> {
            let mut acc = String::new();
            if self.styling.is_enabled() {
                self.style.push_to_buf(&mut acc);
                write!(acc, "{text}")?;
                acc.push_str(SGR_RESET);
            } else {
                write!(acc, "{text}")?;
            }
            Ok(acc)
        }

        /// Like [`try_paint`](Self::try_paint), for use where `text` renders like a
        /// [`ToString`] would.
        ///
        /// # Panics
        ///
        /// Panics if `text`'s [`Display`] impl returns an error, the same as
        /// [`ToString::to_string`].
        #[must_use]
        pub fn paint(&self, text: impl Display) -> String {
            match self.try_paint(text) {
                Ok(acc) => acc,
                Err(_) => panic!("a Display implementation returned an error unexpectedly"),
            }
        }

        /// Like [`paint`](Self::paint), with a newline after the reset.
        ///
        /// # Panics
        ///
        /// Panics if `text`'s [`Display`] impl returns an error.
        #[must_use]
        pub fn paintln(&self, text: impl Display) -> String {
            let mut acc = self.paint(text);
            acc.push('\n');
            acc
        }
    }

    impl<W: Write> Pen<W> {
        /// Write one framed segment to the sink, even if `payload` is empty.
        ///
        /// # Errors
        ///
        /// Returns the sink's error unchanged. Nothing is retried.
        pub fn write_styled(&mut self, payload: &[u8]) -> io::Result<()> {
            let frame = self.frame(payload);
            self.writer.write_all(&frame)
        }

        /// Write `text` as one framed segment.
        ///
        /// # Errors
        ///
        /// Returns the sink's error unchanged. If `text`'s [`Display`] impl fails,
        /// nothing is written and an [`io::ErrorKind::Other`] error is returned.
        pub fn print(&mut self, text: impl Display) -> io::Result<()> {
            let acc = self.try_paint(text).map_err(io::Error::other)?;
            self.writer.write_all(acc.as_bytes())
        }

        /// Write `text` as one framed segment followed by a newline, in a single call
        /// to the sink.
        ///
        /// # Errors
        ///
        /// Same as [`print`](Self::print).
        pub fn println(&mut self, text: impl Display) -> io::Result<()> {
            let mut acc = self.try_paint(text).map_err(io::Error::other)?;
            acc.push('\n');
            self.writer.write_all(acc.as_bytes())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::{HslValue, RgbValue};

    #[test]
    fn test_enabled_pen_frames_payload() {
        let mut pen = Pen::new(Vec::<u8>::new());
        pen.set_fg(RgbValue::from_u8(10, 20, 30));
        pen.write_styled(b"P").unwrap();
        assert_eq!(pen.into_inner(), b"\x1b[38;2;10;20;30mP\x1b[m");
    }

    #[test]
    fn test_disabled_pen_writes_payload_only() {
        let mut pen = Pen::new(Vec::<u8>::new());
        pen.enable(StyleAttrib::Bold)
            .set_fg(RgbValue::from_u8(1, 2, 3))
            .set_styling(StylingPolicy::Disabled);
        pen.write_styled(b"plain \x1b bytes").unwrap();
        assert_eq!(pen.get_ref(), b"plain \x1b bytes");
    }

    #[test]
    fn test_empty_style_still_frames() {
        let mut pen = Pen::new(Vec::<u8>::new());
        pen.write_styled(b"abc").unwrap();
        assert_eq!(pen.get_ref(), b"\x1b[mabc\x1b[m");
    }

    #[test]
    fn test_empty_payload_still_frames() {
        let mut pen = Pen::new(Vec::<u8>::new());
        pen.enable(StyleAttrib::Italic);
        pen.write_styled(b"").unwrap();
        assert_eq!(pen.get_ref(), b"\x1b[3m\x1b[m");
    }

    #[test]
    fn test_payload_is_not_modified() {
        let payload: &[u8] = &[0x00, 0xFF, 0x1B, b'[', b'm', 0xC3];
        let mut pen = Pen::new(Vec::<u8>::new());
        pen.enable(StyleAttrib::Underline);
        pen.write_styled(payload).unwrap();

        let mut expected = b"\x1b[4m".to_vec();
        expected.extend_from_slice(payload);
        expected.extend_from_slice(b"\x1b[m");
        assert_eq!(pen.into_inner(), expected);
    }

    #[test]
    fn test_style_changes_apply_to_next_write() {
        let mut pen = Pen::new(Vec::<u8>::new());
        pen.enable(StyleAttrib::Bold);
        pen.write_styled(b"a").unwrap();
        pen.disable(StyleAttrib::Bold).set_bg(HslValue::new(0.0, 1.0, 0.5));
        pen.write_styled(b"b").unwrap();
        assert_eq!(
            pen.get_ref(),
            b"\x1b[1ma\x1b[m\x1b[48;2;255;0;0mb\x1b[m"
        );
    }

    #[test]
    fn test_fork_is_independent() {
        let mut original = Pen::new(Vec::<u8>::new());
        original.enable(StyleAttrib::Italic);
        let before = original.frame(b"x");

        let mut fork = original.fork();
        fork.enable(StyleAttrib::Bold).set_fg(RgbValue::from_u8(1, 1, 1));
        fork.write_styled(b"x").unwrap();

        assert_eq!(original.frame(b"x"), before);
        assert_eq!(original.get_ref(), b"");
        assert_eq!(fork.get_ref(), b"\x1b[1;3;38;2;1;1;1mx\x1b[m");
    }

    #[test]
    fn test_with_writer_copies_style() {
        let mut pen = Pen::new(Vec::<u8>::new());
        pen.enable(StyleAttrib::Strikethrough);

        let mut other_sink = Vec::<u8>::new();
        let mut other = pen.with_writer(&mut other_sink);
        other.clear_all();
        other.write_styled(b"o").unwrap();

        assert_eq!(pen.style(), &PenStyle::from(StyleAttrib::Strikethrough));
        assert_eq!(other_sink, b"\x1b[mo\x1b[m");
    }

    #[test]
    fn test_paint() {
        let mut pen = Pen::new(io::sink());
        pen.enable(StyleAttrib::Bold);
        assert_eq!(pen.paint("hi"), "\x1b[1mhi\x1b[m");
        assert_eq!(pen.paintln(7), "\x1b[1m7\x1b[m\n");

        pen.set_styling(false);
        assert_eq!(pen.paint("hi"), "hi");
        assert_eq!(pen.paintln("hi"), "hi\n");
    }

    /// Writes `"par"` and then fails.
    struct FailingDisplay;

    impl Display for FailingDisplay {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("par")?;
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_try_paint_propagates_display_error() {
        let mut pen = Pen::new(io::sink());
        pen.enable(StyleAttrib::Bold);
        assert_eq!(pen.try_paint("ok"), Ok("\x1b[1mok\x1b[m".to_string()));
        assert_eq!(pen.try_paint(FailingDisplay), Err(fmt::Error));

        pen.set_styling(false);
        assert_eq!(pen.try_paint(FailingDisplay), Err(fmt::Error));
    }

    #[test]
    #[should_panic(expected = "Display implementation returned an error")]
    fn test_paint_panics_on_display_error() {
        let _unused = Pen::new(io::sink()).paint(FailingDisplay);
    }

    #[test]
    fn test_print_display_error_writes_nothing() {
        let mut pen = Pen::new(Vec::<u8>::new());
        pen.enable(StyleAttrib::Bold);

        let error = pen.print(FailingDisplay).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::Other);
        let error = pen.println(FailingDisplay).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::Other);
        assert!(pen.get_ref().is_empty());
    }

    #[test]
    fn test_print_and_println() {
        let mut pen = Pen::new(Vec::<u8>::new());
        pen.set_fg((0_u8, 0_u8, 255_u8));
        pen.print("a").unwrap();
        pen.println("b").unwrap();
        assert_eq!(
            pen.get_ref(),
            b"\x1b[38;2;0;0;255ma\x1b[m\x1b[38;2;0;0;255mb\x1b[m\n"
        );
    }

    #[test]
    fn test_set_style() {
        let mut pen = Pen::new(Vec::<u8>::new());
        pen.set_style(StyleAttrib::Bold + StyleAttrib::Italic);
        assert_eq!(pen.paint(""), "\x1b[1;3m\x1b[m");
        pen.style_mut().clear_all();
        assert!(pen.style().is_empty());
    }

    #[test]
    #[serial]
    fn test_from_env_uses_override() {
        global_styling_policy::set_override(StylingPolicy::Disabled);
        let pen = Pen::from_env(Vec::<u8>::new());
        assert_eq!(pen.styling(), StylingPolicy::Disabled);
        global_styling_policy::clear_override();

        assert!(Pen::new(Vec::<u8>::new()).is_styling_enabled());
    }
}
