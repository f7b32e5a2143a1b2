// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{self, Write},
          sync::{Arc, Mutex}};

use pretty_assertions::assert_eq;
use r3bl_ansi_pen::{AnsiSequenceBuilder, HslValue, Pen, PenStyle, RgbValue,
                    StyleAttrib, StylingPolicy, global_styling_policy};
use serial_test::serial;

/// Sink that rejects every write with the same error.
#[derive(Debug)]
struct ClosedSink;

impl Write for ClosedSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe is gone"))
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

/// Sink that can be cloned, and that records each `write` call separately.
#[derive(Debug, Clone, Default)]
struct SharedSink {
    calls: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl SharedSink {
    fn calls(&self) -> Vec<Vec<u8>> { self.calls.lock().unwrap().clone() }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls.lock().unwrap().push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

#[test]
fn test_sink_error_is_returned_unchanged() {
    let mut pen = Pen::new(ClosedSink);
    pen.enable(StyleAttrib::Bold);

    let error = pen.write_styled(b"payload").unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(error.to_string(), "pipe is gone");

    let error = write!(pen, "{}", 1).unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);

    let error = pen.cursor_up(1).unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn test_each_write_reaches_the_sink_in_one_call() {
    let sink = SharedSink::default();
    let mut pen = Pen::new(sink.clone());
    pen.set_fg(RgbValue::from_u8(10, 20, 30));

    write!(pen, "{}:{}", "a", 1).unwrap();
    pen.write_styled(b"").unwrap();

    assert_eq!(
        sink.calls(),
        vec![
            b"\x1b[38;2;10;20;30ma:1\x1b[m".to_vec(),
            b"\x1b[38;2;10;20;30m\x1b[m".to_vec(),
        ]
    );
}

#[test]
fn test_forks_share_a_sink_but_not_a_style() {
    let sink = SharedSink::default();
    let mut pen = Pen::new(sink.clone());
    pen.enable(StyleAttrib::Italic);

    let mut fork = pen.fork();
    fork.clear_all().set_bg(HslValue::new(0.0, 0.0, 1.0));

    pen.write_styled(b"1").unwrap();
    fork.write_styled(b"2").unwrap();
    pen.write_styled(b"3").unwrap();

    assert_eq!(
        sink.calls(),
        vec![
            b"\x1b[3m1\x1b[m".to_vec(),
            b"\x1b[48;2;255;255;255m2\x1b[m".to_vec(),
            b"\x1b[3m3\x1b[m".to_vec(),
        ]
    );
    assert_eq!(pen.style(), &PenStyle::from(StyleAttrib::Italic));
}

#[test]
fn test_pen_writes_into_builder() {
    let mut builder = AnsiSequenceBuilder::new();
    {
        let mut pen = Pen::new(&mut builder);
        pen.enable(StyleAttrib::Underline);
        pen.print("styled").unwrap();
        pen.move_to(1, 1).unwrap();
    }
    builder.push_str("plain");

    let mut out = Vec::<u8>::new();
    builder.flush_to(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\x1b[4mstyled\x1b[m\x1b[2;2Hplain"
    );
    assert!(builder.is_empty());
}

#[test]
#[serial]
fn test_from_env_respects_override() {
    global_styling_policy::set_override(StylingPolicy::Disabled);
    let mut pen = Pen::from_env(Vec::<u8>::new());
    pen.enable(StyleAttrib::Bold).set_fg(RgbValue::from_u8(1, 2, 3));
    write!(pen, "P").unwrap();
    assert_eq!(pen.get_ref(), b"P");

    global_styling_policy::set_override(StylingPolicy::Enabled);
    let mut pen = pen.with_writer(Vec::<u8>::new());
    pen.set_styling(global_styling_policy::detect());
    write!(pen, "P").unwrap();
    assert_eq!(pen.get_ref(), b"\x1b[1;38;2;1;2;3mP\x1b[m");

    global_styling_policy::clear_override();
}
