// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Write, stdout};

use miette::IntoDiagnostic;
use r3bl_ansi_pen::{AnsiSequenceBuilder, CursorShape, CursorStyle, HslValue, Pen,
                    RgbValue, StyleAttrib, StylingPolicy, global_styling_policy};

fn main() -> miette::Result<()> {
    // Log styling policy decisions to stderr.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut pen = Pen::from_env(stdout());

    // Print strings w/ combined attributes and truecolor.
    {
        pen.enable(StyleAttrib::Bold)
            .enable(StyleAttrib::Italic)
            .enable(StyleAttrib::Underline)
            .set_fg(RgbValue::from_u8(50, 50, 50))
            .set_bg(RgbValue::from_u8(100, 200, 1));
        pen.println("Bold, italic and underline, w/ truecolor fg and bg.")
            .into_diagnostic()?;

        pen.clear_all()
            .enable(StyleAttrib::Strikethrough)
            .set_fg(RgbValue::try_from_hex_color("#c83232")?);
        pen.println("Strikethrough, w/ a color parsed from hex.")
            .into_diagnostic()?;
    }

    // A hue sweep, one cell per 30 degrees.
    {
        let mut sweep = pen.with_writer(stdout());
        sweep.clear_all();
        for step in 0..12_u8 {
            let hue = f32::from(step) * 30.0;
            sweep.set_bg(HslValue::new(hue, 1.0, 0.5));
            write!(sweep, "{step:^5}").into_diagnostic()?;
        }
        writeln!(sweep.get_mut()).into_diagnostic()?;
    }

    // Force styling off, then back to runtime detection.
    {
        global_styling_policy::set_override(StylingPolicy::Disabled);
        let plain = Pen::from_env(stdout());
        let msg = format!("> Forced styling policy ({:?})", plain.styling());
        print_text(&msg);

        global_styling_policy::clear_override();
        let msg = format!(
            "> Runtime detection of styling policy ({:?})",
            global_styling_policy::detect()
        );
        print_text(&msg);
    }

    // Cursor and screen sequences, buffered and flushed in one go.
    {
        let mut builder = AnsiSequenceBuilder::new();
        builder
            .set_cursor_style(CursorStyle::new(CursorShape::Bar, true))
            .hyperlink("https://r3bl.com", "r3bl.com")
            .push_str("\n")
            .set_cursor_style(CursorStyle::default());
        builder.flush_to(&mut stdout()).into_diagnostic()?;
    }

    stdout().flush().into_diagnostic()?;
    Ok(())
}

fn print_text(msg: &str) {
    let mut pen = Pen::from_env(stdout());
    pen.enable(StyleAttrib::Underline)
        .set_fg(RgbValue::from_u8(200, 200, 1))
        .set_bg(RgbValue::from_u8(100, 60, 150));
    println!("{}", pen.paint(msg));

    pen.clear_all()
        .set_fg(RgbValue::from_u8(100, 60, 150))
        .set_bg(HslValue::new(100.0, 0.6, 0.5));
    println!("eg_1: {}", pen.paint("Hello"));
}
