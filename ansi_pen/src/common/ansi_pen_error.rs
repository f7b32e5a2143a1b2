// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Errors produced by this crate. I/O failures from a sink are not wrapped; they are
/// returned as the sink's own [`std::io::Error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum AnsiPenError {
    #[error("🎨 Could not parse '{input}' as a hex color")]
    #[diagnostic(
        code(r3bl_ansi_pen::invalid_hex_color),
        help("Use the `#RRGGBB` format with exactly six hex digits, eg: `#FF8000`")
    )]
    InvalidHexColor { input: String },
}

pub type AnsiPenResult<T> = Result<T, AnsiPenError>;
