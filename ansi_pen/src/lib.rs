// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_ansi_pen`
//!
//! Compose text styles and truecolor (24-bit) colors, and write them to any
//! [`std::io::Write`] sink as minimal ANSI escape sequences.
//!
//! ## Architecture
//!
//! ```text
//! color ──▶ style ──▶ generator ──▶ pen
//!  RgbValue  PenStyle   PenStyle as   Pen<W: io::Write>
//!  HslValue             one SGR seq   [style][payload][reset]
//!                       SgrCode
//!                       CsiSequence ──▶ builder
//!                       Hyperlink       AnsiSequenceBuilder
//! ```
//!
//! - [`RgbValue`] and [`HslValue`] implement [`TransformColor`]. HSL is converted to
//!   RGB when it is set on a style.
//! - [`PenStyle`] holds the active attributes (bold, italic, underline, strikethrough)
//!   plus optional foreground and background colors. Its [`Display`] output is the
//!   single sequence that applies all of them, eg: `ESC[1;38;2;10;20;30m`. An empty
//!   style is the bare reset `ESC[m`.
//! - [`Pen`] wraps a sink. Every write is framed by the style sequence and a reset, and
//!   handed to the sink in one call. Its [`StylingPolicy`] can turn framing off, eg:
//!   when `NO_COLOR` is set (see [`Pen::from_env`]).
//! - [`CsiSequence`] covers cursor movement, scrolling, erasing, cursor style, cursor
//!   visibility, the alternate screen and bracketed paste.
//! - [`AnsiSequenceBuilder`] collects sequences and text in a buffer and writes them
//!   out in one go.
//!
//! ## Example
//!
//! ```
//! use std::io::Write;
//! use r3bl_ansi_pen::{HslValue, Pen, StyleAttrib};
//!
//! let mut pen = Pen::new(Vec::<u8>::new());
//! pen.enable(StyleAttrib::Underline)
//!     .set_bg(HslValue::new(240.0, 1.0, 0.5));
//! write!(pen, "{} items", 3).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(pen.into_inner()).unwrap(),
//!     "\x1b[4;48;2;0;0;255m3 items\x1b[m"
//! );
//! ```
//!
//! [`Display`]: std::fmt::Display

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod builder;
pub mod color;
pub mod common;
pub mod config;
pub mod constants;
pub mod generator;
pub mod pen;
pub mod style;

// Re-export.
pub use builder::*;
pub use color::*;
pub use common::*;
pub use config::*;
pub use constants::*;
pub use generator::*;
pub use pen::*;
pub use style::*;
