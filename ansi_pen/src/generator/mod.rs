// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence generation.
//!
//! ## Key Types
//!
//! - [`PenStyle`] serializes to one SGR sequence for a combination of attributes
//! - [`SgrCode`] - single attribute SGR codes, including the un-set codes
//! - [`CsiSequence`] - cursor movement, scrolling, erasing and screen modes
//! - [`Hyperlink`] - OSC 8 hyperlinks
//!
//! [`PenStyle`]: crate::PenStyle

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod csi_sequence;
mod hyperlink;
mod pen_style_sequence;
mod sgr_code;

// Public re-exports (flat API).
pub use csi_sequence::*;
pub use hyperlink::*;
pub use sgr_code::*;
