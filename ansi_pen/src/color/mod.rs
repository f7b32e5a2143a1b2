// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color types and conversions:
//! - [`RgbValue`] is 24-bit truecolor, the form every sequence is written in.
//! - [`HslValue`] is converted to [`RgbValue`] on demand.
//! - [`TransformColor`] is the capability both share.
//!
//! [`RgbValue`]: crate::RgbValue
//! [`HslValue`]: crate::HslValue
//! [`TransformColor`]: crate::TransformColor

// Attach.
mod hex_color_parser;
mod hsl_value;
mod rgb_value;
mod transform_color;

// Re-export.
pub use hex_color_parser::*;
pub use hsl_value::*;
pub use rgb_value::*;
pub use transform_color::*;
