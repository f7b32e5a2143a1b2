// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
mod ansi_pen_error;
mod fast_stringify;
mod inline_string;

// Re-export.
pub use ansi_pen_error::*;
pub use fast_stringify::*;
pub use inline_string::*;
