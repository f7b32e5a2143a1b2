// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
mod pen_cursor_ops;
mod pen_io_write;
mod pen_struct;

// Re-export.
pub use pen_struct::*;
