// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod ansi_sequence_builder;

// Re-export.
pub use ansi_sequence_builder::*;
