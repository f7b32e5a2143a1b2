// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC (Operating System Command) constants.

/// OSC introducer: ESC ]
pub const OSC_START: &str = "\x1b]";

/// String Terminator (ST): ESC \
pub const ST_END: &str = "\x1b\\";

/// OSC 8 hyperlink command with empty parameters. Followed by the URI.
pub const OSC8_HYPERLINK: &str = "8;;";
