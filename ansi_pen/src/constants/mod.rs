// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI escape sequence constants, grouped by protocol:
//! - **csi**: CSI introducer, cursor movement, erasing, DEC private modes
//! - **sgr**: SGR parameters for text attributes and truecolor
//! - **osc**: OSC introducer and terminator, used by hyperlinks

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod csi;
mod osc;
mod sgr;

// Public re-exports (flat API).
pub use csi::*;
pub use osc::*;
pub use sgr::*;
