// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Sized to hold the longest style sequence this crate generates (every flag plus both
/// truecolor slots) without spilling to the heap.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 48;

/// Stack allocated string storage for short sequences.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

pub const DEFAULT_BYTE_STORAGE_SIZE: usize = 128;

/// Stack allocated byte storage, used to assemble a framed write before it is handed to
/// a sink.
pub type InlineBytes = SmallVec<[u8; DEFAULT_BYTE_STORAGE_SIZE]>;

/// Like [`format!`] but returns an [`InlineString`].
///
/// # Panics
///
/// Panics if a [`Display`](std::fmt::Display) impl returns an error, the same as
/// [`format!`].
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        use ::std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        if ::std::write!(acc, $($format)*).is_err() {
            ::std::panic!("a Display implementation returned an error unexpectedly");
        }
        acc
    }};
}
