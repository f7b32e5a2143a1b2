// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC 8 hyperlinks. Terminals that don't support them show `text` only.
//!
//! More info: <https://gist.github.com/egmontkob/eb114294efbcd5adb1944c9f3cb5feda>

use crate::{BufTextStorage, InfallibleFastStringify, OSC_START, OSC8_HYPERLINK, ST_END,
            generate_impl_fast_stringify_for_infallible};

/// Clickable `text` that opens `link`:
///
/// ```text
/// ESC ] 8 ; ; link ESC \ text ESC ] 8 ; ; ESC \
/// ```
///
/// ```
/// use r3bl_ansi_pen::Hyperlink;
///
/// let it = Hyperlink::new("https://r3bl.com", "R3BL");
/// assert_eq!(
///     it.to_string(),
///     "\x1b]8;;https://r3bl.com\x1b\\R3BL\x1b]8;;\x1b\\"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hyperlink<'a> {
    pub link: &'a str,
    pub text: &'a str,
}

impl<'a> Hyperlink<'a> {
    #[must_use]
    pub const fn new(link: &'a str, text: &'a str) -> Self { Self { link, text } }
}

impl InfallibleFastStringify for Hyperlink<'_> {
    fn push_to_buf(&self, acc: &mut BufTextStorage) {
        acc.push_str(OSC_START);
        acc.push_str(OSC8_HYPERLINK);
        acc.push_str(self.link);
        acc.push_str(ST_END);
        acc.push_str(self.text);
        acc.push_str(OSC_START);
        acc.push_str(OSC8_HYPERLINK);
        acc.push_str(ST_END);
    }
}

generate_impl_fast_stringify_for_infallible!(Hyperlink<'_>);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_hyperlink() {
        let it = Hyperlink::new("https://example.com/a?b=c", "click me");
        assert_eq!(
            it.to_string(),
            "\x1b]8;;https://example.com/a?b=c\x1b\\click me\x1b]8;;\x1b\\"
        );
    }

    #[test]
    fn test_empty_text() {
        let it = Hyperlink::new("file:///tmp", "");
        assert_eq!(it.to_string(), "\x1b]8;;file:///tmp\x1b\\\x1b]8;;\x1b\\");
    }
}
