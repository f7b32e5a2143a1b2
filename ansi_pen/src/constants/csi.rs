// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI (Control Sequence Introducer) constants for cursor movement, scrolling, erasing
//! and DEC private modes.

/// CSI introducer: ESC [
pub const CSI_START: &str = "\x1b[";

/// Separator between numeric parameters of a CSI sequence.
pub const CSI_PARAM_SEPARATOR: char = ';';

// Cursor Movement.

/// CSI n A (CUU): Cursor Up
pub const CSI_CURSOR_UP: char = 'A';

/// CSI n B (CUD): Cursor Down
pub const CSI_CURSOR_DOWN: char = 'B';

/// CSI n C (CUF): Cursor Forward
pub const CSI_CURSOR_FORWARD: char = 'C';

/// CSI n D (CUB): Cursor Backward
pub const CSI_CURSOR_BACKWARD: char = 'D';

/// CSI row ; col H (CUP): Cursor Position, 1-based on the wire
pub const CSI_CURSOR_POSITION: char = 'H';

// Scrolling.

/// CSI n S (SU): Scroll Up
pub const CSI_SCROLL_UP: char = 'S';

/// CSI n T (SD): Scroll Down
pub const CSI_SCROLL_DOWN: char = 'T';

// Erasing.

/// CSI n J (ED): Erase in Display
pub const CSI_ERASE_DISPLAY: char = 'J';

/// CSI n K (EL): Erase in Line
pub const CSI_ERASE_LINE: char = 'K';

/// Parameter for ED and EL that selects the whole screen or the whole line.
pub const ERASE_ALL: &str = "2";

// Cursor Style.

/// CSI n SP q (DECSCUSR): Set Cursor Style. Intermediate space plus final byte.
pub const DECSCUSR_SET_CURSOR_STYLE: &str = " q";

// DEC Private Modes.

/// Prefix marking a DEC private mode parameter: CSI ? n h / CSI ? n l
pub const CSI_PRIVATE_MODE_PREFIX: char = '?';

/// Final byte that sets (enables) a DEC private mode.
pub const DEC_PRIVATE_MODE_SET: char = 'h';

/// Final byte that resets (disables) a DEC private mode.
pub const DEC_PRIVATE_MODE_RESET: char = 'l';

/// Text Cursor Enable Mode (DECTCEM) - DEC mode 25
pub const DECTCEM_SHOW_CURSOR: u16 = 25;

/// Alternate Screen Buffer Mode - DEC mode 1049
///
/// Used by full-screen applications to leave the main screen (and the shell history
/// on it) untouched. The main screen is restored when the mode is reset.
pub const ALT_SCREEN_BUFFER: u16 = 1049;

/// Bracketed Paste Mode - DEC mode 2004
///
/// - When set: pasted text is wrapped in `ESC [ 200 ~` and `ESC [ 201 ~`
/// - When reset: pasted text is indistinguishable from typed text (default)
pub const BRACKETED_PASTE_MODE: u16 = 2004;
