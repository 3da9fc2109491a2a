//! TUI spacing and sizing constants.

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Left indent for indented content (two spaces).
pub const LEFT_PADDING: &str = "  ";

/// Max trace lines to keep (older lines dropped).
pub const MAX_TRACE_LINES: usize = 2000;
