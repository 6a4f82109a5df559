/// Exit codes for notefix, following Ruff's convention
///
/// These let CI jobs tell "notes need rewriting" apart from "the tool failed".
/// Success - Every file was processed, or nothing needs to change
pub const SUCCESS: i32 = 0;

/// Changes needed - `--check` found files the transformation would rewrite
pub const CHANGES_NEEDED: i32 = 1;

/// Tool error - Configuration error, file access error, or classifier failure
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{CHANGES_NEEDED, SUCCESS, TOOL_ERROR};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with changes needed code (1)
    pub fn changes_needed() -> ! {
        std::process::exit(CHANGES_NEEDED);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
