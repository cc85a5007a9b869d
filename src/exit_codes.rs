//! Exit code constants for the picdiff CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Report failure (missing marker, malformed header, unsupported addition)
//! - 3: Piccolo tool failure (missing binary, failed command, version too old)
//! - 4: Integration needed before review

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// The change report could not be turned into a diff.
pub const REPORT_FAILURE: i32 = 2;

/// The `p` binary failed, is missing, or is too old.
pub const TOOL_FAILURE: i32 = 3;

/// Opened files are not at head revisions.
pub const INTEGRATION_NEEDED: i32 = 4;
