//! Standard exit codes (BSD sysexits.h compatible)

/// Generic failure (invalid timer duration)
pub const FAILURE: i32 = 1;

/// Data format error
pub const DATAERR: i32 = 65;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
