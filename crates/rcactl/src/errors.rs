//! Exit codes for rcactl.

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors.
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when a backend request failed (HTTP or transport error).
pub const EXIT_REQUEST_FAILED: i32 = 70;

/// Exit code when a backend request timed out.
pub const EXIT_REQUEST_TIMEOUT: i32 = 71;

/// Exit code when the configuration file is unreadable.
pub const EXIT_CONFIG_ERROR: i32 = 78;
