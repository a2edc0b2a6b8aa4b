/// Standard Unix exit codes for the favlink CLI.
///
/// Successful termination
pub const SUCCESS: i32 = 0;

/// Command line usage error - invalid arguments, missing required parameters, etc.
pub const USAGE: i32 = 64;

/// The backing store could not be opened or a storage operation failed.
pub const UNAVAILABLE: i32 = 69;
