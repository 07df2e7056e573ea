//! Process exit codes. Build scripts branch on these, so they are part of the public contract.

pub const SUCCESS: i32 = 0;
pub const DRIFT: i32 = 1; // Documents diverge
pub const INTERNAL_ERROR: i32 = 2; // Unreadable input, bad options or bad arguments
