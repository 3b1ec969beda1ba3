//! Program-wide constants.

/// Max recipients stored on-chain in the recipients table PDA.
pub const MAX_RECIPIENTS: usize = 64;

/// Linear vesting duration in seconds (365 days), shared by all recipients.
pub const VESTING_DURATION_SECS: i64 = 31_536_000;
