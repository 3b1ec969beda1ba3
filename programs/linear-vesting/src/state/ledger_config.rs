use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Singleton ledger configuration PDA.
#[account]
pub struct LedgerConfig {
    /// Token mint.
    pub mint: Pubkey,
    /// Admin authority (multisig recommended off-chain).
    pub admin: Pubkey,
    /// Linear vesting duration in seconds, shared by all recipients
    /// (must equal `VESTING_DURATION_SECS`).
    pub duration_secs: i64,
    /// Emergency pause flag (blocks withdrawals only; accrual continues).
    pub paused: bool,
    /// Sum of all grants registered so far.
    pub total_granted: u64,
    /// Sum of all amounts withdrawn so far.
    pub total_withdrawn: u64,
}

impl LedgerConfig {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        8 +  // duration_secs
        1 +  // paused
        8 +  // total_granted
        8;   // total_withdrawn

    /// Vault balance still owed to recipients.
    pub fn outstanding(&self) -> Result<u64> {
        self.total_granted
            .checked_sub(self.total_withdrawn)
            .ok_or_else(|| VestingError::MathOverflow.into())
    }
}
