use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{LedgerConfig, Recipients};
use crate::utils::vesting;

/// Read-only quote of a recipient's position at the current chain time.
/// Querying a wallet that was never registered fails with RecipientNotFound.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, wallet: Pubkey) -> Result<()> {
    let cfg = &ctx.accounts.ledger_config;
    let now = Clock::get()?.unix_timestamp;

    let recipients = ctx.accounts.recipients.load()?;
    let entry = recipients
        .find(&wallet)
        .ok_or(VestingError::RecipientNotFound)?;

    let vested = vesting::vested_amount(entry.total_granted, entry.start_ts, now, cfg.duration_secs)?;
    let withdrawable = vested
        .checked_sub(entry.withdrawn)
        .ok_or(VestingError::MathOverflow)?;
    let locked = vesting::locked_amount(entry.total_granted, vested)?;

    emit!(VestingQuote {
        wallet,
        vested,
        withdrawn: entry.withdrawn,
        withdrawable,
        locked,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [b"ledger_config"], bump)]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(
        seeds = [b"recipients", ledger_config.key().as_ref()],
        bump
    )]
    pub recipients: AccountLoader<'info, Recipients>,
}

#[event]
pub struct VestingQuote {
    pub wallet: Pubkey,
    pub vested: u64,
    pub withdrawn: u64,
    pub withdrawable: u64,
    pub locked: u64,
}
