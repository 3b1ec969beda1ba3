use anchor_lang::prelude::*;

use crate::constants::VESTING_DURATION_SECS;
use crate::error::VestingError;
use crate::state::{LedgerConfig, Recipients};

pub fn add_recipient(ctx: Context<AddRecipient>, wallet: Pubkey, amount: u64) -> Result<()> {
    let cfg = &mut ctx.accounts.ledger_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, VestingError::UnauthorizedAdmin);
    require!(cfg.duration_secs == VESTING_DURATION_SECS, VestingError::InvalidConfig);
    require!(wallet != Pubkey::default(), VestingError::InvalidPubkey);
    require!(amount > 0, VestingError::InvalidAmount);

    // The grant vests from the moment of registration.
    let now = Clock::get()?.unix_timestamp;
    require!(now > 0, VestingError::InvalidTimestamp);

    let mut recipients = ctx.accounts.recipients.load_mut()?;
    recipients.register(wallet, amount, now)?;

    cfg.total_granted = cfg
        .total_granted
        .checked_add(amount)
        .ok_or(VestingError::MathOverflow)?;

    emit!(RecipientAdded {
        wallet,
        amount,
        start_ts: now,
        recipient_count: recipients.count,
        total_granted: cfg.total_granted,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddRecipient<'info> {
    #[account(mut, seeds = [b"ledger_config"], bump)]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(
        mut,
        seeds = [b"recipients", ledger_config.key().as_ref()],
        bump
    )]
    pub recipients: AccountLoader<'info, Recipients>,

    #[account(mut)]
    pub admin: Signer<'info>,
}

#[event]
pub struct RecipientAdded {
    pub wallet: Pubkey,
    pub amount: u64,
    pub start_ts: i64,
    pub recipient_count: u64,
    pub total_granted: u64,
}
