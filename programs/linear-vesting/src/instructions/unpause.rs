use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::LedgerConfig;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let cfg = &mut ctx.accounts.ledger_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, VestingError::UnauthorizedAdmin);
    require!(cfg.paused, VestingError::LedgerNotPaused);
    cfg.paused = false;
    emit!(LedgerUnpaused { admin: cfg.admin });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [b"ledger_config"], bump)]
    pub ledger_config: Account<'info, LedgerConfig>,
    pub admin: Signer<'info>,
}

#[event]
pub struct LedgerUnpaused {
    pub admin: Pubkey,
}
