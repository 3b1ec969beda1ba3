use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::VESTING_DURATION_SECS;
use crate::state::{LedgerConfig, Recipients};

pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let cfg = &mut ctx.accounts.ledger_config;
    cfg.mint = ctx.accounts.mint.key();
    cfg.admin = ctx.accounts.admin.key();
    cfg.duration_secs = VESTING_DURATION_SECS;
    cfg.paused = false;
    cfg.total_granted = 0;
    cfg.total_withdrawn = 0;

    // Zero-copy account data starts zeroed; load_init writes the discriminator.
    ctx.accounts.recipients.load_init()?;

    emit!(LedgerInitialized {
        mint: cfg.mint,
        admin: cfg.admin,
        duration_secs: cfg.duration_secs,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + LedgerConfig::SIZE,
        seeds = [b"ledger_config"],
        bump
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(
        init,
        payer = admin,
        space = Recipients::space(),
        seeds = [b"recipients", ledger_config.key().as_ref()],
        bump
    )]
    pub recipients: AccountLoader<'info, Recipients>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = ledger_config,
        seeds = [b"vault", ledger_config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub duration_secs: i64,
}
