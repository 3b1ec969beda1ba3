use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::LedgerConfig;

/// Admin retrieval of vault tokens in excess of what is still owed to
/// recipients. The vault may never drop below total_granted - total_withdrawn.
pub fn sweep_surplus(ctx: Context<SweepSurplus>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let cfg = &ctx.accounts.ledger_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, VestingError::UnauthorizedAdmin);

    require_keys_eq!(ctx.accounts.mint.key(), cfg.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(ctx.accounts.vault.mint, cfg.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.admin_destination.mint,
        cfg.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_destination.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    let after = ctx
        .accounts
        .vault
        .amount
        .checked_sub(amount)
        .ok_or(VestingError::InsufficientVaultBalance)?;
    require!(
        after >= cfg.outstanding()?,
        VestingError::SurplusExceedsUnallocated
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"ledger_config", &[ctx.bumps.ledger_config]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.admin_destination.to_account_info(),
                authority: ctx.accounts.ledger_config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(SurplusSwept {
        admin: cfg.admin,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SweepSurplus<'info> {
    #[account(mut, seeds = [b"ledger_config"], bump)]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(
        mut,
        seeds = [b"vault", ledger_config.key().as_ref()],
        bump,
        constraint = vault.mint == ledger_config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_destination: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct SurplusSwept {
    pub admin: Pubkey,
    pub amount: u64,
}
