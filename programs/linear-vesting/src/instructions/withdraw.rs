use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{LedgerConfig, Recipients};
use crate::utils::vesting;

pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let ledger_config_ai = ctx.accounts.ledger_config.to_account_info();
    let ledger_config_bump = ctx.bumps.ledger_config;

    let cfg = &mut ctx.accounts.ledger_config;
    require!(!cfg.paused, VestingError::LedgerPaused);

    let wallet = ctx.accounts.recipient.key();
    require_keys_eq!(ctx.accounts.mint.key(), cfg.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(ctx.accounts.vault.mint, cfg.mint, VestingError::InvalidTokenMint);
    let expected_ata = expected_ata_address(&wallet, &cfg.mint);
    require_keys_eq!(
        ctx.accounts.recipient_ata.key(),
        expected_ata,
        VestingError::InvalidRecipientAta
    );
    // Strict ATA checks (pre-created ATA policy).
    require_keys_eq!(
        ctx.accounts.recipient_ata.mint,
        cfg.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.recipient_ata.owner,
        wallet,
        VestingError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;

    let mut recipients = ctx.accounts.recipients.load_mut()?;
    let entry = recipients
        .find_mut(&wallet)
        .ok_or(VestingError::RecipientNotFound)?;

    let withdrawable = vesting::withdrawable_amount(entry, now, cfg.duration_secs)?;
    require!(withdrawable > 0, VestingError::NothingToWithdraw);
    require!(
        ctx.accounts.vault.amount >= withdrawable,
        VestingError::InsufficientVaultBalance
    );

    // CPI transfer from vault to recipient ATA, signed by the ledger_config
    // PDA. The ledger credit below happens only after the transfer succeeds;
    // a failed transfer aborts the transaction with the ledger untouched.
    let signer_seeds: &[&[&[u8]]] = &[&[b"ledger_config", &[ledger_config_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.recipient_ata.to_account_info(),
                authority: ledger_config_ai,
            },
            signer_seeds,
        ),
        withdrawable,
    )?;

    entry.withdrawn = entry
        .withdrawn
        .checked_add(withdrawable)
        .ok_or(VestingError::MathOverflow)?;
    cfg.total_withdrawn = cfg
        .total_withdrawn
        .checked_add(withdrawable)
        .ok_or(VestingError::MathOverflow)?;

    emit!(TokensWithdrawn {
        wallet,
        amount: withdrawable,
        withdrawn_total: entry.withdrawn,
        granted_total: entry.total_granted,
    });

    Ok(())
}

fn expected_ata_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    // ATA derivation: PDA(owner, token_program_id, mint) with associated token program id.
    let seeds: &[&[u8]] = &[
        owner.as_ref(),
        anchor_spl::token::ID.as_ref(),
        mint.as_ref(),
    ];
    let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
    ata
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut, seeds = [b"ledger_config"], bump)]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(
        mut,
        seeds = [b"recipients", ledger_config.key().as_ref()],
        bump
    )]
    pub recipients: AccountLoader<'info, Recipients>,

    #[account(
        mut,
        seeds = [b"vault", ledger_config.key().as_ref()],
        bump,
        constraint = vault.mint == ledger_config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_ata: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub recipient: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensWithdrawn {
    pub wallet: Pubkey,
    pub amount: u64,
    pub withdrawn_total: u64,
    pub granted_total: u64,
}
