use anchor_lang::prelude::*;

/// Custom error codes for the linear vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Recipient table is full")]
    RecipientListFull,

    #[msg("Recipient wallet is already registered")]
    AlreadyRegistered,

    #[msg("Grant amount must be > 0")]
    InvalidAmount,

    #[msg("Recipient not found")]
    RecipientNotFound,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    #[msg("Ledger is paused")]
    LedgerPaused,

    #[msg("Ledger is not paused")]
    LedgerNotPaused,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid associated token account for recipient")]
    InvalidRecipientAta,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Sweep amount exceeds vault balance not owed to recipients")]
    SurplusExceedsUnallocated,

    #[msg("Math overflow")]
    MathOverflow,
}
