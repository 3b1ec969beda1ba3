use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("EXsiUFfHnMyE21LpTYUdmayukThV58882gVVEwGCSLTX");

#[program]
pub mod linear_vesting {
    use super::*;

    /// Create the ledger config, recipients table, and token vault.
    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize_ledger(ctx)
    }

    /// Admin funds the vault.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens(ctx, amount)
    }

    /// Admin registers a grant; vesting starts at the current chain time.
    pub fn add_recipient(ctx: Context<AddRecipient>, wallet: Pubkey, amount: u64) -> Result<()> {
        instructions::add_recipient(ctx, wallet, amount)
    }

    /// Recipient withdraws everything vested and not yet withdrawn.
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw(ctx)
    }

    /// Emit a vested/withdrawable/locked quote for a wallet.
    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_vesting_quote(ctx, wallet)
    }

    /// Admin halts withdrawals (accrual continues).
    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause(ctx)
    }

    /// Admin resumes withdrawals.
    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause(ctx)
    }

    /// Admin retrieves vault tokens in excess of outstanding obligations.
    pub fn sweep_surplus(ctx: Context<SweepSurplus>, amount: u64) -> Result<()> {
        instructions::sweep_surplus(ctx, amount)
    }
}
