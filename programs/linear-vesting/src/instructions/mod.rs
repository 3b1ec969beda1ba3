pub mod initialize_ledger;
pub mod deposit_tokens;
pub mod add_recipient;
pub mod withdraw;
pub mod emit_vesting_quote;
pub mod pause;
pub mod unpause;
pub mod sweep_surplus;

pub use initialize_ledger::*;
pub use deposit_tokens::*;
pub use add_recipient::*;
pub use withdraw::*;
pub use emit_vesting_quote::*;
pub use pause::*;
pub use unpause::*;
pub use sweep_surplus::*;
