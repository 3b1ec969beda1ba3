pub mod ledger_config;
pub mod recipients;

pub use ledger_config::*;
pub use recipients::*;
