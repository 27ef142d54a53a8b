pub mod vault_state;
pub use vault_state::*;

pub mod ledger;
pub use ledger::*;

pub mod oracle_state;
pub use oracle_state::*;

pub mod savings;
pub use savings::*;
