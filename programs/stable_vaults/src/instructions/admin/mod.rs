// lending registry
pub mod create_vault_state;
pub use create_vault_state::*;

pub mod add_collateral;
pub use add_collateral::*;

pub mod add_borrow_token;
pub use add_borrow_token::*;

// oracle
pub mod create_oracle_manager;
pub use create_oracle_manager::*;

pub mod set_price_route;
pub use set_price_route::*;

pub mod update_oracle_manager;
pub use update_oracle_manager::*;

pub mod create_price_oracle;
pub use create_price_oracle::*;

pub mod set_manual_price;
pub use set_manual_price::*;

// savings
pub mod create_savings_vault;
pub use create_savings_vault::*;

pub mod add_stablecoin;
pub use add_stablecoin::*;

pub mod remove_stablecoin;
pub use remove_stablecoin::*;

pub mod update_savings_vault;
pub use update_savings_vault::*;
