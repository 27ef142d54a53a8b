pub mod admin;
pub use admin::*;

pub mod price_accounts;
pub use price_accounts::*;

// lending
pub mod deposit_collateral;
pub use deposit_collateral::*;

pub mod withdraw_collateral;
pub use withdraw_collateral::*;

pub mod borrow;
pub use borrow::*;

pub mod repay;
pub use repay::*;

pub mod fund_liquidity;
pub use fund_liquidity::*;

pub mod get_price;
pub use get_price::*;

pub mod vault_queries;
pub use vault_queries::*;

// savings
pub mod deposit_savings;
pub use deposit_savings::*;

pub mod withdraw_savings;
pub use withdraw_savings::*;

pub mod savings_queries;
pub use savings_queries::*;
