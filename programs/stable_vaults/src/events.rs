use anchor_lang::prelude::*;

use crate::states::RewardTable;
use crate::types::{LockPeriod, PriceSourceKind};

// lending

#[event]
pub struct CollateralDeposited {
    pub user: Pubkey,
    pub token: Pubkey,
    pub amount: u64,
}

#[event]
pub struct CollateralWithdrawn {
    pub user: Pubkey,
    pub token: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Borrowed {
    pub user: Pubkey,
    pub collateral_token: Pubkey,
    pub borrow_token: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Repaid {
    pub user: Pubkey,
    pub token: Pubkey,
    pub amount: u64,
}

#[event]
pub struct CollateralAdded {
    pub token: Pubkey,
}

#[event]
pub struct BorrowTokenAdded {
    pub token: Pubkey,
}

// oracle

#[event]
pub struct OracleRouteUpdated {
    pub token: Pubkey,
    pub primary: Pubkey,
    pub secondary: Pubkey,
}

#[event]
pub struct ManualPriceSet {
    pub token: Pubkey,
    pub price: u128,
}

#[event]
pub struct PriceResolved {
    pub token: Pubkey,
    pub price: u128,
    pub source: PriceSourceKind,
}

// savings

#[event]
pub struct Deposited {
    pub user: Pubkey,
    pub token: Pubkey,
    pub position_id: u64,
    pub amount: u64,
    pub lock_period: LockPeriod,
    pub lock_end_time: i64,
}

#[event]
pub struct Withdrawn {
    pub user: Pubkey,
    pub token: Pubkey,
    pub position_id: u64,
    pub amount: u64,
    pub gft_reward: u64,
    pub penalty: u64,
}

#[event]
pub struct StablecoinAdded {
    pub token: Pubkey,
}

#[event]
pub struct StablecoinRemoved {
    pub token: Pubkey,
}

#[event]
pub struct GftRewardsUpdated {
    pub rewards: RewardTable,
}

#[event]
pub struct SavingsPauseToggled {
    pub paused: bool,
}
