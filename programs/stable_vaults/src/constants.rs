// seeds
pub const VAULT_STATE_SEED: &[u8] = b"vault_state";
pub const COLLATERAL_CONFIG_SEED: &[u8] = b"collateral_config";
pub const BORROW_CONFIG_SEED: &[u8] = b"borrow_config";
pub const COLLATERAL_ENTRY_SEED: &[u8] = b"collateral_entry";
pub const DEBT_ENTRY_SEED: &[u8] = b"debt_entry";
pub const CUSTODY_SEED: &[u8] = b"custody";
pub const LIQUIDITY_SEED: &[u8] = b"liquidity";

pub const ORACLE_MANAGER_SEED: &[u8] = b"oracle_manager";
pub const PRICE_ROUTE_SEED: &[u8] = b"price_route";
pub const PRICE_ORACLE_SEED: &[u8] = b"price_oracle";
pub const MANUAL_PRICE_SEED: &[u8] = b"manual_price";

pub const SAVINGS_VAULT_SEED: &[u8] = b"savings_vault";
pub const STABLECOIN_SEED: &[u8] = b"stablecoin";
pub const SAVINGS_CUSTODY_SEED: &[u8] = b"savings_custody";
pub const SAVINGS_USER_SEED: &[u8] = b"savings_user";
pub const SAVINGS_POSITION_SEED: &[u8] = b"savings_position";

// fixed point
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_DECIMALS: u8 = 18;
pub const BPS_DENOMINATOR: u64 = 10_000;

// lending risk parameters
pub const MAX_LTV_BPS: u64 = 5_000;
pub const LIQUIDATION_THRESHOLD_BPS: u64 = 15_000;
pub const SAFE_HEALTH_FACTOR_BPS: u64 = 20_000;
/// Health factor reported for a position without debt.
pub const MAX_HEALTH_FACTOR: u64 = u64::MAX;

// interest
pub const BORROW_RATE_PCT: u64 = 8;
pub const SECONDS_PER_YEAR: u64 = 31_536_000;
pub const SECONDS_PER_DAY: i64 = 86_400;
/// Per-second borrow rate is `BORROW_RATE_PCT / INTEREST_DENOMINATOR`.
pub const INTEREST_DENOMINATOR: u64 = 100 * SECONDS_PER_YEAR;

// oracle
pub const DEFAULT_MAX_PRICE_AGE_SECS: u64 = 60;

// savings
pub const MIN_SAVINGS_DEPOSIT_UNITS: u64 = 100;
pub const DEFAULT_GFT_REWARD_UNITS: u64 = 1_000;
pub const ANNUAL_INTEREST_BPS: u64 = 200;
pub const EARLY_WITHDRAWAL_PAYOUT_BPS: u64 = 9_000;
