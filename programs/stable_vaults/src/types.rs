use anchor_lang::prelude::*;

use crate::constants::*;
use crate::math::health_factor_bps;

/// Where a resolved price came from, in resolution order.
#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PriceSourceKind {
    Pyth,
    Switchboard,
    Manual,
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LockPeriod {
    Quarterly,
    SemiAnnual,
    Annual,
}

impl Default for LockPeriod {
    fn default() -> Self {
        LockPeriod::Quarterly
    }
}

/// Fixed terms attached to a lock period.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LockTerms {
    pub duration_secs: i64,
    pub interest_bps: u64,
}

const QUARTERLY_TERMS: LockTerms = LockTerms {
    duration_secs: 90 * SECONDS_PER_DAY,
    interest_bps: 0,
};
const SEMI_ANNUAL_TERMS: LockTerms = LockTerms {
    duration_secs: 180 * SECONDS_PER_DAY,
    interest_bps: 0,
};
const ANNUAL_TERMS: LockTerms = LockTerms {
    duration_secs: 365 * SECONDS_PER_DAY,
    interest_bps: ANNUAL_INTEREST_BPS,
};

impl LockPeriod {
    pub fn terms(&self) -> LockTerms {
        match self {
            LockPeriod::Quarterly => QUARTERLY_TERMS,
            LockPeriod::SemiAnnual => SEMI_ANNUAL_TERMS,
            LockPeriod::Annual => ANNUAL_TERMS,
        }
    }
}

/// Risk band of a borrower, derived from the health factor in bps.
#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum HealthStatus {
    Safe,
    Warning,
    AtRisk,
}

impl HealthStatus {
    pub fn from_bps(health_factor_bps: u64) -> Self {
        if health_factor_bps >= SAFE_HEALTH_FACTOR_BPS {
            HealthStatus::Safe
        } else if health_factor_bps >= LIQUIDATION_THRESHOLD_BPS {
            HealthStatus::Warning
        } else {
            HealthStatus::AtRisk
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct HealthReport {
    pub health_factor_bps: u64,
    pub status: HealthStatus,
}

impl HealthReport {
    pub fn assess(collateral_value: u128, debt_value: u128) -> Result<Self> {
        let health_factor_bps = health_factor_bps(collateral_value, debt_value)?;
        Ok(HealthReport {
            health_factor_bps,
            status: HealthStatus::from_bps(health_factor_bps),
        })
    }
}
