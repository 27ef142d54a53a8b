use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ErrorCode;

fn pow10(exp: u32) -> Result<u128> {
    10u128.checked_pow(exp).ok_or_else(|| error!(ErrorCode::Overflow))
}

/// Normalises a token amount in base units to the 18-decimal scale.
pub fn to_wad(amount: u64, decimals: u8) -> Result<u128> {
    let amount = amount as u128;
    if decimals <= WAD_DECIMALS {
        amount
            .checked_mul(pow10((WAD_DECIMALS - decimals) as u32)?)
            .ok_or_else(|| error!(ErrorCode::Overflow))
    } else {
        Ok(amount / pow10((decimals - WAD_DECIMALS) as u32)?)
    }
}

/// Converts an 18-decimal quantity back to base units, rounding down.
pub fn from_wad(value: u128, decimals: u8) -> Result<u64> {
    let scaled = if decimals <= WAD_DECIMALS {
        value / pow10((WAD_DECIMALS - decimals) as u32)?
    } else {
        value
            .checked_mul(pow10((decimals - WAD_DECIMALS) as u32)?)
            .ok_or_else(|| error!(ErrorCode::Overflow))?
    };
    u64::try_from(scaled).map_err(|_| error!(ErrorCode::Overflow))
}

/// USD value (wad) of `amount` base units priced at `price_wad` per whole token.
/// The price is split on the token unit so `amount * price` never needs 256 bits.
pub fn usd_value(amount: u64, decimals: u8, price_wad: u128) -> Result<u128> {
    let unit = pow10(decimals as u32)?;
    let amount = amount as u128;
    let whole = amount.checked_mul(price_wad / unit);
    let fraction = amount.checked_mul(price_wad % unit).map(|v| v / unit);
    whole
        .zip(fraction)
        .and_then(|(whole, fraction)| whole.checked_add(fraction))
        .ok_or_else(|| error!(ErrorCode::Overflow))
}

/// Rescales a signed feed reading `value * 10^expo` to a positive wad price.
/// Non-positive readings are not prices.
pub fn scale_price_to_wad(value: i128, expo: i32) -> Option<u128> {
    if value <= 0 {
        return None;
    }
    let value = value as u128;
    let shift = WAD_DECIMALS as i32 + expo;
    if shift >= 0 {
        value.checked_mul(10u128.checked_pow(shift as u32)?)
    } else {
        let price = value / 10u128.checked_pow((-shift) as u32)?;
        if price == 0 {
            return None;
        }
        Some(price)
    }
}

/// `amount * bps / 10_000`, rounded down.
pub fn apply_bps(amount: u64, bps: u64) -> Result<u64> {
    let scaled = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or_else(|| error!(ErrorCode::Overflow))?
        / BPS_DENOMINATOR as u128;
    u64::try_from(scaled).map_err(|_| error!(ErrorCode::Overflow))
}

/// Simple interest owed on `debt` after `elapsed_secs` at the fixed borrow rate.
///
/// `carry` is the fraction of a base unit left over from the previous accrual,
/// in units of `1 / INTEREST_DENOMINATOR`. Returns the whole units owed and the
/// new carry, so frequent accruals lose nothing to rounding.
pub fn accrued_interest(debt: u64, elapsed_secs: u64, carry: u64) -> Result<(u64, u64)> {
    let scaled = (debt as u128)
        .checked_mul(BORROW_RATE_PCT as u128)
        .and_then(|v| v.checked_mul(elapsed_secs as u128))
        .and_then(|v| v.checked_add(carry as u128))
        .ok_or_else(|| error!(ErrorCode::Overflow))?;
    let interest = u64::try_from(scaled / INTEREST_DENOMINATOR as u128)
        .map_err(|_| error!(ErrorCode::Overflow))?;
    Ok((interest, (scaled % INTEREST_DENOMINATOR as u128) as u64))
}

/// Collateral value over debt value in bps. No debt reads as `MAX_HEALTH_FACTOR`.
pub fn health_factor_bps(collateral_value: u128, debt_value: u128) -> Result<u64> {
    if debt_value == 0 {
        return Ok(MAX_HEALTH_FACTOR);
    }
    let ratio = collateral_value
        .checked_mul(BPS_DENOMINATOR as u128)
        .ok_or_else(|| error!(ErrorCode::Overflow))?
        / debt_value;
    Ok(u64::try_from(ratio).unwrap_or(MAX_HEALTH_FACTOR))
}

/// Largest debt value (wad) the collateral supports at the maximum LTV.
pub fn max_borrow_value(collateral_value: u128) -> Result<u128> {
    collateral_value
        .checked_mul(MAX_LTV_BPS as u128)
        .map(|v| v / BPS_DENOMINATOR as u128)
        .ok_or_else(|| error!(ErrorCode::Overflow))
}

pub fn check_borrow_limit(collateral_value: u128, debt_value_after: u128) -> Result<()> {
    require!(
        debt_value_after <= max_borrow_value(collateral_value)?,
        ErrorCode::ExceedsBorrowLimit
    );
    Ok(())
}

pub fn check_health_after_withdraw(collateral_value_after: u128, debt_value: u128) -> Result<()> {
    require!(
        health_factor_bps(collateral_value_after, debt_value)? >= LIQUIDATION_THRESHOLD_BPS,
        ErrorCode::HealthFactorTooLow
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETH: u64 = 1_000_000_000; // 9 decimals
    const USD: u64 = 1_000_000; // 6 decimals

    #[test]
    fn wad_normalisation_across_decimals() {
        assert_eq!(to_wad(ETH, 9).unwrap(), WAD);
        assert_eq!(to_wad(5 * USD, 6).unwrap(), 5 * WAD);
        assert_eq!(to_wad(7, 18).unwrap(), 7);
        assert_eq!(to_wad(1_000, 21).unwrap(), 1);
        assert_eq!(from_wad(5 * WAD, 6).unwrap(), 5 * USD);
        assert_eq!(from_wad(WAD + 1, 9).unwrap(), ETH);
    }

    #[test]
    fn usd_value_of_collateral() {
        let price = 2_000 * WAD;
        assert_eq!(usd_value(ETH, 9, price).unwrap(), 2_000 * WAD);
        assert_eq!(usd_value(ETH / 2, 9, price).unwrap(), 1_000 * WAD);
        assert_eq!(usd_value(0, 9, price).unwrap(), 0);
        // 18-decimal token, full u64 range
        assert_eq!(
            usd_value(u64::MAX, 18, price).unwrap(),
            u64::MAX as u128 * 2_000
        );
        // sub-unit price remainder is kept
        assert_eq!(usd_value(3, 0, WAD / 2).unwrap(), 3 * WAD / 2);
    }

    #[test]
    fn one_eth_at_2000_backs_exactly_1000_stable() {
        let collateral = usd_value(ETH, 9, 2_000 * WAD).unwrap();
        assert!(check_borrow_limit(collateral, to_wad(1_000 * USD, 6).unwrap()).is_ok());
        assert_eq!(
            check_borrow_limit(collateral, to_wad(1_000 * USD + 1, 6).unwrap()).unwrap_err(),
            error!(ErrorCode::ExceedsBorrowLimit)
        );
    }

    #[test]
    fn feed_readings_scale_to_wad() {
        // pyth style: 2000.12345678 with expo -8
        assert_eq!(
            scale_price_to_wad(200_012_345_678, -8),
            Some(2_000_123_456_780_000_000_000)
        );
        assert_eq!(scale_price_to_wad(3, 0), Some(3 * WAD));
        assert_eq!(scale_price_to_wad(5, -20), None);
        assert_eq!(scale_price_to_wad(500, -20), Some(5));
        assert_eq!(scale_price_to_wad(0, -8), None);
        assert_eq!(scale_price_to_wad(-1, -8), None);
    }

    #[test]
    fn interest_is_linear_in_time() {
        let principal = 1_000 * USD;
        assert_eq!(accrued_interest(principal, 0, 0).unwrap(), (0, 0));
        assert_eq!(accrued_interest(principal, SECONDS_PER_YEAR, 0).unwrap().0, 80 * USD);
        let (half, _) = accrued_interest(principal, SECONDS_PER_YEAR / 2, 0).unwrap();
        assert_eq!(half, 40 * USD);
        // one day on 1000 units: 1000 * 0.08 / 365
        let (day, _) = accrued_interest(principal, 86_400, 0).unwrap();
        assert_eq!(day, 219_178);
    }

    #[test]
    fn interest_remainder_carries_into_the_next_accrual() {
        // 1000 base units earn 0.0152 units a minute
        let (interest, carry) = accrued_interest(1_000, 60, 0).unwrap();
        assert_eq!(interest, 0);
        assert_eq!(carry, 1_000 * 8 * 60);

        let mut carry = 0;
        let mut total = 0;
        for _ in 0..(SECONDS_PER_YEAR / 60) {
            let (interest, next) = accrued_interest(1_000, 60, carry).unwrap();
            total += interest;
            carry = next;
        }
        assert_eq!(total, 80);
        assert_eq!(carry, 0);
    }

    #[test]
    fn health_factor_ratio_and_sentinel() {
        assert_eq!(health_factor_bps(2_000 * WAD, 0).unwrap(), MAX_HEALTH_FACTOR);
        assert_eq!(health_factor_bps(2_000 * WAD, 1_000 * WAD).unwrap(), 20_000);
        assert_eq!(health_factor_bps(1_500 * WAD, 1_000 * WAD).unwrap(), 15_000);
        assert_eq!(health_factor_bps(1_000 * WAD, 1_000 * WAD).unwrap(), 10_000);
    }

    #[test]
    fn borrow_limit_is_half_of_collateral() {
        let collateral = 2_000 * WAD;
        assert_eq!(max_borrow_value(collateral).unwrap(), 1_000 * WAD);
        assert!(check_borrow_limit(collateral, 1_000 * WAD).is_ok());
        assert_eq!(
            check_borrow_limit(collateral, 1_001 * WAD).unwrap_err(),
            error!(ErrorCode::ExceedsBorrowLimit)
        );
    }

    #[test]
    fn withdraw_guard_uses_liquidation_threshold() {
        assert!(check_health_after_withdraw(1_500 * WAD, 1_000 * WAD).is_ok());
        assert_eq!(
            check_health_after_withdraw(1_499 * WAD, 1_000 * WAD).unwrap_err(),
            error!(ErrorCode::HealthFactorTooLow)
        );
        assert!(check_health_after_withdraw(0, 0).is_ok());
    }

    #[test]
    fn bps_helpers() {
        assert_eq!(apply_bps(1_000 * USD, EARLY_WITHDRAWAL_PAYOUT_BPS).unwrap(), 900 * USD);
        assert_eq!(apply_bps(1_000 * USD, ANNUAL_INTEREST_BPS).unwrap(), 20 * USD);
    }
}
