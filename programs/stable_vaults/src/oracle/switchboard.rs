use anchor_lang::prelude::*;
use switchboard_v2::AggregatorAccountData;

use super::PriceSource;
use crate::errors::ErrorCode;
use crate::math::scale_price_to_wad;
use crate::types::PriceSourceKind;

/// Latest confirmed aggregator result, copied out of the account.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwitchboardReading {
    pub mantissa: i128,
    pub scale: u32,
    pub round_open_timestamp: i64,
}

/// Secondary source backed by a switchboard aggregator.
pub struct SwitchboardSource {
    reading: Option<SwitchboardReading>,
    max_age: u64,
}

impl SwitchboardSource {
    pub fn unavailable() -> Self {
        SwitchboardSource {
            reading: None,
            max_age: 0,
        }
    }

    pub fn from_reading(reading: SwitchboardReading, max_age: u64) -> Self {
        SwitchboardSource {
            reading: Some(reading),
            max_age,
        }
    }

    /// Fails unless the account is a switchboard aggregator with a result.
    pub fn validate(aggregator: &AccountInfo) -> Result<()> {
        read(aggregator).map_err(|_| error!(ErrorCode::SwitchboardError))?;
        Ok(())
    }

    pub fn load(aggregator: &AccountInfo, max_age: u64) -> Self {
        match read(aggregator) {
            Ok(reading) => Self::from_reading(reading, max_age),
            Err(_) => {
                msg!("switchboard aggregator {} could not be read", aggregator.key);
                Self::unavailable()
            }
        }
    }
}

fn read(aggregator: &AccountInfo) -> Result<SwitchboardReading> {
    let loader = AccountLoader::<AggregatorAccountData>::try_from(aggregator)?;
    let feed = loader.load()?;
    let result = feed.get_result()?;
    Ok(SwitchboardReading {
        mantissa: result.mantissa,
        scale: result.scale,
        round_open_timestamp: feed.latest_confirmed_round.round_open_timestamp,
    })
}

impl PriceSource for SwitchboardSource {
    fn kind(&self) -> PriceSourceKind {
        PriceSourceKind::Switchboard
    }

    fn try_price(&self, now: i64) -> Option<u128> {
        let reading = self.reading?;
        let age = now.checked_sub(reading.round_open_timestamp)?;
        if age < 0 || age as u64 > self.max_age {
            return None;
        }
        scale_price_to_wad(reading.mantissa, -(reading.scale as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WAD;

    const NOW: i64 = 1_700_000_000;

    fn reading(mantissa: i128, scale: u32, round_open_timestamp: i64) -> SwitchboardReading {
        SwitchboardReading {
            mantissa,
            scale,
            round_open_timestamp,
        }
    }

    #[test]
    fn decimal_result_is_scaled_to_wad() {
        let source = SwitchboardSource::from_reading(reading(19_995, 1, NOW - 5), 60);
        assert_eq!(source.try_price(NOW), Some(19_995 * WAD / 10));
    }

    #[test]
    fn stale_or_future_rounds_are_unusable() {
        let stale = SwitchboardSource::from_reading(reading(2_000, 0, NOW - 120), 60);
        assert_eq!(stale.try_price(NOW), None);
        let future = SwitchboardSource::from_reading(reading(2_000, 0, NOW + 1), 60);
        assert_eq!(future.try_price(NOW), None);
    }

    #[test]
    fn empty_result_is_unusable() {
        let source = SwitchboardSource::from_reading(reading(0, 6, NOW), 60);
        assert_eq!(source.try_price(NOW), None);
        assert_eq!(SwitchboardSource::unavailable().try_price(NOW), None);
    }
}
