use anchor_lang::prelude::*;
use pyth_sdk_solana::{load_price_feed_from_account_info, PriceFeed};

use super::PriceSource;
use crate::errors::ErrorCode;
use crate::math::scale_price_to_wad;
use crate::types::PriceSourceKind;

/// Primary source backed by a pyth price account.
pub struct PythSource {
    feed: Option<PriceFeed>,
    max_age: u64,
}

impl PythSource {
    pub fn unavailable() -> Self {
        PythSource {
            feed: None,
            max_age: 0,
        }
    }

    pub fn from_feed(feed: PriceFeed, max_age: u64) -> Self {
        PythSource {
            feed: Some(feed),
            max_age,
        }
    }

    /// Fails unless the account holds a pyth price feed.
    pub fn validate(price_account: &AccountInfo) -> Result<()> {
        load_price_feed_from_account_info(price_account).map_err(|_| error!(ErrorCode::PythError))?;
        Ok(())
    }

    /// An unreadable account degrades to an unavailable source.
    pub fn load(price_account: &AccountInfo, max_age: u64) -> Self {
        match load_price_feed_from_account_info(price_account) {
            Ok(feed) => Self::from_feed(feed, max_age),
            Err(_) => {
                msg!("pyth account {} could not be parsed", price_account.key);
                Self::unavailable()
            }
        }
    }
}

impl PriceSource for PythSource {
    fn kind(&self) -> PriceSourceKind {
        PriceSourceKind::Pyth
    }

    fn try_price(&self, now: i64) -> Option<u128> {
        let price = self
            .feed
            .as_ref()?
            .get_price_no_older_than(now, self.max_age)?;
        scale_price_to_wad(price.price as i128, price.expo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WAD;
    use pyth_sdk::{Price, PriceIdentifier};

    const NOW: i64 = 1_700_000_000;

    fn feed(price: i64, expo: i32, publish_time: i64) -> PriceFeed {
        let reading = Price {
            price,
            conf: 100,
            expo,
            publish_time,
        };
        PriceFeed::new(PriceIdentifier::new([7; 32]), reading, reading)
    }

    #[test]
    fn fresh_price_is_scaled_to_wad() {
        let source = PythSource::from_feed(feed(200_000_000_000, -8, NOW - 10), 60);
        assert_eq!(source.try_price(NOW), Some(2_000 * WAD));
    }

    #[test]
    fn stale_price_is_unusable() {
        let source = PythSource::from_feed(feed(200_000_000_000, -8, NOW - 61), 60);
        assert_eq!(source.try_price(NOW), None);
    }

    #[test]
    fn zero_or_negative_price_is_unusable() {
        assert_eq!(PythSource::from_feed(feed(0, -8, NOW), 60).try_price(NOW), None);
        assert_eq!(PythSource::from_feed(feed(-5, -8, NOW), 60).try_price(NOW), None);
        assert_eq!(PythSource::unavailable().try_price(NOW), None);
    }
}
