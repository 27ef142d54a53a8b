//! Price resolution over an ordered list of sources.
//!
//! Each source answers for the mint it was loaded for. The first usable
//! price wins; when none answers the caller gets `PriceUnavailable`.

use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::types::PriceSourceKind;

pub mod manual;
pub mod pyth;
pub mod switchboard;

pub use manual::ManualSource;
pub use pyth::PythSource;
pub use switchboard::{SwitchboardReading, SwitchboardSource};

pub trait PriceSource {
    fn kind(&self) -> PriceSourceKind;

    /// USD per whole token with 18 decimals, `None` when unset, zero or stale.
    fn try_price(&self, now: i64) -> Option<u128>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPrice {
    pub price: u128,
    pub source: PriceSourceKind,
}

pub fn resolve_price(sources: &[&dyn PriceSource], now: i64) -> Result<ResolvedPrice> {
    sources
        .iter()
        .find_map(|source| {
            source.try_price(now).map(|price| ResolvedPrice {
                price,
                source: source.kind(),
            })
        })
        .ok_or_else(|| error!(ErrorCode::PriceUnavailable))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WAD;

    struct Fixed(PriceSourceKind, Option<u128>);

    impl PriceSource for Fixed {
        fn kind(&self) -> PriceSourceKind {
            self.0
        }

        fn try_price(&self, _now: i64) -> Option<u128> {
            self.1
        }
    }

    #[test]
    fn primary_wins_when_usable() {
        let primary = Fixed(PriceSourceKind::Pyth, Some(2_001 * WAD));
        let secondary = Fixed(PriceSourceKind::Switchboard, Some(1_999 * WAD));
        let manual = Fixed(PriceSourceKind::Manual, Some(2_000 * WAD));

        let resolved = resolve_price(&[&primary, &secondary, &manual], 0).unwrap();
        assert_eq!(resolved.price, 2_001 * WAD);
        assert_eq!(resolved.source, PriceSourceKind::Pyth);
    }

    #[test]
    fn falls_through_to_secondary_then_manual() {
        let primary = Fixed(PriceSourceKind::Pyth, None);
        let secondary = Fixed(PriceSourceKind::Switchboard, Some(1_999 * WAD));
        let manual = Fixed(PriceSourceKind::Manual, Some(2_000 * WAD));
        let resolved = resolve_price(&[&primary, &secondary, &manual], 0).unwrap();
        assert_eq!(resolved.source, PriceSourceKind::Switchboard);

        let secondary = Fixed(PriceSourceKind::Switchboard, None);
        let resolved = resolve_price(&[&primary, &secondary, &manual], 0).unwrap();
        assert_eq!(resolved.price, 2_000 * WAD);
        assert_eq!(resolved.source, PriceSourceKind::Manual);
    }

    #[test]
    fn unavailable_when_every_source_is_empty() {
        let primary = Fixed(PriceSourceKind::Pyth, None);
        let secondary = Fixed(PriceSourceKind::Switchboard, None);
        let manual = Fixed(PriceSourceKind::Manual, None);
        assert_eq!(
            resolve_price(&[&primary, &secondary, &manual], 0).unwrap_err(),
            error!(ErrorCode::PriceUnavailable)
        );
        assert_eq!(
            resolve_price(&[], 0).unwrap_err(),
            error!(ErrorCode::PriceUnavailable)
        );
    }
}
