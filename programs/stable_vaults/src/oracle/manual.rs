use anchor_lang::prelude::*;

use super::PriceSource;
use crate::states::ManualPrice;
use crate::types::PriceSourceKind;

/// Fallback source: the operator-set price for a mint.
pub struct ManualSource {
    price: u128,
}

impl ManualSource {
    pub fn new(price: u128) -> Self {
        ManualSource { price }
    }

    pub fn unavailable() -> Self {
        Self::new(0)
    }

    /// Reads the price slot only if it belongs to `oracle` and `mint`.
    /// Anything else (uninitialised account, foreign owner) reads as unset.
    pub fn load(slot: &AccountInfo, oracle: &Pubkey, mint: &Pubkey) -> Self {
        if slot.owner != &crate::ID {
            return Self::unavailable();
        }
        let parsed = slot
            .try_borrow_data()
            .map_err(Error::from)
            .and_then(|data| ManualPrice::try_deserialize(&mut &data[..]));
        match parsed {
            Ok(manual) if manual.oracle == *oracle && manual.mint == *mint => {
                Self::new(manual.price)
            }
            _ => Self::unavailable(),
        }
    }
}

impl PriceSource for ManualSource {
    fn kind(&self) -> PriceSourceKind {
        PriceSourceKind::Manual
    }

    fn try_price(&self, _now: i64) -> Option<u128> {
        if self.price == 0 {
            return None;
        }
        Some(self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WAD;
    use crate::oracle::{resolve_price, PythSource, SwitchboardSource};

    #[test]
    fn manual_price_answers_when_feeds_are_unset() {
        let manual = ManualSource::new(2_000 * WAD);
        let resolved = resolve_price(
            &[
                &PythSource::unavailable(),
                &SwitchboardSource::unavailable(),
                &manual,
            ],
            0,
        )
        .unwrap();
        assert_eq!(resolved.price, 2_000 * WAD);
        assert_eq!(resolved.source, PriceSourceKind::Manual);
    }

    #[test]
    fn cleared_manual_price_is_unavailable() {
        assert_eq!(ManualSource::unavailable().try_price(0), None);
        assert!(resolve_price(
            &[
                &PythSource::unavailable(),
                &SwitchboardSource::unavailable(),
                &ManualSource::unavailable(),
            ],
            0,
        )
        .is_err());
    }

    #[test]
    fn foreign_or_empty_accounts_read_as_unset() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data = vec![];
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);
        let source = ManualSource::load(&info, &Pubkey::new_unique(), &Pubkey::new_unique());
        assert_eq!(source.try_price(0), None);
    }

    #[test]
    fn slot_for_another_mint_is_ignored() {
        let oracle = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let slot = ManualPrice {
            bump: 255,
            oracle,
            mint,
            price: 2_000 * WAD,
            updated_at: 0,
        };
        let mut data = vec![];
        slot.try_serialize(&mut data).unwrap();

        let key = Pubkey::new_unique();
        let mut lamports = 1;
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &crate::ID, false, 0);

        assert_eq!(
            ManualSource::load(&info, &oracle, &mint).try_price(0),
            Some(2_000 * WAD)
        );
        assert_eq!(
            ManualSource::load(&info, &oracle, &Pubkey::new_unique()).try_price(0),
            None
        );
        assert_eq!(
            ManualSource::load(&info, &Pubkey::new_unique(), &mint).try_price(0),
            None
        );
    }
}
