//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::oracle::{resolve_price, ManualSource, PythSource, ResolvedPrice, SwitchboardSource};
use crate::states::{OracleManager, PriceRoute};
use crate::utils::load_or_default;

/// Accounts needed to price one mint. Sources that are not configured for the
/// mint may be passed as any account; they are skipped.
#[derive(Accounts)]
pub struct PriceAccounts<'info> {
    #[account(seeds = [ORACLE_MANAGER_SEED], bump = oracle_manager.bump)]
    pub oracle_manager: Box<Account<'info, OracleManager>>,
    /// CHECK: address checked against the route pda for the priced mint
    pub price_route: UncheckedAccount<'info>,
    /// CHECK: must equal the route's primary feed when one is set
    pub primary_feed: UncheckedAccount<'info>,
    /// CHECK: must equal the route's secondary feed when one is set
    pub secondary_feed: UncheckedAccount<'info>,
    /// CHECK: only trusted if it is the manual oracle's slot for the mint
    pub manual_price: UncheckedAccount<'info>,
}

impl<'info> PriceAccounts<'info> {
    pub fn resolve(&self, mint: &Pubkey, now: i64) -> Result<ResolvedPrice> {
        let (route_key, _) =
            Pubkey::find_program_address(&[PRICE_ROUTE_SEED, mint.as_ref()], &crate::ID);
        require_keys_eq!(self.price_route.key(), route_key, ErrorCode::PriceFeedMismatch);
        let route: PriceRoute = load_or_default(&self.price_route)?;
        let max_age = self.oracle_manager.max_price_age;

        let primary = if route.has_primary() {
            require_keys_eq!(self.primary_feed.key(), route.primary, ErrorCode::PriceFeedMismatch);
            PythSource::load(&self.primary_feed, max_age)
        } else {
            PythSource::unavailable()
        };
        let secondary = if route.has_secondary() {
            require_keys_eq!(
                self.secondary_feed.key(),
                route.secondary,
                ErrorCode::PriceFeedMismatch
            );
            SwitchboardSource::load(&self.secondary_feed, max_age)
        } else {
            SwitchboardSource::unavailable()
        };
        let manual = ManualSource::load(&self.manual_price, &self.oracle_manager.manual_oracle, mint);

        let resolved = resolve_price(&[&primary, &secondary, &manual], now)?;
        msg!("Price {} for {} from {:?}", resolved.price, mint, resolved.source);
        Ok(resolved)
    }
}
