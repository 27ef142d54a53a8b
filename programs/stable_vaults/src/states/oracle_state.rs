use anchor_lang::prelude::*;

/// Wiring of the price sources consulted by the vault.
#[account]
#[derive(Default)]
pub struct OracleManager {
    pub bump: u8,
    pub authority: Pubkey,
    /// `PriceOracle` account holding the manual fallback prices
    pub manual_oracle: Pubkey,
    /// Staleness bound applied to the pyth and switchboard feeds
    pub max_price_age: u64,

    pub reserved: [u64; 8],
}

/// Per-mint feed addresses. `Pubkey::default()` disables a source.
#[account]
#[derive(Default)]
pub struct PriceRoute {
    pub bump: u8,
    pub mint: Pubkey,
    /// Pyth price account
    pub primary: Pubkey,
    /// Switchboard aggregator account
    pub secondary: Pubkey,
}

/// Operator-maintained fallback price store.
#[account]
#[derive(Default)]
pub struct PriceOracle {
    pub bump: u8,
    pub authority: Pubkey,
}

#[account]
#[derive(Default)]
pub struct ManualPrice {
    pub bump: u8,
    pub oracle: Pubkey,
    pub mint: Pubkey,
    /// USD per whole token, 18 decimals. Zero means unset.
    pub price: u128,
    pub updated_at: i64,
}

impl PriceRoute {
    pub fn has_primary(&self) -> bool {
        self.primary != Pubkey::default()
    }

    pub fn has_secondary(&self) -> bool {
        self.secondary != Pubkey::default()
    }
}
