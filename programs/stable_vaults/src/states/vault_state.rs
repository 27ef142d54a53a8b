// libraries
use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

#[account]
#[derive(Default)]
pub struct VaultState {
    /// Bump/nonce for the vault state pda
    pub bump: u8,
    /// Owner of the accepted asset registry
    pub authority: Pubkey,

    pub collateral_token_count: u32,
    pub borrow_token_count: u32,

    /// extra space
    pub reserved: [u64; 8],
}

/// Accepted collateral mint. Existence of this account is membership.
#[account]
#[derive(Default)]
pub struct CollateralConfig {
    pub bump: u8,
    pub custody_bump: u8,
    pub mint: Pubkey,
    pub decimals: u8,
    /// Token account holding every user's deposits of this mint
    pub custody: Pubkey,
    pub total_deposited: u64,
}

/// Accepted borrow mint. Existence of this account is membership.
#[account]
#[derive(Default)]
pub struct BorrowConfig {
    pub bump: u8,
    pub liquidity_bump: u8,
    pub mint: Pubkey,
    pub decimals: u8,
    /// Token account lent out of and repaid into
    pub liquidity: Pubkey,
    pub total_borrowed: u64,
}

impl CollateralConfig {
    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(ErrorCode::Overflow)?;
        Ok(())
    }

    pub fn record_withdraw(&mut self, amount: u64) -> Result<()> {
        self.total_deposited = self
            .total_deposited
            .checked_sub(amount)
            .ok_or(ErrorCode::Overflow)?;
        Ok(())
    }
}

impl BorrowConfig {
    pub fn record_borrow(&mut self, amount: u64) -> Result<()> {
        self.total_borrowed = self
            .total_borrowed
            .checked_add(amount)
            .ok_or(ErrorCode::Overflow)?;
        Ok(())
    }

    /// Repayments may include interest, which was never counted as borrowed.
    pub fn record_repay(&mut self, amount: u64) {
        self.total_borrowed = self.total_borrowed.saturating_sub(amount);
    }
}
