use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::math::{accrued_interest, check_borrow_limit, check_health_after_withdraw, to_wad, usd_value};

/// Collateral a user holds in the vault for one mint.
#[account]
#[derive(Default)]
pub struct CollateralEntry {
    pub bump: u8,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    /// Borrow mint whose debt this collateral backs, default while unpaired
    pub borrow_mint: Pubkey,
}

/// Debt a user owes for one borrow mint, principal plus accrued interest.
#[account]
#[derive(Default, Debug)]
pub struct DebtEntry {
    pub bump: u8,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    /// Zero while the entry holds no debt
    pub last_accrual_ts: i64,
    /// Interest below one base unit not yet folded into `amount`
    pub interest_carry: u64,
}

/// What a user owes in one borrow mint, as seen by a risk check.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DebtPosition {
    pub mint: Pubkey,
    pub decimals: u8,
    /// Principal plus interest accrued up to the check
    pub outstanding: u64,
}

impl DebtPosition {
    /// USD value (wad); debt is valued at face.
    pub fn value(&self) -> Result<u128> {
        to_wad(self.outstanding, self.decimals)
    }
}

impl CollateralEntry {
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        self.amount = self.amount.checked_add(amount).ok_or(ErrorCode::Overflow)?;
        Ok(())
    }

    /// Balance left after withdrawing `amount`, without mutating the entry.
    pub fn remaining_after(&self, amount: u64) -> Result<u64> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        self.amount
            .checked_sub(amount)
            .ok_or_else(|| error!(ErrorCode::InsufficientCollateral))
    }

    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        self.amount = self.remaining_after(amount)?;
        Ok(())
    }

    pub fn is_paired(&self) -> bool {
        self.borrow_mint != Pubkey::default()
    }

    /// Fails if the entry already backs debt in a mint other than `borrow_mint`.
    pub fn check_pairing(&self, borrow_mint: &Pubkey) -> Result<()> {
        if self.is_paired() {
            require_keys_eq!(self.borrow_mint, *borrow_mint, ErrorCode::BorrowPairMismatch);
        }
        Ok(())
    }

    /// Validates borrowing `amount` more of `debt.mint` against this collateral.
    /// The debt after the borrow must stay within the maximum LTV of the
    /// collateral value, and `liquidity` must cover the payout.
    pub fn check_borrow(
        &self,
        collateral_decimals: u8,
        collateral_price: u128,
        debt: &DebtPosition,
        amount: u64,
        liquidity: u64,
    ) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        self.check_pairing(&debt.mint)?;

        let collateral_value = usd_value(self.amount, collateral_decimals, collateral_price)?;
        let debt_after = DebtPosition {
            outstanding: debt.outstanding.checked_add(amount).ok_or(ErrorCode::Overflow)?,
            ..*debt
        };
        check_borrow_limit(collateral_value, debt_after.value()?)?;
        require!(liquidity >= amount, ErrorCode::InsufficientLiquidity);
        Ok(())
    }

    pub fn pair_with(&mut self, borrow_mint: Pubkey) {
        self.borrow_mint = borrow_mint;
    }

    /// Validates withdrawing `amount` and returns the balance left.
    ///
    /// Unpaired collateral backs no debt and is always free to leave. Paired
    /// collateral must be checked against its own borrow mint, and while that
    /// debt is outstanding the health factor after withdrawal must stay at or
    /// above the liquidation threshold. `price` is only consulted in that case.
    pub fn check_withdraw(
        &self,
        amount: u64,
        collateral_decimals: u8,
        debt: &DebtPosition,
        price: impl FnOnce() -> Result<u128>,
    ) -> Result<u64> {
        let remaining = self.remaining_after(amount)?;
        if !self.is_paired() {
            return Ok(remaining);
        }
        self.check_pairing(&debt.mint)?;
        if debt.outstanding > 0 {
            let collateral_value_after = usd_value(remaining, collateral_decimals, price()?)?;
            check_health_after_withdraw(collateral_value_after, debt.value()?)?;
        }
        Ok(remaining)
    }

    /// Unpairs the entry once the debt it backs has been fully repaid.
    pub fn settle_pairing(&mut self, debt: &DebtPosition) {
        if self.is_paired() && self.borrow_mint == debt.mint && debt.outstanding == 0 {
            self.borrow_mint = Pubkey::default();
        }
    }
}

impl DebtEntry {
    /// Interest owed since the last accrual and the carry left after it.
    fn pending_interest(&self, now: i64) -> Result<(u64, u64)> {
        if self.amount == 0 || self.last_accrual_ts == 0 {
            return Ok((0, self.interest_carry));
        }
        let elapsed = now.saturating_sub(self.last_accrual_ts).max(0) as u64;
        accrued_interest(self.amount, elapsed, self.interest_carry)
    }

    /// Outstanding debt as of `now`, interest included, without mutating the entry.
    pub fn outstanding_at(&self, now: i64) -> Result<u64> {
        let (interest, _) = self.pending_interest(now)?;
        Ok(self.amount.checked_add(interest).ok_or(ErrorCode::Overflow)?)
    }

    /// Debt in `mint` as of `now`. `mint` is passed in since a slot that was
    /// never written has no mint of its own.
    pub fn position(&self, mint: Pubkey, decimals: u8, now: i64) -> Result<DebtPosition> {
        Ok(DebtPosition {
            mint,
            decimals,
            outstanding: self.outstanding_at(now)?,
        })
    }

    /// Folds interest owed since the last accrual into the balance. Returns the interest added.
    pub fn accrue(&mut self, now: i64) -> Result<u64> {
        let (interest, carry) = self.pending_interest(now)?;
        self.amount = self.amount.checked_add(interest).ok_or(ErrorCode::Overflow)?;
        self.interest_carry = carry;
        if self.amount > 0 {
            self.last_accrual_ts = now;
        }
        Ok(interest)
    }

    pub fn borrow(&mut self, amount: u64, now: i64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        self.accrue(now)?;
        self.amount = self.amount.checked_add(amount).ok_or(ErrorCode::Overflow)?;
        self.last_accrual_ts = now;
        Ok(())
    }

    /// Applies a repayment clamped to the outstanding balance and returns the applied amount.
    pub fn repay(&mut self, amount: u64, now: i64) -> Result<u64> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        self.accrue(now)?;
        require!(self.amount > 0, ErrorCode::NoDebtToRepay);

        let applied = amount.min(self.amount);
        self.amount -= applied;
        if self.amount == 0 {
            self.last_accrual_ts = 0;
            self.interest_carry = 0;
        }
        Ok(applied)
    }
}
