//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::instructions::*;
use crate::math::{from_wad, max_borrow_value, usd_value};
use crate::states::{BorrowConfig, CollateralConfig, CollateralEntry, DebtEntry, DebtPosition};
use crate::types::HealthReport;
use crate::utils::{is_initialized, load_or_default, now};

pub fn handle_collateral(ctx: Context<GetCollateral>, _user: Pubkey, _mint: Pubkey) -> Result<u64> {
    let entry: CollateralEntry = load_or_default(&ctx.accounts.collateral_entry)?;
    Ok(entry.amount)
}

/// Outstanding debt including interest accrued up to now.
pub fn handle_debt(ctx: Context<GetDebt>, _user: Pubkey, _mint: Pubkey) -> Result<u64> {
    let entry: DebtEntry = load_or_default(&ctx.accounts.debt_entry)?;
    entry.outstanding_at(now()?)
}

pub fn handle_collateral_value(ctx: Context<GetCollateralValue>, _user: Pubkey) -> Result<u128> {
    let config = &ctx.accounts.collateral_config;
    let entry: CollateralEntry = load_or_default(&ctx.accounts.collateral_entry)?;
    if entry.amount == 0 {
        return Ok(0);
    }
    let price = ctx.accounts.price.resolve(&config.mint, now()?)?;
    usd_value(entry.amount, config.decimals, price.price)
}

pub fn handle_health_factor(ctx: Context<AssessRisk>, user: Pubkey) -> Result<HealthReport> {
    let now = now()?;
    let debt_value = ctx.accounts.debt(now)?.value()?;
    // No debt needs no price
    let collateral_value = if debt_value == 0 {
        0
    } else {
        let collateral: CollateralEntry = load_or_default(&ctx.accounts.collateral_entry)?;
        ctx.accounts.collateral_value(&collateral, now)?
    };
    let report = HealthReport::assess(collateral_value, debt_value)?;
    msg!(
        "Health factor of {}: {} bps ({:?})",
        user,
        report.health_factor_bps,
        report.status
    );
    Ok(report)
}

/// Further amount of the borrow token the user can take at the maximum LTV.
pub fn handle_max_borrow(ctx: Context<AssessRisk>, _user: Pubkey) -> Result<u64> {
    let now = now()?;
    let accounts = &ctx.accounts;
    let collateral: CollateralEntry = load_or_default(&accounts.collateral_entry)?;
    // Collateral backing another borrow token lends nothing here
    if collateral.check_pairing(&accounts.borrow_config.mint).is_err() {
        return Ok(0);
    }
    let debt_value = accounts.debt(now)?.value()?;
    let collateral_value = accounts.collateral_value(&collateral, now)?;
    let headroom = max_borrow_value(collateral_value)?.saturating_sub(debt_value);
    from_wad(headroom, accounts.borrow_config.decimals)
}

pub fn handle_accepted_collateral(ctx: Context<CheckCollateral>, _mint: Pubkey) -> Result<bool> {
    Ok(is_initialized(&ctx.accounts.collateral_config))
}

pub fn handle_accepted_borrow_token(ctx: Context<CheckBorrowToken>, _mint: Pubkey) -> Result<bool> {
    Ok(is_initialized(&ctx.accounts.borrow_config))
}

#[derive(Accounts)]
#[instruction(user: Pubkey, mint: Pubkey)]
pub struct GetCollateral<'info> {
    /// CHECK: unset entries read as zero
    #[account(seeds = [COLLATERAL_ENTRY_SEED, user.as_ref(), mint.as_ref()], bump)]
    pub collateral_entry: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(user: Pubkey, mint: Pubkey)]
pub struct GetDebt<'info> {
    /// CHECK: unset entries read as zero
    #[account(seeds = [DEBT_ENTRY_SEED, user.as_ref(), mint.as_ref()], bump)]
    pub debt_entry: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct GetCollateralValue<'info> {
    #[account(
        seeds = [COLLATERAL_CONFIG_SEED, collateral_config.mint.as_ref()],
        bump = collateral_config.bump
    )]
    pub collateral_config: Box<Account<'info, CollateralConfig>>,
    /// CHECK: unset entries read as zero
    #[account(seeds = [COLLATERAL_ENTRY_SEED, user.as_ref(), collateral_config.mint.as_ref()], bump)]
    pub collateral_entry: UncheckedAccount<'info>,
    pub price: PriceAccounts<'info>,
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct AssessRisk<'info> {
    #[account(
        seeds = [COLLATERAL_CONFIG_SEED, collateral_config.mint.as_ref()],
        bump = collateral_config.bump
    )]
    pub collateral_config: Box<Account<'info, CollateralConfig>>,
    /// CHECK: unset entries read as zero
    #[account(seeds = [COLLATERAL_ENTRY_SEED, user.as_ref(), collateral_config.mint.as_ref()], bump)]
    pub collateral_entry: UncheckedAccount<'info>,
    #[account(
        seeds = [BORROW_CONFIG_SEED, borrow_config.mint.as_ref()],
        bump = borrow_config.bump
    )]
    pub borrow_config: Box<Account<'info, BorrowConfig>>,
    /// CHECK: unset entries read as zero
    #[account(seeds = [DEBT_ENTRY_SEED, user.as_ref(), borrow_config.mint.as_ref()], bump)]
    pub debt_entry: UncheckedAccount<'info>,
    pub price: PriceAccounts<'info>,
}

impl<'info> AssessRisk<'info> {
    fn debt(&self, now: i64) -> Result<DebtPosition> {
        let debt: DebtEntry = load_or_default(&self.debt_entry)?;
        debt.position(self.borrow_config.mint, self.borrow_config.decimals, now)
    }

    fn collateral_value(&self, collateral: &CollateralEntry, now: i64) -> Result<u128> {
        if collateral.amount == 0 {
            return Ok(0);
        }
        let price = self.price.resolve(&self.collateral_config.mint, now)?;
        usd_value(collateral.amount, self.collateral_config.decimals, price.price)
    }
}

#[derive(Accounts)]
#[instruction(mint: Pubkey)]
pub struct CheckCollateral<'info> {
    /// CHECK: existence is membership
    #[account(seeds = [COLLATERAL_CONFIG_SEED, mint.as_ref()], bump)]
    pub collateral_config: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(mint: Pubkey)]
pub struct CheckBorrowToken<'info> {
    /// CHECK: existence is membership
    #[account(seeds = [BORROW_CONFIG_SEED, mint.as_ref()], bump)]
    pub borrow_config: UncheckedAccount<'info>,
}
