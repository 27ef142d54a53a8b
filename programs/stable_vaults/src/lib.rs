// libraries
use anchor_lang::prelude::*;

//local imports
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod oracle;
pub mod states;
pub mod types;
pub mod utils;

// crates
use crate::instructions::*;
use crate::states::{ProtocolStats, RewardTable, SavingsPosition};
use crate::types::{HealthReport, LockPeriod};
use crate::utils::*;

#[cfg(feature="dev")]
declare_id!("8nit5hsJprfk7AL9bV63NtebagDP5deVMUTZJ5Xba73b");

#[cfg(feature="prod")]
declare_id!("DiEaHqW5gyMmiKayQMNFPTZ8vVVgFaLXUnhhuKmCEMUk");

#[program]
pub mod stable_vaults {

    use super::*;

    /**
     * Create the vault state account
     * Its authority owns the accepted collateral and borrow token registries
     *
     * Should only be called once, by the super owner
     */
    pub fn create_vault_state(ctx: Context<CreateVaultState>) -> Result<()> {
        create_vault_state::handle(ctx)
    }

    /**
     * Accept a mint as collateral and create its custody account
     */
    pub fn add_collateral(ctx: Context<AddCollateral>) -> Result<()> {
        add_collateral::handle(ctx)
    }

    /**
     * Accept a mint as a borrow token and create its liquidity account
     */
    pub fn add_borrow_token(ctx: Context<AddBorrowToken>) -> Result<()> {
        add_borrow_token::handle(ctx)
    }

    /**
     * Create the oracle manager
     * A zero max price age falls back to the default staleness bound
     */
    pub fn create_oracle_manager(ctx: Context<CreateOracleManager>, max_price_age: u64) -> Result<()> {
        create_oracle_manager::handle(ctx, max_price_age)
    }

    /**
     * Set the pyth price account used first for a mint
     */
    pub fn set_primary_oracle(ctx: Context<SetPriceRoute>, feed: Pubkey) -> Result<()> {
        set_price_route::handle_primary(ctx, feed)
    }

    /**
     * Set the switchboard aggregator tried when the primary source is unusable
     */
    pub fn set_secondary_oracle(ctx: Context<SetPriceRoute>, feed: Pubkey) -> Result<()> {
        set_price_route::handle_secondary(ctx, feed)
    }

    /**
     * Set the price oracle whose manual prices are the last fallback
     */
    pub fn set_manual_oracle(ctx: Context<UpdateOracleManager>, price_oracle: Pubkey) -> Result<()> {
        update_oracle_manager::handle_manual_oracle(ctx, price_oracle)
    }

    pub fn set_max_price_age(ctx: Context<UpdateOracleManager>, max_price_age: u64) -> Result<()> {
        update_oracle_manager::handle_max_price_age(ctx, max_price_age)
    }

    /**
     * Create the manual price oracle
     */
    pub fn create_price_oracle(ctx: Context<CreatePriceOracle>) -> Result<()> {
        create_price_oracle::handle(ctx)
    }

    /**
     * Set (or with zero, clear) the manual USD price of a mint
     *
     * Should only be called by the price oracle authority
     */
    pub fn set_price(ctx: Context<SetManualPrice>, price: u128) -> Result<()> {
        set_manual_price::handle(ctx, price)
    }

    /**
     * Resolve the USD price of a mint: primary, then secondary, then manual
     */
    pub fn get_price(ctx: Context<GetPrice>, mint: Pubkey) -> Result<u128> {
        get_price::handle(ctx, mint)
    }

    /**
     * Deposit collateral from user -> custody
     */
    pub fn deposit_collateral(ctx: Context<DepositCollateral>, amount: u64) -> Result<()> {
        deposit_collateral::handle(ctx, amount)
    }

    /**
     * Withdraw collateral from custody -> user
     *
     * With outstanding debt in the paired borrow token, the health factor
     * after withdrawal must stay at or above the liquidation threshold
     */
    pub fn withdraw_collateral(ctx: Context<WithdrawCollateral>, amount: u64) -> Result<()> {
        withdraw_collateral::handle(ctx, amount)
    }

    /**
     * Borrow from the liquidity account against deposited collateral
     * Debt after the borrow may not exceed the maximum LTV
     */
    pub fn borrow(ctx: Context<BorrowFunds>, amount: u64) -> Result<()> {
        borrow::handle(ctx, amount)
    }

    /**
     * Repay debt, interest first accrued; the amount is capped at what is owed
     */
    pub fn repay(ctx: Context<RepayDebt>, amount: u64) -> Result<()> {
        repay::handle(ctx, amount)
    }

    /**
     * Top up a borrow token's liquidity account
     */
    pub fn fund_liquidity(ctx: Context<FundLiquidity>, amount: u64) -> Result<()> {
        fund_liquidity::handle(ctx, amount)
    }

    pub fn collateral(ctx: Context<GetCollateral>, user: Pubkey, mint: Pubkey) -> Result<u64> {
        vault_queries::handle_collateral(ctx, user, mint)
    }

    pub fn debt(ctx: Context<GetDebt>, user: Pubkey, mint: Pubkey) -> Result<u64> {
        vault_queries::handle_debt(ctx, user, mint)
    }

    pub fn get_collateral_value(ctx: Context<GetCollateralValue>, user: Pubkey) -> Result<u128> {
        vault_queries::handle_collateral_value(ctx, user)
    }

    /**
     * Health factor in bps of one collateral / debt pair, with its risk band
     */
    pub fn get_health_factor(ctx: Context<AssessRisk>, user: Pubkey) -> Result<HealthReport> {
        vault_queries::handle_health_factor(ctx, user)
    }

    pub fn get_max_borrow(ctx: Context<AssessRisk>, user: Pubkey) -> Result<u64> {
        vault_queries::handle_max_borrow(ctx, user)
    }

    pub fn accepted_collateral(ctx: Context<CheckCollateral>, mint: Pubkey) -> Result<bool> {
        vault_queries::handle_accepted_collateral(ctx, mint)
    }

    pub fn accepted_borrow_tokens(ctx: Context<CheckBorrowToken>, mint: Pubkey) -> Result<bool> {
        vault_queries::handle_accepted_borrow_token(ctx, mint)
    }

    /**
     * Create the savings vault
     * The reward mint's authority must already be the savings vault pda
     *
     * Should only be called once, by the super owner
     */
    pub fn create_savings_vault(ctx: Context<CreateSavingsVault>, treasury: Pubkey) -> Result<()> {
        create_savings_vault::handle(ctx, treasury)
    }

    pub fn add_stablecoin(ctx: Context<AddStablecoin>) -> Result<()> {
        add_stablecoin::handle(ctx)
    }

    pub fn remove_stablecoin(ctx: Context<RemoveStablecoin>) -> Result<()> {
        remove_stablecoin::handle(ctx)
    }

    pub fn update_gft_rewards(
        ctx: Context<UpdateSavingsVault>,
        quarterly: u64,
        semi_annual: u64,
        annual: u64,
    ) -> Result<()> {
        update_savings_vault::handle_rewards(ctx, quarterly, semi_annual, annual)
    }

    pub fn pause(ctx: Context<UpdateSavingsVault>) -> Result<()> {
        update_savings_vault::handle_paused(ctx, true)
    }

    pub fn unpause(ctx: Context<UpdateSavingsVault>) -> Result<()> {
        update_savings_vault::handle_paused(ctx, false)
    }

    /**
     * Lock stablecoins for a fixed term
     * Reward and interest are fixed at deposit time
     */
    #[access_control(unrestricted_deposit_phase(&ctx.accounts.savings_vault))]
    pub fn deposit_savings(
        ctx: Context<DepositSavings>,
        amount: u64,
        lock_period: LockPeriod,
    ) -> Result<()> {
        deposit_savings::handle(ctx, amount, lock_period)
    }

    /**
     * Close a savings position
     *
     * Matured: principal + interest, and the reward is minted
     * Early: 90% of principal, the rest goes to the treasury
     */
    pub fn withdraw_savings(ctx: Context<WithdrawSavings>, position_index: u64) -> Result<()> {
        withdraw_savings::handle(ctx, position_index)
    }

    pub fn get_user_positions(
        ctx: Context<GetSavingsUser>,
        user: Pubkey,
        start: u64,
    ) -> Result<Vec<SavingsPosition>> {
        savings_queries::handle_user_positions(ctx, user, start)
    }

    pub fn get_user_active_positions_count(ctx: Context<GetSavingsUser>, user: Pubkey) -> Result<u64> {
        savings_queries::handle_active_positions_count(ctx, user)
    }

    pub fn get_total_value_locked(ctx: Context<GetStablecoin>, mint: Pubkey) -> Result<u64> {
        savings_queries::handle_total_value_locked(ctx, mint)
    }

    pub fn get_protocol_stats(ctx: Context<GetSavingsVault>) -> Result<ProtocolStats> {
        savings_queries::handle_protocol_stats(ctx)
    }

    pub fn get_gft_rewards(ctx: Context<GetSavingsVault>) -> Result<RewardTable> {
        savings_queries::handle_gft_rewards(ctx)
    }
}
