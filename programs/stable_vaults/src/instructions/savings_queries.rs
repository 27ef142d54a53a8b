//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::{ProtocolStats, RewardTable, SavingsPosition, SavingsUser, SavingsVault, StablecoinConfig};
use crate::utils::{load_account, load_or_default};

/// Returns the user's positions passed as remaining accounts, which must be
/// consecutive indices beginning at `start`.
pub fn handle_user_positions(
    ctx: Context<GetSavingsUser>,
    user: Pubkey,
    start: u64,
) -> Result<Vec<SavingsPosition>> {
    let savings_user: SavingsUser = load_or_default(&ctx.accounts.savings_user)?;
    let end = start
        .checked_add(ctx.remaining_accounts.len() as u64)
        .ok_or(ErrorCode::Overflow)?;
    require!(end <= savings_user.position_count, ErrorCode::InvalidPositionIndex);

    let mut positions = Vec::with_capacity(ctx.remaining_accounts.len());
    for (index, info) in (start..end).zip(ctx.remaining_accounts.iter()) {
        let position: SavingsPosition = load_account(info)?;
        require_keys_eq!(position.owner, user, ErrorCode::Unauthorized);
        require!(position.index == index, ErrorCode::InvalidPositionIndex);
        positions.push(position);
    }
    Ok(positions)
}

pub fn handle_active_positions_count(ctx: Context<GetSavingsUser>, _user: Pubkey) -> Result<u64> {
    let savings_user: SavingsUser = load_or_default(&ctx.accounts.savings_user)?;
    Ok(savings_user.active_positions)
}

pub fn handle_total_value_locked(ctx: Context<GetStablecoin>, _mint: Pubkey) -> Result<u64> {
    let stablecoin: StablecoinConfig = load_or_default(&ctx.accounts.stablecoin_config)?;
    Ok(stablecoin.total_value_locked)
}

pub fn handle_protocol_stats(ctx: Context<GetSavingsVault>) -> Result<ProtocolStats> {
    Ok(ctx.accounts.savings_vault.stats())
}

pub fn handle_gft_rewards(ctx: Context<GetSavingsVault>) -> Result<RewardTable> {
    Ok(ctx.accounts.savings_vault.rewards)
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct GetSavingsUser<'info> {
    /// CHECK: a user who never deposited has no positions
    #[account(seeds = [SAVINGS_USER_SEED, user.as_ref()], bump)]
    pub savings_user: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(mint: Pubkey)]
pub struct GetStablecoin<'info> {
    /// CHECK: an unknown stablecoin has nothing locked
    #[account(seeds = [STABLECOIN_SEED, mint.as_ref()], bump)]
    pub stablecoin_config: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct GetSavingsVault<'info> {
    #[account(seeds = [SAVINGS_VAULT_SEED], bump = savings_vault.bump)]
    pub savings_vault: Box<Account<'info, SavingsVault>>,
}
