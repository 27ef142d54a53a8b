//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::{GftRewardsUpdated, SavingsPauseToggled};
use crate::states::{RewardTable, SavingsVault};

/// Replaces the reward table. Positions already open keep their snapshot.
pub fn handle_rewards(
    ctx: Context<UpdateSavingsVault>,
    quarterly: u64,
    semi_annual: u64,
    annual: u64,
) -> Result<()> {
    let rewards = RewardTable {
        quarterly,
        semi_annual,
        annual,
    };
    ctx.accounts.savings_vault.rewards = rewards;

    msg!("GFT rewards: {} / {} / {}", quarterly, semi_annual, annual);
    emit!(GftRewardsUpdated { rewards });
    Ok(())
}

pub fn handle_paused(ctx: Context<UpdateSavingsVault>, paused: bool) -> Result<()> {
    ctx.accounts.savings_vault.paused = paused;

    msg!("Savings deposits paused: {}", paused);
    emit!(SavingsPauseToggled { paused });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateSavingsVault<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SAVINGS_VAULT_SEED],
        bump = savings_vault.bump,
        has_one = authority @ ErrorCode::Unauthorized
    )]
    pub savings_vault: Box<Account<'info, SavingsVault>>,
}
