// libraries
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::Mint;

use std::mem::size_of;
// local
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::{RewardTable, SavingsVault};

/// `treasury` owns the token accounts interest is paid from and penalties are paid to.
pub fn handle(ctx: Context<CreateSavingsVault>, treasury: Pubkey) -> Result<()> {
    msg!("INITIALIZING SAVINGS VAULT");

    let savings_vault = &mut ctx.accounts.savings_vault;
    let default_reward = 10u64
        .checked_pow(ctx.accounts.gft_mint.decimals as u32)
        .and_then(|unit| unit.checked_mul(DEFAULT_GFT_REWARD_UNITS))
        .ok_or(ErrorCode::Overflow)?;

    savings_vault.bump = *ctx.bumps.get("savings_vault").ok_or(ErrorCode::InvalidArgument)?;
    savings_vault.authority = ctx.accounts.authority.key();
    savings_vault.treasury = treasury;
    savings_vault.gft_mint = ctx.accounts.gft_mint.key();
    savings_vault.paused = false;
    savings_vault.rewards = RewardTable {
        quarterly: default_reward,
        semi_annual: default_reward,
        annual: default_reward,
    };
    savings_vault.total_users = 0;
    savings_vault.total_positions = 0;

    Ok(())
}

#[derive(Accounts)]
pub struct CreateSavingsVault<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        seeds = [SAVINGS_VAULT_SEED],
        bump,
        space = 8 + size_of::<SavingsVault>()
    )]
    pub savings_vault: Box<Account<'info, SavingsVault>>,

    // Rewards are minted by the vault pda
    #[account(constraint = gft_mint.mint_authority == COption::Some(savings_vault.key()) @ ErrorCode::InvalidArgument)]
    pub gft_mint: Box<Account<'info, Mint>>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
