//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use std::mem::size_of;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::CollateralAdded;
use crate::states::{CollateralConfig, VaultState};

pub fn handle(ctx: Context<AddCollateral>) -> Result<()> {
    let collateral_config = &mut ctx.accounts.collateral_config;
    let vault_state = &mut ctx.accounts.vault_state;

    collateral_config.bump = *ctx.bumps.get("collateral_config").ok_or(ErrorCode::InvalidArgument)?;
    collateral_config.custody_bump = *ctx.bumps.get("custody").ok_or(ErrorCode::InvalidArgument)?;
    collateral_config.mint = ctx.accounts.collateral_mint.key();
    collateral_config.decimals = ctx.accounts.collateral_mint.decimals;
    collateral_config.custody = ctx.accounts.custody.key();
    collateral_config.total_deposited = 0;

    vault_state.collateral_token_count = vault_state
        .collateral_token_count
        .checked_add(1)
        .ok_or(ErrorCode::Overflow)?;

    msg!("Collateral added: {}", collateral_config.mint);
    emit!(CollateralAdded {
        token: collateral_config.mint
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddCollateral<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_STATE_SEED],
        bump = vault_state.bump,
        has_one = authority @ ErrorCode::Unauthorized
    )]
    pub vault_state: Box<Account<'info, VaultState>>,

    #[account(
        init,
        payer = authority,
        seeds = [COLLATERAL_CONFIG_SEED, collateral_mint.key().as_ref()],
        bump,
        space = 8 + size_of::<CollateralConfig>()
    )]
    pub collateral_config: Box<Account<'info, CollateralConfig>>,

    #[account(
        init,
        payer = authority,
        seeds = [CUSTODY_SEED, collateral_mint.key().as_ref()],
        bump,
        token::mint = collateral_mint,
        token::authority = vault_state
    )]
    pub custody: Box<Account<'info, TokenAccount>>,

    pub collateral_mint: Box<Account<'info, Mint>>,

    // Programs and Sysvars
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
