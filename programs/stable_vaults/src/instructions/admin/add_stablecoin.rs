//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use std::mem::size_of;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::StablecoinAdded;
use crate::states::{SavingsVault, StablecoinConfig};

/// Accepts a stablecoin for savings deposits, or re-enables one that was removed.
pub fn handle(ctx: Context<AddStablecoin>) -> Result<()> {
    let stablecoin = &mut ctx.accounts.stablecoin_config;

    if stablecoin.mint == Pubkey::default() {
        stablecoin.bump = *ctx.bumps.get("stablecoin_config").ok_or(ErrorCode::InvalidArgument)?;
        stablecoin.custody_bump = *ctx.bumps.get("custody").ok_or(ErrorCode::InvalidArgument)?;
        stablecoin.mint = ctx.accounts.stablecoin_mint.key();
        stablecoin.decimals = ctx.accounts.stablecoin_mint.decimals;
        stablecoin.custody = ctx.accounts.custody.key();
    }
    stablecoin.supported = true;

    msg!("Stablecoin supported: {}", stablecoin.mint);
    emit!(StablecoinAdded {
        token: stablecoin.mint
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddStablecoin<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [SAVINGS_VAULT_SEED],
        bump = savings_vault.bump,
        has_one = authority @ ErrorCode::Unauthorized
    )]
    pub savings_vault: Box<Account<'info, SavingsVault>>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [STABLECOIN_SEED, stablecoin_mint.key().as_ref()],
        bump,
        space = 8 + size_of::<StablecoinConfig>()
    )]
    pub stablecoin_config: Box<Account<'info, StablecoinConfig>>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [SAVINGS_CUSTODY_SEED, stablecoin_mint.key().as_ref()],
        bump,
        token::mint = stablecoin_mint,
        token::authority = savings_vault
    )]
    pub custody: Box<Account<'info, TokenAccount>>,

    pub stablecoin_mint: Box<Account<'info, Mint>>,

    // Programs and Sysvars
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
