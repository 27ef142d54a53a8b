//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use std::mem::size_of;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::BorrowTokenAdded;
use crate::states::{BorrowConfig, VaultState};

pub fn handle(ctx: Context<AddBorrowToken>) -> Result<()> {
    let borrow_config = &mut ctx.accounts.borrow_config;
    let vault_state = &mut ctx.accounts.vault_state;

    borrow_config.bump = *ctx.bumps.get("borrow_config").ok_or(ErrorCode::InvalidArgument)?;
    borrow_config.liquidity_bump = *ctx.bumps.get("liquidity").ok_or(ErrorCode::InvalidArgument)?;
    borrow_config.mint = ctx.accounts.borrow_mint.key();
    borrow_config.decimals = ctx.accounts.borrow_mint.decimals;
    borrow_config.liquidity = ctx.accounts.liquidity.key();
    borrow_config.total_borrowed = 0;

    vault_state.borrow_token_count = vault_state
        .borrow_token_count
        .checked_add(1)
        .ok_or(ErrorCode::Overflow)?;

    msg!("Borrow token added: {}", borrow_config.mint);
    emit!(BorrowTokenAdded {
        token: borrow_config.mint
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddBorrowToken<'info> {
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
        seeds = [BORROW_CONFIG_SEED, borrow_mint.key().as_ref()],
        bump,
        space = 8 + size_of::<BorrowConfig>()
    )]
    pub borrow_config: Box<Account<'info, BorrowConfig>>,

    #[account(
        init,
        payer = authority,
        seeds = [LIQUIDITY_SEED, borrow_mint.key().as_ref()],
        bump,
        token::mint = borrow_mint,
        token::authority = vault_state
    )]
    pub liquidity: Box<Account<'info, TokenAccount>>,

    pub borrow_mint: Box<Account<'info, Mint>>,

    // Programs and Sysvars
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
