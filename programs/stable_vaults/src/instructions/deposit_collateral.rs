//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use std::mem::size_of;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::CollateralDeposited;
use crate::states::{CollateralConfig, CollateralEntry};

pub fn handle(ctx: Context<DepositCollateral>, amount: u64) -> Result<()> {
    let collateral_entry = &mut ctx.accounts.collateral_entry;
    let collateral_config = &mut ctx.accounts.collateral_config;

    if collateral_entry.owner == Pubkey::default() {
        collateral_entry.bump = *ctx.bumps.get("collateral_entry").ok_or(ErrorCode::InvalidArgument)?;
        collateral_entry.owner = ctx.accounts.user_authority.key();
        collateral_entry.mint = collateral_config.mint;
    }
    collateral_entry.deposit(amount)?;
    collateral_config.record_deposit(amount)?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.user_collateral_ata.to_account_info(),
        to: ctx.accounts.custody.to_account_info(),
        authority: ctx.accounts.user_authority.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    msg!("Deposited {} of {}", amount, collateral_config.mint);
    emit!(CollateralDeposited {
        user: ctx.accounts.user_authority.key(),
        token: collateral_config.mint,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct DepositCollateral<'info> {
    #[account(mut)]
    pub user_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [COLLATERAL_CONFIG_SEED, collateral_mint.key().as_ref()],
        bump = collateral_config.bump,
        has_one = custody @ ErrorCode::TokenMismatch
    )]
    pub collateral_config: Box<Account<'info, CollateralConfig>>,
    #[account(
        init_if_needed,
        payer = user_authority,
        seeds = [COLLATERAL_ENTRY_SEED, user_authority.key().as_ref(), collateral_mint.key().as_ref()],
        bump,
        space = 8 + size_of::<CollateralEntry>()
    )]
    pub collateral_entry: Box<Account<'info, CollateralEntry>>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = user_authority
    )]
    pub user_collateral_ata: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub custody: Box<Account<'info, TokenAccount>>,
    pub collateral_mint: Box<Account<'info, Mint>>,

    // Programs and Sysvars
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
