//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::BorrowConfig;

/// Supplies lendable tokens. Funds are not tracked per supplier.
pub fn handle(ctx: Context<FundLiquidity>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_ata.to_account_info(),
        to: ctx.accounts.liquidity.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    msg!("Liquidity of {} funded with {}", ctx.accounts.borrow_config.mint, amount);
    Ok(())
}

#[derive(Accounts)]
pub struct FundLiquidity<'info> {
    pub funder: Signer<'info>,

    #[account(
        seeds = [BORROW_CONFIG_SEED, borrow_config.mint.as_ref()],
        bump = borrow_config.bump,
        has_one = liquidity @ ErrorCode::TokenMismatch
    )]
    pub borrow_config: Box<Account<'info, BorrowConfig>>,
    #[account(mut)]
    pub liquidity: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        token::mint = borrow_config.mint,
        token::authority = funder
    )]
    pub funder_ata: Box<Account<'info, TokenAccount>>,

    // Programs and Sysvars
    pub token_program: Program<'info, Token>,
}
