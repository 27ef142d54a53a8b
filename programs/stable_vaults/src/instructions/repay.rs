//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use std::mem::size_of;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::Repaid;
use crate::states::{BorrowConfig, DebtEntry};
use crate::utils::now;

/// Repays up to `amount`; anything above the outstanding debt is not taken.
/// A user who never borrowed gets `NoDebtToRepay`, and the failed
/// transaction leaves no entry behind.
pub fn handle(ctx: Context<RepayDebt>, amount: u64) -> Result<()> {
    let now = now()?;
    let debt_entry = &mut ctx.accounts.debt_entry;
    let borrow_config = &mut ctx.accounts.borrow_config;

    let applied = debt_entry.repay(amount, now)?;
    borrow_config.record_repay(applied);

    let cpi_accounts = Transfer {
        from: ctx.accounts.user_borrow_ata.to_account_info(),
        to: ctx.accounts.liquidity.to_account_info(),
        authority: ctx.accounts.user_authority.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, applied)?;

    msg!("Repaid {} of {}, {} left", applied, borrow_config.mint, debt_entry.amount);
    emit!(Repaid {
        user: ctx.accounts.user_authority.key(),
        token: borrow_config.mint,
        amount: applied,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RepayDebt<'info> {
    #[account(mut)]
    pub user_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [BORROW_CONFIG_SEED, borrow_config.mint.as_ref()],
        bump = borrow_config.bump,
        has_one = liquidity @ ErrorCode::TokenMismatch
    )]
    pub borrow_config: Box<Account<'info, BorrowConfig>>,
    #[account(
        init_if_needed,
        payer = user_authority,
        seeds = [DEBT_ENTRY_SEED, user_authority.key().as_ref(), borrow_config.mint.as_ref()],
        bump,
        space = 8 + size_of::<DebtEntry>()
    )]
    pub debt_entry: Box<Account<'info, DebtEntry>>,

    #[account(
        mut,
        token::mint = borrow_config.mint,
        token::authority = user_authority
    )]
    pub user_borrow_ata: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub liquidity: Box<Account<'info, TokenAccount>>,

    // Programs and Sysvars
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
