//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use std::mem::size_of;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::Borrowed;
use crate::instructions::*;
use crate::states::{BorrowConfig, CollateralConfig, CollateralEntry, DebtEntry, VaultState};
use crate::utils::now;

pub fn handle(ctx: Context<BorrowFunds>, amount: u64) -> Result<()> {
    let now = now()?;
    let debt_entry = &mut ctx.accounts.debt_entry;
    let borrow_config = &mut ctx.accounts.borrow_config;
    let collateral_entry = &mut ctx.accounts.collateral_entry;
    let collateral_config = &ctx.accounts.collateral_config;
    let vault_state = &ctx.accounts.vault_state;

    let price = ctx.accounts.price.resolve(&collateral_config.mint, now)?;
    let debt = debt_entry.position(borrow_config.mint, borrow_config.decimals, now)?;
    collateral_entry.check_borrow(
        collateral_config.decimals,
        price.price,
        &debt,
        amount,
        ctx.accounts.liquidity.amount,
    )?;
    collateral_entry.pair_with(borrow_config.mint);

    if debt_entry.owner == Pubkey::default() {
        debt_entry.bump = *ctx.bumps.get("debt_entry").ok_or(ErrorCode::InvalidArgument)?;
        debt_entry.owner = ctx.accounts.user_authority.key();
        debt_entry.mint = borrow_config.mint;
    }
    debt_entry.borrow(amount, now)?;
    borrow_config.record_borrow(amount)?;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_STATE_SEED, &[vault_state.bump]]];
    let cpi_accounts = Transfer {
        from: ctx.accounts.liquidity.to_account_info(),
        to: ctx.accounts.user_borrow_ata.to_account_info(),
        authority: vault_state.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)?;

    msg!(
        "Borrowed {} of {} against {}",
        amount,
        borrow_config.mint,
        collateral_config.mint
    );
    emit!(Borrowed {
        user: ctx.accounts.user_authority.key(),
        collateral_token: collateral_config.mint,
        borrow_token: borrow_config.mint,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct BorrowFunds<'info> {
    #[account(mut)]
    pub user_authority: Signer<'info>,

    #[account(seeds = [VAULT_STATE_SEED], bump = vault_state.bump)]
    pub vault_state: Box<Account<'info, VaultState>>,
    #[account(
        seeds = [COLLATERAL_CONFIG_SEED, collateral_config.mint.as_ref()],
        bump = collateral_config.bump
    )]
    pub collateral_config: Box<Account<'info, CollateralConfig>>,
    #[account(
        mut,
        seeds = [COLLATERAL_ENTRY_SEED, user_authority.key().as_ref(), collateral_config.mint.as_ref()],
        bump = collateral_entry.bump,
        constraint = collateral_entry.owner == user_authority.key() @ ErrorCode::Unauthorized
    )]
    pub collateral_entry: Box<Account<'info, CollateralEntry>>,
    pub price: PriceAccounts<'info>,

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

    #[account(mut)]
    pub liquidity: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        token::mint = borrow_config.mint,
        token::authority = user_authority
    )]
    pub user_borrow_ata: Box<Account<'info, TokenAccount>>,

    // Programs and Sysvars
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
