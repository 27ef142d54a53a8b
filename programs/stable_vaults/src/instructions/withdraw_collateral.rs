//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::CollateralWithdrawn;
use crate::instructions::*;
use crate::states::{BorrowConfig, CollateralConfig, CollateralEntry, DebtEntry, VaultState};
use crate::utils::{load_or_default, now};

pub fn handle(ctx: Context<WithdrawCollateral>, amount: u64) -> Result<()> {
    let now = now()?;
    let collateral_entry = &mut ctx.accounts.collateral_entry;
    let collateral_config = &mut ctx.accounts.collateral_config;
    let vault_state = &ctx.accounts.vault_state;

    let debt_entry: DebtEntry = load_or_default(&ctx.accounts.debt_entry)?;
    let borrow_config = &ctx.accounts.borrow_config;
    let debt = debt_entry.position(borrow_config.mint, borrow_config.decimals, now)?;
    let price = &ctx.accounts.price;
    collateral_entry.check_withdraw(amount, collateral_config.decimals, &debt, || {
        Ok(price.resolve(&collateral_config.mint, now)?.price)
    })?;

    collateral_entry.withdraw(amount)?;
    collateral_entry.settle_pairing(&debt);
    collateral_config.record_withdraw(amount)?;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_STATE_SEED, &[vault_state.bump]]];
    let cpi_accounts = Transfer {
        from: ctx.accounts.custody.to_account_info(),
        to: ctx.accounts.user_collateral_ata.to_account_info(),
        authority: vault_state.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)?;

    msg!("Withdrew {} of {}", amount, collateral_config.mint);
    emit!(CollateralWithdrawn {
        user: ctx.accounts.user_authority.key(),
        token: collateral_config.mint,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawCollateral<'info> {
    #[account(mut)]
    pub user_authority: Signer<'info>,

    #[account(seeds = [VAULT_STATE_SEED], bump = vault_state.bump)]
    pub vault_state: Box<Account<'info, VaultState>>,
    #[account(
        mut,
        seeds = [COLLATERAL_CONFIG_SEED, collateral_config.mint.as_ref()],
        bump = collateral_config.bump,
        has_one = custody @ ErrorCode::TokenMismatch
    )]
    pub collateral_config: Box<Account<'info, CollateralConfig>>,
    #[account(
        mut,
        seeds = [COLLATERAL_ENTRY_SEED, user_authority.key().as_ref(), collateral_config.mint.as_ref()],
        bump = collateral_entry.bump,
        constraint = collateral_entry.owner == user_authority.key() @ ErrorCode::Unauthorized
    )]
    pub collateral_entry: Box<Account<'info, CollateralEntry>>,

    // Must be the borrow token the collateral is paired with, if any
    #[account(
        seeds = [BORROW_CONFIG_SEED, borrow_config.mint.as_ref()],
        bump = borrow_config.bump
    )]
    pub borrow_config: Box<Account<'info, BorrowConfig>>,
    /// CHECK: may not exist yet, in which case the user owes nothing
    #[account(
        seeds = [DEBT_ENTRY_SEED, user_authority.key().as_ref(), borrow_config.mint.as_ref()],
        bump
    )]
    pub debt_entry: UncheckedAccount<'info>,
    pub price: PriceAccounts<'info>,

    #[account(
        mut,
        token::mint = collateral_config.mint,
        token::authority = user_authority
    )]
    pub user_collateral_ata: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub custody: Box<Account<'info, TokenAccount>>,

    // Programs and Sysvars
    pub token_program: Program<'info, Token>,
}
