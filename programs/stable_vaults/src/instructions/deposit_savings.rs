//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use std::mem::size_of;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::Deposited;
use crate::states::{SavingsPosition, SavingsUser, SavingsVault, StablecoinConfig};
use crate::types::LockPeriod;
use crate::utils::now;

pub fn handle(ctx: Context<DepositSavings>, amount: u64, lock_period: LockPeriod) -> Result<()> {
    let now = now()?;
    let savings_vault = &mut ctx.accounts.savings_vault;
    let savings_user = &mut ctx.accounts.savings_user;

    if savings_user.owner == Pubkey::default() {
        savings_user.bump = *ctx.bumps.get("savings_user").ok_or(ErrorCode::InvalidArgument)?;
        savings_user.owner = ctx.accounts.user_authority.key();
    }
    let mut position = savings_vault.open_position(
        savings_user,
        &mut ctx.accounts.stablecoin_config,
        amount,
        lock_period,
        now,
    )?;
    position.bump = *ctx.bumps.get("savings_position").ok_or(ErrorCode::InvalidArgument)?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.user_stablecoin_ata.to_account_info(),
        to: ctx.accounts.custody.to_account_info(),
        authority: ctx.accounts.user_authority.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    msg!(
        "Savings position {} opened: {} of {} locked until {}",
        position.position_id,
        amount,
        position.stablecoin,
        position.lock_end_time
    );
    emit!(Deposited {
        user: position.owner,
        token: position.stablecoin,
        position_id: position.position_id,
        amount,
        lock_period,
        lock_end_time: position.lock_end_time,
    });
    **ctx.accounts.savings_position = position;

    Ok(())
}

#[derive(Accounts)]
pub struct DepositSavings<'info> {
    #[account(mut)]
    pub user_authority: Signer<'info>,

    #[account(mut, seeds = [SAVINGS_VAULT_SEED], bump = savings_vault.bump)]
    pub savings_vault: Box<Account<'info, SavingsVault>>,
    #[account(
        mut,
        seeds = [STABLECOIN_SEED, stablecoin_config.mint.as_ref()],
        bump = stablecoin_config.bump,
        has_one = custody @ ErrorCode::TokenMismatch
    )]
    pub stablecoin_config: Box<Account<'info, StablecoinConfig>>,
    #[account(
        init_if_needed,
        payer = user_authority,
        seeds = [SAVINGS_USER_SEED, user_authority.key().as_ref()],
        bump,
        space = 8 + size_of::<SavingsUser>()
    )]
    pub savings_user: Box<Account<'info, SavingsUser>>,
    #[account(
        init,
        payer = user_authority,
        seeds = [
            SAVINGS_POSITION_SEED,
            user_authority.key().as_ref(),
            savings_user.position_count.to_le_bytes().as_ref()
        ],
        bump,
        space = 8 + size_of::<SavingsPosition>()
    )]
    pub savings_position: Box<Account<'info, SavingsPosition>>,

    #[account(
        mut,
        token::mint = stablecoin_config.mint,
        token::authority = user_authority
    )]
    pub user_stablecoin_ata: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub custody: Box<Account<'info, TokenAccount>>,

    // Programs and Sysvars
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
