// libraries
use anchor_lang::prelude::*;

use std::mem::size_of;
// local
use crate::{constants::*, errors::ErrorCode, states::OracleManager};

pub fn handle(ctx: Context<CreateOracleManager>, max_price_age: u64) -> Result<()> {
    msg!("INITIALIZING ORACLE MANAGER");

    let oracle_manager = &mut ctx.accounts.oracle_manager;

    oracle_manager.bump = *ctx.bumps.get("oracle_manager").ok_or(ErrorCode::InvalidArgument)?;
    oracle_manager.authority = ctx.accounts.authority.key();
    oracle_manager.manual_oracle = Pubkey::default();
    oracle_manager.max_price_age = if max_price_age == 0 {
        DEFAULT_MAX_PRICE_AGE_SECS
    } else {
        max_price_age
    };

    Ok(())
}

#[derive(Accounts)]
pub struct CreateOracleManager<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        seeds = [ORACLE_MANAGER_SEED],
        bump,
        space = 8 + size_of::<OracleManager>()
    )]
    pub oracle_manager: Box<Account<'info, OracleManager>>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
