//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::OracleManager;

/// Sets which price oracle's manual slots are trusted as the fallback source.
pub fn handle_manual_oracle(ctx: Context<UpdateOracleManager>, price_oracle: Pubkey) -> Result<()> {
    ctx.accounts.oracle_manager.manual_oracle = price_oracle;
    msg!("Manual oracle set to {}", price_oracle);
    Ok(())
}

pub fn handle_max_price_age(ctx: Context<UpdateOracleManager>, max_price_age: u64) -> Result<()> {
    require!(max_price_age > 0, ErrorCode::InvalidArgument);
    ctx.accounts.oracle_manager.max_price_age = max_price_age;
    msg!("Max price age set to {}s", max_price_age);
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateOracleManager<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [ORACLE_MANAGER_SEED],
        bump = oracle_manager.bump,
        has_one = authority @ ErrorCode::Unauthorized
    )]
    pub oracle_manager: Box<Account<'info, OracleManager>>,
}
