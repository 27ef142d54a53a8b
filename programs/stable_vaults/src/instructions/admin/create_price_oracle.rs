// libraries
use anchor_lang::prelude::*;

use std::mem::size_of;
// local
use crate::{constants::*, errors::ErrorCode, states::PriceOracle};

pub fn handle(ctx: Context<CreatePriceOracle>) -> Result<()> {
    msg!("INITIALIZING PRICE ORACLE");

    let price_oracle = &mut ctx.accounts.price_oracle;

    price_oracle.bump = *ctx.bumps.get("price_oracle").ok_or(ErrorCode::InvalidArgument)?;
    price_oracle.authority = ctx.accounts.authority.key();

    Ok(())
}

#[derive(Accounts)]
pub struct CreatePriceOracle<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        seeds = [PRICE_ORACLE_SEED],
        bump,
        space = 8 + size_of::<PriceOracle>()
    )]
    pub price_oracle: Box<Account<'info, PriceOracle>>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
