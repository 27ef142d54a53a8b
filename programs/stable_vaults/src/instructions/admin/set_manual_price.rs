//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use std::mem::size_of;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::ManualPriceSet;
use crate::states::{ManualPrice, PriceOracle};
use crate::utils::now;

/// Stores a wad USD price for the mint. A price of zero clears it.
pub fn handle(ctx: Context<SetManualPrice>, price: u128) -> Result<()> {
    let manual_price = &mut ctx.accounts.manual_price;

    if manual_price.mint == Pubkey::default() {
        manual_price.bump = *ctx.bumps.get("manual_price").ok_or(ErrorCode::InvalidArgument)?;
        manual_price.oracle = ctx.accounts.price_oracle.key();
        manual_price.mint = ctx.accounts.mint.key();
    }
    manual_price.price = price;
    manual_price.updated_at = now()?;

    msg!("Manual price for {}: {}", manual_price.mint, price);
    emit!(ManualPriceSet {
        token: manual_price.mint,
        price,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetManualPrice<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PRICE_ORACLE_SEED],
        bump = price_oracle.bump,
        has_one = authority @ ErrorCode::Unauthorized
    )]
    pub price_oracle: Box<Account<'info, PriceOracle>>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [MANUAL_PRICE_SEED, price_oracle.key().as_ref(), mint.key().as_ref()],
        bump,
        space = 8 + size_of::<ManualPrice>()
    )]
    pub manual_price: Box<Account<'info, ManualPrice>>,

    pub mint: Box<Account<'info, Mint>>,

    pub system_program: Program<'info, System>,
}
