//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use std::mem::size_of;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::OracleRouteUpdated;
use crate::oracle::{PythSource, SwitchboardSource};
use crate::states::{OracleManager, PriceRoute};

/// Points the mint's primary (pyth) source at `feed`. `Pubkey::default()` disables it.
pub fn handle_primary(ctx: Context<SetPriceRoute>, feed: Pubkey) -> Result<()> {
    if feed != Pubkey::default() {
        require_keys_eq!(ctx.accounts.feed.key(), feed, ErrorCode::PriceFeedMismatch);
        PythSource::validate(&ctx.accounts.feed)?;
    }
    let route = init_route(&mut ctx.accounts.price_route, &ctx.accounts.mint, &ctx.bumps)?;
    route.primary = feed;
    announce(route);
    Ok(())
}

/// Points the mint's secondary (switchboard) source at `feed`. `Pubkey::default()` disables it.
pub fn handle_secondary(ctx: Context<SetPriceRoute>, feed: Pubkey) -> Result<()> {
    if feed != Pubkey::default() {
        require_keys_eq!(ctx.accounts.feed.key(), feed, ErrorCode::PriceFeedMismatch);
        SwitchboardSource::validate(&ctx.accounts.feed)?;
    }
    let route = init_route(&mut ctx.accounts.price_route, &ctx.accounts.mint, &ctx.bumps)?;
    route.secondary = feed;
    announce(route);
    Ok(())
}

fn init_route<'a>(
    route: &'a mut PriceRoute,
    mint: &Account<Mint>,
    bumps: &std::collections::BTreeMap<String, u8>,
) -> Result<&'a mut PriceRoute> {
    if route.mint == Pubkey::default() {
        route.bump = *bumps.get("price_route").ok_or(ErrorCode::InvalidArgument)?;
        route.mint = mint.key();
    }
    Ok(route)
}

fn announce(route: &PriceRoute) {
    msg!(
        "Price route for {}: primary {} secondary {}",
        route.mint,
        route.primary,
        route.secondary
    );
    emit!(OracleRouteUpdated {
        token: route.mint,
        primary: route.primary,
        secondary: route.secondary,
    });
}

#[derive(Accounts)]
pub struct SetPriceRoute<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [ORACLE_MANAGER_SEED],
        bump = oracle_manager.bump,
        has_one = authority @ ErrorCode::Unauthorized
    )]
    pub oracle_manager: Box<Account<'info, OracleManager>>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [PRICE_ROUTE_SEED, mint.key().as_ref()],
        bump,
        space = 8 + size_of::<PriceRoute>()
    )]
    pub price_route: Box<Account<'info, PriceRoute>>,

    pub mint: Box<Account<'info, Mint>>,
    /// CHECK: parsed as the new feed unless the source is being cleared
    pub feed: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
