//libraries
use anchor_lang::prelude::*;

//local imports
use crate::events::PriceResolved;
use crate::instructions::*;
use crate::utils::now;

/// USD price of `mint` (wad) from the first usable source.
pub fn handle(ctx: Context<GetPrice>, mint: Pubkey) -> Result<u128> {
    let resolved = ctx.accounts.price.resolve(&mint, now()?)?;
    emit!(PriceResolved {
        token: mint,
        price: resolved.price,
        source: resolved.source,
    });
    Ok(resolved.price)
}

#[derive(Accounts)]
pub struct GetPrice<'info> {
    pub price: PriceAccounts<'info>,
}
