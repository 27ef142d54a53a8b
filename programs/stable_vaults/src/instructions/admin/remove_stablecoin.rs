//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::StablecoinRemoved;
use crate::states::{SavingsVault, StablecoinConfig};

/// Stops new deposits of the stablecoin. Open positions can still be withdrawn.
pub fn handle(ctx: Context<RemoveStablecoin>) -> Result<()> {
    let stablecoin = &mut ctx.accounts.stablecoin_config;
    stablecoin.supported = false;

    msg!("Stablecoin removed: {}", stablecoin.mint);
    emit!(StablecoinRemoved {
        token: stablecoin.mint
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RemoveStablecoin<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [SAVINGS_VAULT_SEED],
        bump = savings_vault.bump,
        has_one = authority @ ErrorCode::Unauthorized
    )]
    pub savings_vault: Box<Account<'info, SavingsVault>>,

    #[account(
        mut,
        seeds = [STABLECOIN_SEED, stablecoin_config.mint.as_ref()],
        bump = stablecoin_config.bump
    )]
    pub stablecoin_config: Box<Account<'info, StablecoinConfig>>,
}
