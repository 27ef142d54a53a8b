// libraries
use anchor_lang::prelude::*;

use std::mem::size_of;
// local
use crate::{constants::*, errors::ErrorCode, states::VaultState};

pub fn handle(ctx: Context<CreateVaultState>) -> Result<()> {
    msg!("INITIALIZING VAULT STATE");

    let vault_state = &mut ctx.accounts.vault_state;

    vault_state.bump = *ctx.bumps.get("vault_state").ok_or(ErrorCode::InvalidArgument)?;
    vault_state.authority = ctx.accounts.authority.key();
    vault_state.collateral_token_count = 0;
    vault_state.borrow_token_count = 0;

    Ok(())
}

#[derive(Accounts)]
pub struct CreateVaultState<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        seeds = [VAULT_STATE_SEED],
        bump,
        space = 8 + size_of::<VaultState>()
    )]
    pub vault_state: Box<Account<'info, VaultState>>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
