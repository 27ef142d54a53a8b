//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::Withdrawn;
use crate::states::{PayoutLeg, SavingsPosition, SavingsUser, SavingsVault, StablecoinConfig};
use crate::utils::now;

/// Closes the position at `position_index`. Before maturity only 90% of the
/// principal comes back and the interest and reward are forfeited.
pub fn handle(ctx: Context<WithdrawSavings>, position_index: u64) -> Result<()> {
    let now = now()?;
    let payout = {
        let accounts = &mut *ctx.accounts;
        accounts.savings_vault.close_position(
            &mut accounts.savings_user,
            &mut accounts.stablecoin_config,
            &mut accounts.savings_position,
            now,
        )?
    };

    let savings_vault = &ctx.accounts.savings_vault;
    let signer_seeds: &[&[&[u8]]] = &[&[SAVINGS_VAULT_SEED, &[savings_vault.bump]]];
    let cpi_program = ctx.accounts.token_program.to_account_info();

    for leg in payout.legs() {
        match leg {
            PayoutLeg::Principal(amount) => {
                let cpi_accounts = Transfer {
                    from: ctx.accounts.custody.to_account_info(),
                    to: ctx.accounts.user_stablecoin_ata.to_account_info(),
                    authority: savings_vault.to_account_info(),
                };
                token::transfer(
                    CpiContext::new_with_signer(cpi_program.clone(), cpi_accounts, signer_seeds),
                    amount,
                )?;
            }
            PayoutLeg::Penalty(amount) => {
                let cpi_accounts = Transfer {
                    from: ctx.accounts.custody.to_account_info(),
                    to: ctx.accounts.treasury_ata.to_account_info(),
                    authority: savings_vault.to_account_info(),
                };
                token::transfer(
                    CpiContext::new_with_signer(cpi_program.clone(), cpi_accounts, signer_seeds),
                    amount,
                )?;
            }
            // The treasury has delegated to the vault pda
            PayoutLeg::Interest(amount) => {
                let cpi_accounts = Transfer {
                    from: ctx.accounts.treasury_ata.to_account_info(),
                    to: ctx.accounts.user_stablecoin_ata.to_account_info(),
                    authority: savings_vault.to_account_info(),
                };
                token::transfer(
                    CpiContext::new_with_signer(cpi_program.clone(), cpi_accounts, signer_seeds),
                    amount,
                )?;
            }
            PayoutLeg::Reward(amount) => {
                let cpi_accounts = MintTo {
                    mint: ctx.accounts.gft_mint.to_account_info(),
                    to: ctx.accounts.user_gft_ata.to_account_info(),
                    authority: savings_vault.to_account_info(),
                };
                token::mint_to(
                    CpiContext::new_with_signer(cpi_program.clone(), cpi_accounts, signer_seeds),
                    amount,
                )?;
            }
        }
    }

    let position = &ctx.accounts.savings_position;
    msg!(
        "Savings position {} (index {}) closed, matured: {}",
        position.position_id,
        position_index,
        payout.matured
    );
    emit!(Withdrawn {
        user: position.owner,
        token: position.stablecoin,
        position_id: position.position_id,
        amount: payout.stablecoin_total()?,
        gft_reward: payout.reward,
        penalty: payout.penalty,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(position_index: u64)]
pub struct WithdrawSavings<'info> {
    pub user_authority: Signer<'info>,

    #[account(
        seeds = [SAVINGS_VAULT_SEED],
        bump = savings_vault.bump,
        has_one = gft_mint @ ErrorCode::TokenMismatch
    )]
    pub savings_vault: Box<Account<'info, SavingsVault>>,
    #[account(
        mut,
        seeds = [STABLECOIN_SEED, stablecoin_config.mint.as_ref()],
        bump = stablecoin_config.bump,
        has_one = custody @ ErrorCode::TokenMismatch
    )]
    pub stablecoin_config: Box<Account<'info, StablecoinConfig>>,
    #[account(
        mut,
        seeds = [SAVINGS_USER_SEED, user_authority.key().as_ref()],
        bump = savings_user.bump,
        constraint = position_index < savings_user.position_count @ ErrorCode::InvalidPositionIndex
    )]
    pub savings_user: Box<Account<'info, SavingsUser>>,
    #[account(
        mut,
        seeds = [
            SAVINGS_POSITION_SEED,
            user_authority.key().as_ref(),
            position_index.to_le_bytes().as_ref()
        ],
        bump = savings_position.bump,
        constraint = savings_position.owner == user_authority.key() @ ErrorCode::Unauthorized
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
    #[account(
        mut,
        token::mint = stablecoin_config.mint,
        token::authority = savings_vault.treasury
    )]
    pub treasury_ata: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub gft_mint: Box<Account<'info, Mint>>,
    #[account(
        mut,
        token::mint = gft_mint,
        token::authority = user_authority
    )]
    pub user_gft_ata: Box<Account<'info, TokenAccount>>,

    // Programs and Sysvars
    pub token_program: Program<'info, Token>,
}
