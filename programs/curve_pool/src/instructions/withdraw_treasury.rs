use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::TreasuryWithdrawn,
    helpers::{require_admin, transfer_from_vault},
    state::Pool,
};

/// Pays accrued protocol fees out to the configured treasury wallet. Draws
/// only on `treasury_balance`, never the reserve, and works while paused.
pub fn handler(ctx: Context<WithdrawTreasury>, amount: u64) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    require!(amount > 0, ErrorCode::InvalidAmount);

    let pool = &mut ctx.accounts.pool;
    require!(
        amount <= pool.treasury_balance,
        ErrorCode::InsufficientTreasury
    );
    pool.treasury_balance -= amount;

    let pool_key = pool.key();
    let authority_bump = pool.authority_bump;
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.treasury_vault,
        &ctx.accounts.treasury_token_account,
        &ctx.accounts.pool_authority,
        pool_key,
        authority_bump,
        amount,
    )?;

    emit!(TreasuryWithdrawn {
        pool: pool_key,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawTreasury<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.token_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    /// CHECK: pool authority PDA for vault transfer signing.
    #[account(
        seeds = [b"pool-authority", pool.key().as_ref()],
        bump = pool.authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,
    #[account(mut, address = pool.treasury_vault)]
    pub treasury_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = treasury_token_account.mint == pool.reserve_mint @ ErrorCode::InvalidTokenAccount,
        constraint = treasury_token_account.owner == pool.treasury @ ErrorCode::Unauthorized,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
