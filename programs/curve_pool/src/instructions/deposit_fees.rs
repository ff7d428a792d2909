use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::{FeesDeposited, PhaseTransition},
    helpers::{apply_deposit, require_admin, transfer_to_vault},
    state::Pool,
};

/// Sweeps externally collected fees straight into the reserve, bypassing
/// trade mechanics. Deliberately not gated on `paused` so funds can keep
/// moving during incident response.
pub fn handler(ctx: Context<DepositFees>, amount: u64) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;

    let crossed = apply_deposit(&mut ctx.accounts.pool, amount)?;

    transfer_to_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.depositor_reserve_account,
        &ctx.accounts.reserve_vault,
        &ctx.accounts.admin,
        amount,
    )?;

    let pool = &ctx.accounts.pool;
    emit!(FeesDeposited {
        pool: pool.key(),
        amount,
        reserve: pool.reserve_balance,
    });

    if crossed {
        emit!(PhaseTransition {
            pool: pool.key(),
            reserve: pool.reserve_balance,
            timestamp: Clock::get()?.unix_timestamp,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct DepositFees<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.token_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(mut, address = pool.reserve_vault)]
    pub reserve_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = depositor_reserve_account.mint == pool.reserve_mint @ ErrorCode::InvalidTokenAccount,
        constraint = depositor_reserve_account.owner == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub depositor_reserve_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
