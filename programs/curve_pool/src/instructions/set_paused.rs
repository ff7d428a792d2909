use anchor_lang::prelude::*;

use crate::{events::PauseSet, helpers::require_admin, state::Pool};

/// Blocks buy and sell. Fee deposits and treasury withdrawals stay open.
pub fn handler(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;

    let pool = &mut ctx.accounts.pool;
    pool.paused = paused;

    emit!(PauseSet {
        pool: pool.key(),
        paused,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.token_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
