use anchor_lang::prelude::*;

use crate::{
    events::MaxTradeBpsUpdated,
    helpers::require_admin,
    state::{validate_trade_cap, Pool},
};

pub fn handler(ctx: Context<SetMaxTradeBps>, max_trade_bps: u16) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    validate_trade_cap(max_trade_bps)?;

    let pool = &mut ctx.accounts.pool;
    pool.max_trade_bps = max_trade_bps;

    emit!(MaxTradeBpsUpdated {
        pool: pool.key(),
        max_trade_bps,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetMaxTradeBps<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.token_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
