use anchor_lang::prelude::*;

use crate::{
    events::ParametersUpdated,
    helpers::require_admin,
    state::{validate_curve_params, Pool},
};

/// Effective immediately for subsequent quotes; no retroactive effect on
/// settled trades.
pub fn handler(
    ctx: Context<SetParameters>,
    reserve_ratio_ppm: u32,
    trade_fee_bps: u16,
    protocol_fee_bps: u16,
) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    validate_curve_params(reserve_ratio_ppm, trade_fee_bps, protocol_fee_bps)?;

    let pool = &mut ctx.accounts.pool;
    pool.reserve_ratio_ppm = reserve_ratio_ppm;
    pool.trade_fee_bps = trade_fee_bps;
    pool.protocol_fee_bps = protocol_fee_bps;

    emit!(ParametersUpdated {
        pool: pool.key(),
        reserve_ratio_ppm,
        trade_fee_bps,
        protocol_fee_bps,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetParameters<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.token_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
