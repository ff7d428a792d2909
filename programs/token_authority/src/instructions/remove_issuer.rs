use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode, events::IssuerRemoved, helpers::require_admin, state::IssuerSet,
};

pub fn handler(ctx: Context<RemoveIssuer>, issuer: Pubkey) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.issuer_set)?;

    let set = &mut ctx.accounts.issuer_set;
    let idx = set
        .issuers
        .iter()
        .position(|k| *k == issuer)
        .ok_or_else(|| error!(ErrorCode::IssuerNotFound))?;

    set.issuers.swap_remove(idx);

    emit!(IssuerRemoved {
        token_mint: set.token_mint,
        issuer,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RemoveIssuer<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"issuer-set", issuer_set.token_mint.as_ref()],
        bump = issuer_set.bump,
    )]
    pub issuer_set: Account<'info, IssuerSet>,
}
