use anchor_lang::prelude::*;

use crate::{
    constants::MAX_ISSUERS, error::ErrorCode, events::IssuerAdded, helpers::require_admin,
    state::IssuerSet,
};

pub fn handler(ctx: Context<AddIssuer>, issuer: Pubkey) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.issuer_set)?;
    require!(issuer != Pubkey::default(), ErrorCode::NullAddress);

    let set = &mut ctx.accounts.issuer_set;
    require!(set.issuers.len() < MAX_ISSUERS, ErrorCode::IssuerSetFull);
    require!(
        !set.issuers.contains(&issuer),
        ErrorCode::IssuerAlreadyExists
    );

    set.issuers.push(issuer);

    emit!(IssuerAdded {
        token_mint: set.token_mint,
        issuer,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddIssuer<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"issuer-set", issuer_set.token_mint.as_ref()],
        bump = issuer_set.bump,
    )]
    pub issuer_set: Account<'info, IssuerSet>,
}
