use anchor_lang::prelude::*;
use anchor_spl::token::{burn, Burn, Mint, Token, TokenAccount};

use crate::{
    error::ErrorCode, events::TokensBurned, helpers::assert_issuer_authorized, state::IssuerSet,
};

pub fn handler(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
    assert_issuer_authorized(&ctx.accounts.issuer, &ctx.accounts.issuer_set)?;
    require!(amount > 0, ErrorCode::InvalidAmount);

    // The holder's signature travels through CPI; the gateway only decides
    // whether the calling engine is allowed to burn at all.
    burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.holder_token_account.to_account_info(),
                authority: ctx.accounts.holder.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(TokensBurned {
        token_mint: ctx.accounts.mint.key(),
        holder: ctx.accounts.holder.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    pub issuer: Signer<'info>,
    pub holder: Signer<'info>,
    #[account(
        seeds = [b"issuer-set", mint.key().as_ref()],
        bump = issuer_set.bump,
    )]
    pub issuer_set: Account<'info, IssuerSet>,
    #[account(mut, address = issuer_set.token_mint)]
    pub mint: Account<'info, Mint>,
    #[account(
        mut,
        constraint = holder_token_account.mint == mint.key() @ ErrorCode::InvalidTokenAccount,
        constraint = holder_token_account.owner == holder.key() @ ErrorCode::Unauthorized,
    )]
    pub holder_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
