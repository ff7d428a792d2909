use anchor_lang::prelude::*;
use anchor_spl::token::{mint_to, Mint, MintTo, Token, TokenAccount};

use crate::{
    error::ErrorCode, events::TokensIssued, helpers::assert_issuer_authorized, state::IssuerSet,
};

pub fn handler(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
    assert_issuer_authorized(&ctx.accounts.issuer, &ctx.accounts.issuer_set)?;
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(
        ctx.accounts.recipient_token_account.owner != Pubkey::default(),
        ErrorCode::NullAddress
    );

    let mint_key = ctx.accounts.mint.key();
    let signer_seeds: &[&[u8]] = &[
        b"mint-authority",
        mint_key.as_ref(),
        &[ctx.accounts.issuer_set.authority_bump],
    ];

    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: ctx.accounts.mint_authority.to_account_info(),
            },
            &[signer_seeds],
        ),
        amount,
    )?;

    emit!(TokensIssued {
        token_mint: mint_key,
        recipient: ctx.accounts.recipient_token_account.owner,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct MintTokens<'info> {
    pub issuer: Signer<'info>,
    #[account(
        seeds = [b"issuer-set", mint.key().as_ref()],
        bump = issuer_set.bump,
    )]
    pub issuer_set: Account<'info, IssuerSet>,
    #[account(mut, address = issuer_set.token_mint)]
    pub mint: Account<'info, Mint>,
    /// CHECK: PDA signer holding the SPL mint authority.
    #[account(
        seeds = [b"mint-authority", mint.key().as_ref()],
        bump = issuer_set.authority_bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,
    #[account(
        mut,
        constraint = recipient_token_account.mint == mint.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
