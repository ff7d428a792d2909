use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{
    set_authority, spl_token::instruction::AuthorityType, Mint, SetAuthority, Token,
};

use crate::{error::ErrorCode, state::IssuerSet};

pub fn handler(ctx: Context<RegisterToken>, pool: Pubkey) -> Result<()> {
    require!(pool != Pubkey::default(), ErrorCode::NullAddress);

    let mint_authority = ctx.accounts.mint_authority.key();
    if ctx.accounts.mint.mint_authority != COption::Some(mint_authority) {
        require!(
            ctx.accounts.mint.mint_authority == COption::Some(ctx.accounts.admin.key()),
            ErrorCode::InvalidMintAuthority
        );

        set_authority(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                SetAuthority {
                    account_or_mint: ctx.accounts.mint.to_account_info(),
                    current_authority: ctx.accounts.admin.to_account_info(),
                },
            ),
            AuthorityType::MintTokens,
            Some(mint_authority),
        )?;
    }

    let issuer_set = &mut ctx.accounts.issuer_set;
    issuer_set.admin = ctx.accounts.admin.key();
    issuer_set.pool = pool;
    issuer_set.token_mint = ctx.accounts.mint.key();
    issuer_set.issuers = Vec::new();
    issuer_set.authority_bump = ctx.bumps.mint_authority;
    issuer_set.bump = ctx.bumps.issuer_set;

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterToken<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(mut)]
    pub mint: Account<'info, Mint>,
    /// CHECK: PDA that takes over the SPL mint authority.
    #[account(
        seeds = [b"mint-authority", mint.key().as_ref()],
        bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [b"issuer-set", mint.key().as_ref()],
        bump,
        space = 8 + IssuerSet::INIT_SPACE,
    )]
    pub issuer_set: Account<'info, IssuerSet>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
