use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use token_authority::program::TokenAuthority;

use crate::{
    error::ErrorCode,
    events::TokensSold,
    helpers::{settle_sell, transfer_from_vault},
    state::Pool,
};

pub fn handler(
    ctx: Context<Sell>,
    tokens_in: u64,
    min_reserve_out: u64,
    deadline: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require!(!ctx.accounts.pool.paused, ErrorCode::Paused);
    // Sells stay disabled strictly by elapsed time, independent of phase.
    require!(
        now >= ctx.accounts.pool.sell_enabled_at,
        ErrorCode::SellsNotEnabled
    );
    require!(now <= deadline, ErrorCode::DeadlineExpired);
    require!(
        ctx.accounts.recipient_reserve_account.owner != Pubkey::default(),
        ErrorCode::NullAddress
    );

    let supply = ctx.accounts.token_mint.supply;
    let pool_key = ctx.accounts.pool.key();

    let outcome = settle_sell(
        &mut ctx.accounts.pool,
        supply,
        tokens_in,
        min_reserve_out,
    )?;

    cpi_burn_tokens(&ctx, pool_key, tokens_in)?;

    let authority_bump = ctx.accounts.pool.authority_bump;
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.reserve_vault,
        &ctx.accounts.recipient_reserve_account,
        &ctx.accounts.pool_authority,
        pool_key,
        authority_bump,
        outcome.net_payout,
    )?;
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.reserve_vault,
        &ctx.accounts.treasury_vault,
        &ctx.accounts.pool_authority,
        pool_key,
        authority_bump,
        outcome.protocol_fee,
    )?;

    emit!(TokensSold {
        pool: pool_key,
        seller: ctx.accounts.seller.key(),
        recipient: ctx.accounts.recipient_reserve_account.owner,
        tokens_in,
        reserve_out: outcome.reserve_out,
        fee: outcome.fee,
        net_payout: outcome.net_payout,
    });

    Ok(())
}

fn cpi_burn_tokens(ctx: &Context<Sell>, pool_key: Pubkey, amount: u64) -> Result<()> {
    let seeds: &[&[u8]] = &[
        b"pool-authority",
        pool_key.as_ref(),
        &[ctx.accounts.pool.authority_bump],
    ];
    let signer_seeds = &[seeds];

    // The seller's own signature travels through the CPI as the token-account
    // authority; the pool authority signs as the registered issuer.
    let cpi_accounts = token_authority::cpi::accounts::BurnTokens {
        issuer: ctx.accounts.pool_authority.to_account_info(),
        holder: ctx.accounts.seller.to_account_info(),
        issuer_set: ctx.accounts.issuer_set.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        holder_token_account: ctx.accounts.seller_token_account.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
    };

    token_authority::cpi::burn_tokens(
        CpiContext::new_with_signer(
            ctx.accounts.token_authority_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        amount,
    )
}

#[derive(Accounts)]
pub struct Sell<'info> {
    pub seller: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", token_mint.key().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
    #[account(mut, address = pool.token_mint)]
    pub token_mint: Box<Account<'info, Mint>>,
    /// CHECK: pool authority PDA, acts as the registered issuer.
    #[account(
        seeds = [b"pool-authority", pool.key().as_ref()],
        bump = pool.authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,
    #[account(mut, address = pool.reserve_vault)]
    pub reserve_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut, address = pool.treasury_vault)]
    pub treasury_vault: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = seller_token_account.mint == pool.token_mint @ ErrorCode::InvalidTokenAccount,
        constraint = seller_token_account.owner == seller.key() @ ErrorCode::Unauthorized,
    )]
    pub seller_token_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = recipient_reserve_account.mint == pool.reserve_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub recipient_reserve_account: Box<Account<'info, TokenAccount>>,
    pub token_authority_program: Program<'info, TokenAuthority>,
    #[account(
        seeds = [b"issuer-set", token_mint.key().as_ref()],
        seeds::program = token_authority_program.key(),
        bump = issuer_set.bump,
    )]
    pub issuer_set: Box<Account<'info, token_authority::IssuerSet>>,
    pub token_program: Program<'info, Token>,
}
