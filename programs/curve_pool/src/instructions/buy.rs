use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use token_authority::program::TokenAuthority;

use crate::{
    error::ErrorCode,
    events::{PhaseTransition, TokensPurchased},
    helpers::{settle_buy, transfer_to_vault},
    state::Pool,
};

pub fn handler(ctx: Context<Buy>, amount_in: u64, min_tokens_out: u64, deadline: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require!(!ctx.accounts.pool.paused, ErrorCode::Paused);
    require!(now <= deadline, ErrorCode::DeadlineExpired);
    require!(
        ctx.accounts.recipient_token_account.owner != Pubkey::default(),
        ErrorCode::NullAddress
    );

    // Outstanding supply is whatever the SPL mint says right now; the pool
    // never caches it.
    let supply = ctx.accounts.token_mint.supply;
    let pool_key = ctx.accounts.pool.key();

    let outcome = settle_buy(
        &mut ctx.accounts.pool,
        supply,
        amount_in,
        min_tokens_out,
    )?;

    // Reserve share of the trade (input net of fee, plus the fee portion the
    // pool retains) lands in the reserve vault; the protocol share goes
    // straight to the treasury vault.
    let to_reserve = amount_in
        .checked_sub(outcome.protocol_fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    transfer_to_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.buyer_reserve_account,
        &ctx.accounts.reserve_vault,
        &ctx.accounts.buyer,
        to_reserve,
    )?;
    transfer_to_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.buyer_reserve_account,
        &ctx.accounts.treasury_vault,
        &ctx.accounts.buyer,
        outcome.protocol_fee,
    )?;

    cpi_mint_tokens(&ctx, pool_key, outcome.tokens_out)?;

    emit!(TokensPurchased {
        pool: pool_key,
        buyer: ctx.accounts.buyer.key(),
        recipient: ctx.accounts.recipient_token_account.owner,
        amount_in,
        fee: outcome.fee,
        tokens_out: outcome.tokens_out,
    });

    if outcome.crossed_threshold {
        emit!(PhaseTransition {
            pool: pool_key,
            reserve: ctx.accounts.pool.reserve_balance,
            timestamp: now,
        });
    }

    Ok(())
}

fn cpi_mint_tokens(ctx: &Context<Buy>, pool_key: Pubkey, amount: u64) -> Result<()> {
    let seeds: &[&[u8]] = &[
        b"pool-authority",
        pool_key.as_ref(),
        &[ctx.accounts.pool.authority_bump],
    ];
    let signer_seeds = &[seeds];

    let cpi_accounts = token_authority::cpi::accounts::MintTokens {
        issuer: ctx.accounts.pool_authority.to_account_info(),
        issuer_set: ctx.accounts.issuer_set.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        mint_authority: ctx.accounts.mint_authority.to_account_info(),
        recipient_token_account: ctx.accounts.recipient_token_account.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
    };

    token_authority::cpi::mint_tokens(
        CpiContext::new_with_signer(
            ctx.accounts.token_authority_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        amount,
    )
}

#[derive(Accounts)]
pub struct Buy<'info> {
    pub buyer: Signer<'info>,
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
        constraint = buyer_reserve_account.mint == pool.reserve_mint @ ErrorCode::InvalidTokenAccount,
        constraint = buyer_reserve_account.owner == buyer.key() @ ErrorCode::Unauthorized,
    )]
    pub buyer_reserve_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = recipient_token_account.mint == pool.token_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub recipient_token_account: Box<Account<'info, TokenAccount>>,
    pub token_authority_program: Program<'info, TokenAuthority>,
    #[account(
        seeds = [b"issuer-set", token_mint.key().as_ref()],
        seeds::program = token_authority_program.key(),
        bump = issuer_set.bump,
    )]
    pub issuer_set: Box<Account<'info, token_authority::IssuerSet>>,
    /// CHECK: PDA holding the SPL mint authority, owned by the issuance gateway.
    #[account(
        seeds = [b"mint-authority", token_mint.key().as_ref()],
        seeds::program = token_authority_program.key(),
        bump = issuer_set.authority_bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}
