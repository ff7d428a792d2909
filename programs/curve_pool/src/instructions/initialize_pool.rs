use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::DEFAULT_MAX_TRADE_BPS,
    error::ErrorCode,
    state::{Pool, PoolParams},
};

pub fn handler(ctx: Context<InitializePool>, params: PoolParams) -> Result<()> {
    params.validate()?;
    require!(
        ctx.accounts.token_authority_program.executable,
        ErrorCode::InvalidProgramAccount
    );
    require!(
        ctx.accounts.treasury.key() != Pubkey::default(),
        ErrorCode::NullAddress
    );

    let (expected_mint_authority, _) = Pubkey::find_program_address(
        &[b"mint-authority", ctx.accounts.token_mint.key().as_ref()],
        &ctx.accounts.token_authority_program.key(),
    );
    require_keys_eq!(
        expected_mint_authority,
        ctx.accounts.mint_authority.key(),
        ErrorCode::InvalidProgramAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;
    pool.admin = ctx.accounts.admin.key();
    pool.treasury = ctx.accounts.treasury.key();
    pool.token_mint = ctx.accounts.token_mint.key();
    pool.reserve_mint = ctx.accounts.reserve_mint.key();
    pool.reserve_vault = ctx.accounts.reserve_vault.key();
    pool.treasury_vault = ctx.accounts.treasury_vault.key();
    pool.token_authority_program = ctx.accounts.token_authority_program.key();
    pool.reserve_balance = 0;
    pool.treasury_balance = 0;
    pool.reserve_ratio_ppm = params.reserve_ratio_ppm;
    pool.trade_fee_bps = params.trade_fee_bps;
    pool.protocol_fee_bps = params.protocol_fee_bps;
    pool.max_trade_bps = if params.max_trade_bps == 0 {
        DEFAULT_MAX_TRADE_BPS
    } else {
        params.max_trade_bps
    };
    pool.flat_price = params.flat_price;
    pool.graduation_threshold = params.graduation_threshold;
    pool.sell_enabled_at = params.sell_enabled_at;
    pool.has_graduated = false;
    pool.paused = false;
    pool.created_at = now;
    pool.authority_bump = ctx.bumps.pool_authority;
    pool.bump = ctx.bumps.pool;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    pub token_mint: Account<'info, Mint>,
    pub reserve_mint: Account<'info, Mint>,
    /// CHECK: external wallet that receives treasury withdrawals.
    pub treasury: UncheckedAccount<'info>,
    /// CHECK: issuance gateway program id pinned into pool config.
    pub token_authority_program: UncheckedAccount<'info>,
    /// CHECK: PDA owned by the issuance gateway holding the SPL mint authority.
    pub mint_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [b"pool", token_mint.key().as_ref()],
        bump,
        space = 8 + Pool::INIT_SPACE,
    )]
    pub pool: Account<'info, Pool>,
    /// CHECK: PDA that signs vault transfers and issuance CPIs for this pool.
    #[account(seeds = [b"pool-authority", pool.key().as_ref()], bump)]
    pub pool_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [b"reserve-vault", pool.key().as_ref()],
        bump,
        token::mint = reserve_mint,
        token::authority = pool_authority,
    )]
    pub reserve_vault: Account<'info, TokenAccount>,
    #[account(
        init,
        payer = admin,
        seeds = [b"treasury-vault", pool.key().as_ref()],
        bump,
        token::mint = reserve_mint,
        token::authority = pool_authority,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
