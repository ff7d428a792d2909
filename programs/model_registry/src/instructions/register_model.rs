use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::ModelRegistered,
    helpers::{require_governor, to_fixed_metric, to_fixed_name},
    state::{ModelEntry, RegistryConfig},
};

pub fn handler(
    ctx: Context<RegisterModel>,
    model_id: u64,
    name: String,
    primary_metric: String,
    token_mint: Pubkey,
    pool: Pubkey,
) -> Result<()> {
    require_governor(&ctx.accounts.authority, &ctx.accounts.registry_config)?;
    require!(token_mint != Pubkey::default(), ErrorCode::NullAddress);
    require!(pool != Pubkey::default(), ErrorCode::NullAddress);

    let now = Clock::get()?.unix_timestamp;
    let entry = &mut ctx.accounts.model_entry;
    entry.model_id = model_id;
    entry.name = to_fixed_name(&name)?;
    entry.primary_metric = to_fixed_metric(&primary_metric)?;
    entry.token_mint = token_mint;
    entry.pool = pool;
    entry.reward_rate = 0;
    entry.registered_at = now;
    entry.bump = ctx.bumps.model_entry;

    let config = &mut ctx.accounts.registry_config;
    config.model_count = config
        .model_count
        .checked_add(1)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    config.last_updated_at = now;

    emit!(ModelRegistered {
        model_id,
        token_mint,
        pool,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(model_id: u64)]
pub struct RegisterModel<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"registry-config"],
        bump = registry_config.bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,
    #[account(
        init,
        payer = authority,
        seeds = [b"model".as_ref(), &model_id.to_le_bytes()],
        bump,
        space = 8 + ModelEntry::INIT_SPACE,
    )]
    pub model_entry: Account<'info, ModelEntry>,
    pub system_program: Program<'info, System>,
}
