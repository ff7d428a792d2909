use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::RegistryConfig};

pub fn handler(ctx: Context<InitializeRegistry>, governor: Pubkey) -> Result<()> {
    require!(governor != Pubkey::default(), ErrorCode::NullAddress);

    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.registry_config;
    config.governor = governor;
    config.model_count = 0;
    config.created_at = now;
    config.last_updated_at = now;
    config.bump = ctx.bumps.registry_config;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        init,
        payer = payer,
        seeds = [b"registry-config"],
        bump,
        space = 8 + RegistryConfig::INIT_SPACE,
    )]
    pub registry_config: Account<'info, RegistryConfig>,
    pub system_program: Program<'info, System>,
}
