use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode, events::GovernorChanged, helpers::require_governor, state::RegistryConfig,
};

pub fn handler(ctx: Context<SetGovernor>, new_governor: Pubkey) -> Result<()> {
    require_governor(&ctx.accounts.authority, &ctx.accounts.registry_config)?;
    require!(new_governor != Pubkey::default(), ErrorCode::NullAddress);

    let config = &mut ctx.accounts.registry_config;
    let previous = config.governor;
    config.governor = new_governor;
    config.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(GovernorChanged {
        previous,
        current: new_governor,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetGovernor<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"registry-config"],
        bump = registry_config.bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,
}
