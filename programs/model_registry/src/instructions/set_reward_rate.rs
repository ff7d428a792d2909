use anchor_lang::prelude::*;

use crate::{
    events::RewardRateUpdated,
    helpers::require_governor,
    state::{ModelEntry, RegistryConfig},
};

pub fn handler(ctx: Context<SetRewardRate>, reward_rate: u64) -> Result<()> {
    require_governor(&ctx.accounts.authority, &ctx.accounts.registry_config)?;

    let entry = &mut ctx.accounts.model_entry;
    entry.reward_rate = reward_rate;
    ctx.accounts.registry_config.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(RewardRateUpdated {
        model_id: entry.model_id,
        reward_rate,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetRewardRate<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"registry-config"],
        bump = registry_config.bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,
    #[account(
        mut,
        seeds = [b"model".as_ref(), &model_entry.model_id.to_le_bytes()],
        bump = model_entry.bump,
    )]
    pub model_entry: Account<'info, ModelEntry>,
}
