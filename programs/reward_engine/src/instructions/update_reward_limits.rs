use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode, events::RewardLimitsUpdated, helpers::require_governor, state::RewardConfig,
};

pub fn handler(
    ctx: Context<UpdateRewardLimits>,
    fallback_reward_rate: u64,
    min_improvement_bps: u64,
    max_reward: u64,
    cooldown_secs: i64,
) -> Result<()> {
    require_governor(&ctx.accounts.governor, &ctx.accounts.reward_config)?;
    require!(cooldown_secs >= 0, ErrorCode::InvalidCooldown);
    require!(max_reward > 0, ErrorCode::InvalidAmount);

    let config = &mut ctx.accounts.reward_config;
    config.fallback_reward_rate = fallback_reward_rate;
    config.min_improvement_bps = min_improvement_bps;
    config.max_reward = max_reward;
    config.cooldown_secs = cooldown_secs;

    emit!(RewardLimitsUpdated {
        fallback_reward_rate,
        min_improvement_bps,
        max_reward,
        cooldown_secs,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateRewardLimits<'info> {
    pub governor: Signer<'info>,
    #[account(
        mut,
        seeds = [b"reward-config"],
        bump = reward_config.bump,
    )]
    pub reward_config: Account<'info, RewardConfig>,
}
