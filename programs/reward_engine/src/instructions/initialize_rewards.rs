use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::RewardConfig};

pub fn handler(
    ctx: Context<InitializeRewards>,
    evaluator: Pubkey,
    fallback_reward_rate: u64,
    min_improvement_bps: u64,
    max_reward: u64,
    cooldown_secs: i64,
) -> Result<()> {
    require!(evaluator != Pubkey::default(), ErrorCode::NullAddress);
    require!(cooldown_secs >= 0, ErrorCode::InvalidCooldown);
    require!(max_reward > 0, ErrorCode::InvalidAmount);
    require!(
        ctx.accounts.model_registry_program.executable,
        ErrorCode::Unauthorized
    );
    require!(
        ctx.accounts.token_authority_program.executable,
        ErrorCode::Unauthorized
    );

    let config = &mut ctx.accounts.reward_config;
    config.governor = ctx.accounts.governor.key();
    config.evaluator = evaluator;
    config.model_registry_program = ctx.accounts.model_registry_program.key();
    config.token_authority_program = ctx.accounts.token_authority_program.key();
    config.fallback_reward_rate = fallback_reward_rate;
    config.min_improvement_bps = min_improvement_bps;
    config.max_reward = max_reward;
    config.cooldown_secs = cooldown_secs;
    config.authority_bump = ctx.bumps.reward_authority;
    config.bump = ctx.bumps.reward_config;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRewards<'info> {
    #[account(mut)]
    pub governor: Signer<'info>,
    #[account(
        init,
        payer = governor,
        seeds = [b"reward-config"],
        bump,
        space = 8 + RewardConfig::INIT_SPACE,
    )]
    pub reward_config: Account<'info, RewardConfig>,
    /// CHECK: PDA that signs issuance CPIs as the registered issuer.
    #[account(seeds = [b"reward-authority"], bump)]
    pub reward_authority: UncheckedAccount<'info>,
    /// CHECK: directory program id pinned into config.
    pub model_registry_program: UncheckedAccount<'info>,
    /// CHECK: issuance gateway program id pinned into config.
    pub token_authority_program: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}
