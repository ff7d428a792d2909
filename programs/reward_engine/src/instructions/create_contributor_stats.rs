use anchor_lang::prelude::*;
use model_registry::program::ModelRegistry;

use crate::{error::ErrorCode, state::{ContributorStats, RewardConfig}};

pub fn handler(ctx: Context<CreateContributorStats>, contributor: Pubkey) -> Result<()> {
    require!(contributor != Pubkey::default(), ErrorCode::NullAddress);

    let stats = &mut ctx.accounts.contributor_stats;
    stats.model = ctx.accounts.model_entry.key();
    stats.contributor = contributor;
    stats.last_submitted_at = 0;
    stats.submission_count = 0;
    stats.total_rewarded = 0;
    stats.bump = ctx.bumps.contributor_stats;

    Ok(())
}

#[derive(Accounts)]
#[instruction(contributor: Pubkey)]
pub struct CreateContributorStats<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        seeds = [b"reward-config"],
        bump = reward_config.bump,
    )]
    pub reward_config: Account<'info, RewardConfig>,
    #[account(address = reward_config.model_registry_program)]
    pub model_registry_program: Program<'info, ModelRegistry>,
    #[account(
        seeds = [b"model".as_ref(), &model_entry.model_id.to_le_bytes()],
        seeds::program = model_registry_program.key(),
        bump = model_entry.bump,
    )]
    pub model_entry: Account<'info, model_registry::ModelEntry>,
    #[account(
        init,
        payer = payer,
        seeds = [b"contributor", model_entry.key().as_ref(), contributor.as_ref()],
        bump,
        space = 8 + ContributorStats::INIT_SPACE,
    )]
    pub contributor_stats: Account<'info, ContributorStats>,
    pub system_program: Program<'info, System>,
}
