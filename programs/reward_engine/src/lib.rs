use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use helpers::*;
pub use instructions::*;
pub use state::*;

declare_id!("6YZ5tWt2tYfHGjhX1Feb7aiMPt3sF774WJdE7BGRuowW");

#[program]
pub mod reward_engine {
    use super::*;

    pub fn initialize_rewards(
        ctx: Context<InitializeRewards>,
        evaluator: Pubkey,
        fallback_reward_rate: u64,
        min_improvement_bps: u64,
        max_reward: u64,
        cooldown_secs: i64,
    ) -> Result<()> {
        instructions::initialize_rewards::handler(
            ctx,
            evaluator,
            fallback_reward_rate,
            min_improvement_bps,
            max_reward,
            cooldown_secs,
        )
    }

    pub fn update_reward_limits(
        ctx: Context<UpdateRewardLimits>,
        fallback_reward_rate: u64,
        min_improvement_bps: u64,
        max_reward: u64,
        cooldown_secs: i64,
    ) -> Result<()> {
        instructions::update_reward_limits::handler(
            ctx,
            fallback_reward_rate,
            min_improvement_bps,
            max_reward,
            cooldown_secs,
        )
    }

    pub fn create_contributor_stats(
        ctx: Context<CreateContributorStats>,
        contributor: Pubkey,
    ) -> Result<()> {
        instructions::create_contributor_stats::handler(ctx, contributor)
    }

    pub fn submit_evaluation(
        ctx: Context<SubmitEvaluation>,
        pipeline_run_id: u64,
        baseline: MetricSet,
        new_metrics: MetricSet,
        weight_bps: u16,
        samples: u32,
        total_samples: u32,
    ) -> Result<()> {
        instructions::submit_evaluation::handler(
            ctx,
            pipeline_run_id,
            baseline,
            new_metrics,
            weight_bps,
            samples,
            total_samples,
        )
    }

    pub fn submit_evaluation_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, SubmitEvaluationBatch<'info>>,
        pipeline_run_id: u64,
        baseline: MetricSet,
        new_metrics: MetricSet,
        weights: Vec<u16>,
        samples: u32,
        total_samples: u32,
    ) -> Result<()> {
        instructions::submit_evaluation_batch::handler(
            ctx,
            pipeline_run_id,
            baseline,
            new_metrics,
            weights,
            samples,
            total_samples,
        )
    }
}
