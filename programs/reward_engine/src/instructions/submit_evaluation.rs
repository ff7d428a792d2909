use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use model_registry::program::ModelRegistry;
use token_authority::program::TokenAuthority;

use crate::{
    constants::BPS_DENOM,
    error::ErrorCode,
    events::{ContributorSkipped, EvaluationSubmitted, RewardCalculated},
    helpers::{aggregate_score_bps, compute_reward, enforce_cooldown, require_evaluator},
    state::{ContributorStats, EvaluationRecord, MetricSet, RewardConfig},
};

pub fn handler(
    ctx: Context<SubmitEvaluation>,
    pipeline_run_id: u64,
    baseline: MetricSet,
    new_metrics: MetricSet,
    weight_bps: u16,
    samples: u32,
    total_samples: u32,
) -> Result<()> {
    require_evaluator(&ctx.accounts.submitter, &ctx.accounts.reward_config)?;
    baseline.validate()?;
    new_metrics.validate()?;
    require!(weight_bps as u64 <= BPS_DENOM, ErrorCode::InvalidWeight);
    require!(samples <= total_samples, ErrorCode::InvalidSampleCounts);

    let now = Clock::get()?.unix_timestamp;
    let config = &ctx.accounts.reward_config;
    let stats = &mut ctx.accounts.contributor_stats;
    enforce_cooldown(stats, now, config.cooldown_secs)?;

    let score_bps = aggregate_score_bps(&baseline, &new_metrics);

    // The per-model rate is read from the directory at call time, never
    // cached; zero there falls back to the engine-wide default.
    let rate = match ctx.accounts.model_entry.reward_rate {
        0 => config.fallback_reward_rate,
        rate => rate,
    };
    let reward = compute_reward(
        score_bps,
        rate,
        weight_bps,
        config.min_improvement_bps,
        config.max_reward,
    )?;

    let model_key = ctx.accounts.model_entry.key();
    let record = &mut ctx.accounts.evaluation_record;
    record.model = model_key;
    record.pipeline_run_id = pipeline_run_id;
    record.submitter = ctx.accounts.submitter.key();
    record.baseline = baseline;
    record.new_metrics = new_metrics;
    record.aggregate_score_bps = score_bps;
    record.total_reward = reward;
    record.samples = samples;
    record.total_samples = total_samples;
    record.submitted_at = now;
    record.bump = ctx.bumps.evaluation_record;

    stats.last_submitted_at = now;
    stats.submission_count = stats
        .submission_count
        .checked_add(1)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    stats.total_rewarded = stats
        .total_rewarded
        .checked_add(reward)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    let contributor = ctx.accounts.contributor_stats.contributor;
    if reward > 0 {
        cpi_mint_reward(&ctx, reward)?;
    } else {
        emit!(ContributorSkipped {
            model: model_key,
            contributor,
        });
    }

    emit!(EvaluationSubmitted {
        model: model_key,
        pipeline_run_id,
        aggregate_score_bps: score_bps,
        submitter: ctx.accounts.submitter.key(),
    });
    emit!(RewardCalculated {
        model: model_key,
        contributor,
        score_bps,
        reward,
    });

    Ok(())
}

fn cpi_mint_reward(ctx: &Context<SubmitEvaluation>, amount: u64) -> Result<()> {
    let seeds: &[&[u8]] = &[
        b"reward-authority",
        &[ctx.accounts.reward_config.authority_bump],
    ];
    let signer_seeds = &[seeds];

    let cpi_accounts = token_authority::cpi::accounts::MintTokens {
        issuer: ctx.accounts.reward_authority.to_account_info(),
        issuer_set: ctx.accounts.issuer_set.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        mint_authority: ctx.accounts.mint_authority.to_account_info(),
        recipient_token_account: ctx.accounts.contributor_token_account.to_account_info(),
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
#[instruction(pipeline_run_id: u64)]
pub struct SubmitEvaluation<'info> {
    #[account(mut)]
    pub submitter: Signer<'info>,
    #[account(
        seeds = [b"reward-config"],
        bump = reward_config.bump,
    )]
    pub reward_config: Box<Account<'info, RewardConfig>>,
    /// CHECK: reward engine authority PDA, acts as the registered issuer.
    #[account(seeds = [b"reward-authority"], bump = reward_config.authority_bump)]
    pub reward_authority: UncheckedAccount<'info>,
    #[account(address = reward_config.model_registry_program)]
    pub model_registry_program: Program<'info, ModelRegistry>,
    #[account(
        seeds = [b"model".as_ref(), &model_entry.model_id.to_le_bytes()],
        seeds::program = model_registry_program.key(),
        bump = model_entry.bump,
    )]
    pub model_entry: Box<Account<'info, model_registry::ModelEntry>>,
    #[account(
        mut,
        seeds = [b"contributor", model_entry.key().as_ref(), contributor_stats.contributor.as_ref()],
        bump = contributor_stats.bump,
        constraint = contributor_stats.model == model_entry.key() @ ErrorCode::ModelMismatch,
    )]
    pub contributor_stats: Box<Account<'info, ContributorStats>>,
    #[account(
        init,
        payer = submitter,
        seeds = [b"evaluation", model_entry.key().as_ref(), &pipeline_run_id.to_le_bytes()],
        bump,
        space = 8 + EvaluationRecord::INIT_SPACE,
    )]
    pub evaluation_record: Box<Account<'info, EvaluationRecord>>,
    #[account(mut, address = model_entry.token_mint @ ErrorCode::ModelMismatch)]
    pub token_mint: Box<Account<'info, Mint>>,
    #[account(address = reward_config.token_authority_program)]
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
    #[account(
        mut,
        constraint = contributor_token_account.mint == token_mint.key() @ ErrorCode::InvalidTokenAccount,
        constraint = contributor_token_account.owner == contributor_stats.contributor @ ErrorCode::InvalidTokenAccount,
    )]
    pub contributor_token_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
