use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};
use model_registry::program::ModelRegistry;
use token_authority::program::TokenAuthority;

use crate::{
    constants::BPS_DENOM,
    error::ErrorCode,
    events::{ContributorSkipped, EvaluationSubmitted, RewardsDistributed},
    helpers::{
        aggregate_score_bps, compute_reward, require_evaluator, split_reward, validate_weights,
    },
    state::{EvaluationRecord, MetricSet, RewardConfig},
};

/// Multi-contributor settlement: one aggregate reward for the evaluation,
/// apportioned by bps weights that must sum to exactly 10,000. Contributor
/// token accounts arrive as remaining accounts, one per weight. Shares that
/// floor to zero are skipped with a notice, never a revert; the run-id PDA
/// makes resubmission of the same evaluation impossible.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, SubmitEvaluationBatch<'info>>,
    pipeline_run_id: u64,
    baseline: MetricSet,
    new_metrics: MetricSet,
    weights: Vec<u16>,
    samples: u32,
    total_samples: u32,
) -> Result<()> {
    require_evaluator(&ctx.accounts.submitter, &ctx.accounts.reward_config)?;
    baseline.validate()?;
    new_metrics.validate()?;
    require!(samples <= total_samples, ErrorCode::InvalidSampleCounts);

    validate_weights(&weights)?;
    require!(
        ctx.remaining_accounts.len() == weights.len(),
        ErrorCode::LengthMismatch
    );
    for recipient in ctx.remaining_accounts {
        require!(
            recipient.key() != Pubkey::default(),
            ErrorCode::NullAddress
        );
    }

    let now = Clock::get()?.unix_timestamp;
    let config = &ctx.accounts.reward_config;
    let score_bps = aggregate_score_bps(&baseline, &new_metrics);
    let rate = match ctx.accounts.model_entry.reward_rate {
        0 => config.fallback_reward_rate,
        rate => rate,
    };
    let total_reward = compute_reward(
        score_bps,
        rate,
        BPS_DENOM as u16,
        config.min_improvement_bps,
        config.max_reward,
    )?;
    let shares = split_reward(total_reward, &weights)?;

    let model_key = ctx.accounts.model_entry.key();
    let record = &mut ctx.accounts.evaluation_record;
    record.model = model_key;
    record.pipeline_run_id = pipeline_run_id;
    record.submitter = ctx.accounts.submitter.key();
    record.baseline = baseline;
    record.new_metrics = new_metrics;
    record.aggregate_score_bps = score_bps;
    record.total_reward = total_reward;
    record.samples = samples;
    record.total_samples = total_samples;
    record.submitted_at = now;
    record.bump = ctx.bumps.evaluation_record;

    let mut skipped: u16 = 0;
    for (recipient, &share) in ctx.remaining_accounts.iter().zip(shares.iter()) {
        if share == 0 {
            skipped += 1;
            emit!(ContributorSkipped {
                model: model_key,
                contributor: recipient.key(),
            });
        }
    }

    cpi_batch_mint(&ctx, shares)?;

    emit!(EvaluationSubmitted {
        model: model_key,
        pipeline_run_id,
        aggregate_score_bps: score_bps,
        submitter: ctx.accounts.submitter.key(),
    });
    emit!(RewardsDistributed {
        model: model_key,
        pipeline_run_id,
        total_reward,
        contributors: weights.len() as u16,
        skipped,
    });

    Ok(())
}

fn cpi_batch_mint<'info>(
    ctx: &Context<'_, '_, 'info, 'info, SubmitEvaluationBatch<'info>>,
    amounts: Vec<u64>,
) -> Result<()> {
    let seeds: &[&[u8]] = &[
        b"reward-authority",
        &[ctx.accounts.reward_config.authority_bump],
    ];
    let signer_seeds = &[seeds];

    let cpi_accounts = token_authority::cpi::accounts::BatchMint {
        issuer: ctx.accounts.reward_authority.to_account_info(),
        issuer_set: ctx.accounts.issuer_set.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        mint_authority: ctx.accounts.mint_authority.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
    };

    token_authority::cpi::batch_mint(
        CpiContext::new_with_signer(
            ctx.accounts.token_authority_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        )
        .with_remaining_accounts(ctx.remaining_accounts.to_vec()),
        amounts,
    )
}

#[derive(Accounts)]
#[instruction(pipeline_run_id: u64)]
pub struct SubmitEvaluationBatch<'info> {
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
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
