use anchor_lang::prelude::*;

use crate::state::MetricSet;

/// Immutable audit trail for one evaluation submission. The PDA is derived
/// from (model, pipeline_run_id), so a run id can never settle twice.
#[account]
#[derive(InitSpace)]
pub struct EvaluationRecord {
    pub model: Pubkey,
    pub pipeline_run_id: u64,
    pub submitter: Pubkey,
    pub baseline: MetricSet,
    pub new_metrics: MetricSet,
    pub aggregate_score_bps: u64,
    pub total_reward: u64,
    /// Informational sample counts; validated but not part of reward math.
    pub samples: u32,
    pub total_samples: u32,
    pub submitted_at: i64,
    pub bump: u8,
}
