use anchor_lang::prelude::*;

#[event]
pub struct EvaluationSubmitted {
    pub model: Pubkey,
    pub pipeline_run_id: u64,
    pub aggregate_score_bps: u64,
    pub submitter: Pubkey,
}

#[event]
pub struct RewardCalculated {
    pub model: Pubkey,
    pub contributor: Pubkey,
    pub score_bps: u64,
    pub reward: u64,
}

/// A contributor whose proportional share floored to zero. Informational,
/// never an error: the rest of the batch still settles.
#[event]
pub struct ContributorSkipped {
    pub model: Pubkey,
    pub contributor: Pubkey,
}

#[event]
pub struct RewardsDistributed {
    pub model: Pubkey,
    pub pipeline_run_id: u64,
    pub total_reward: u64,
    pub contributors: u16,
    pub skipped: u16,
}

#[event]
pub struct RewardLimitsUpdated {
    pub fallback_reward_rate: u64,
    pub min_improvement_bps: u64,
    pub max_reward: u64,
    pub cooldown_secs: i64,
}
