use anchor_lang::prelude::*;

/// Per-(model, contributor) rate-limit and lifetime counters.
#[account]
#[derive(InitSpace)]
pub struct ContributorStats {
    pub model: Pubkey,
    pub contributor: Pubkey,
    pub last_submitted_at: i64,
    pub submission_count: u64,
    pub total_rewarded: u64,
    pub bump: u8,
}
