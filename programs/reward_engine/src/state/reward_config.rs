use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct RewardConfig {
    pub governor: Pubkey,
    /// Only this key may submit evaluations (the verification pipeline).
    pub evaluator: Pubkey,
    pub model_registry_program: Pubkey,
    pub token_authority_program: Pubkey,
    /// Used when a model entry carries no per-model rate.
    pub fallback_reward_rate: u64,
    /// Aggregate scores below this floor earn nothing.
    pub min_improvement_bps: u64,
    /// Hard clamp on any single computed reward; clamping is not an error.
    pub max_reward: u64,
    pub cooldown_secs: i64,
    pub authority_bump: u8,
    pub bump: u8,
}
