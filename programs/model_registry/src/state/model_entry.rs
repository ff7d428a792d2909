use anchor_lang::prelude::*;

use crate::constants::{METRIC_LEN, NAME_LEN};

/// Directory row for one model: token/pool lookups plus the
/// governance-tunable reward rate read by the reward engine at call time.
#[account]
#[derive(InitSpace)]
pub struct ModelEntry {
    pub model_id: u64,
    pub name: [u8; NAME_LEN],
    pub primary_metric: [u8; METRIC_LEN],
    pub token_mint: Pubkey,
    pub pool: Pubkey,
    /// Tokens minted per percentage point of aggregate improvement.
    /// Zero means "use the reward engine's fallback rate".
    pub reward_rate: u64,
    pub registered_at: i64,
    pub bump: u8,
}

impl ModelEntry {
    pub fn has_pool(&self) -> bool {
        self.pool != Pubkey::default()
    }
}
