use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOM, error::ErrorCode};

/// Five named evaluation metrics, each a percentage in bps (0..=10,000).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, InitSpace)]
pub struct MetricSet {
    pub accuracy: u16,
    pub precision: u16,
    pub recall: u16,
    pub f1: u16,
    pub auc: u16,
}

impl MetricSet {
    pub const COUNT: u64 = 5;

    pub fn validate(&self) -> Result<()> {
        for value in self.values() {
            require!(value as u64 <= BPS_DENOM, ErrorCode::MetricOutOfRange);
        }
        Ok(())
    }

    pub fn values(&self) -> [u16; 5] {
        [self.accuracy, self.precision, self.recall, self.f1, self.auc]
    }
}
