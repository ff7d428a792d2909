use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::RewardConfig};

pub fn require_governor(signer: &Signer, config: &RewardConfig) -> Result<()> {
    require_keys_eq!(signer.key(), config.governor, ErrorCode::Unauthorized);
    Ok(())
}

pub fn require_evaluator(signer: &Signer, config: &RewardConfig) -> Result<()> {
    require_keys_eq!(signer.key(), config.evaluator, ErrorCode::Unauthorized);
    Ok(())
}
