use anchor_lang::prelude::*;

#[event]
pub struct ModelRegistered {
    pub model_id: u64,
    pub token_mint: Pubkey,
    pub pool: Pubkey,
}

#[event]
pub struct RewardRateUpdated {
    pub model_id: u64,
    pub reward_rate: u64,
}

#[event]
pub struct GovernorChanged {
    pub previous: Pubkey,
    pub current: Pubkey,
}
