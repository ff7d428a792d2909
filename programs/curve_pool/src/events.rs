use anchor_lang::prelude::*;

#[event]
pub struct TokensPurchased {
    pub pool: Pubkey,
    pub buyer: Pubkey,
    pub recipient: Pubkey,
    pub amount_in: u64,
    pub fee: u64,
    pub tokens_out: u64,
}

#[event]
pub struct TokensSold {
    pub pool: Pubkey,
    pub seller: Pubkey,
    pub recipient: Pubkey,
    pub tokens_in: u64,
    pub reserve_out: u64,
    pub fee: u64,
    pub net_payout: u64,
}

/// Fired exactly once per pool, the first time the reserve strictly
/// exceeds the graduation threshold.
#[event]
pub struct PhaseTransition {
    pub pool: Pubkey,
    pub reserve: u64,
    pub timestamp: i64,
}

#[event]
pub struct ParametersUpdated {
    pub pool: Pubkey,
    pub reserve_ratio_ppm: u32,
    pub trade_fee_bps: u16,
    pub protocol_fee_bps: u16,
}

#[event]
pub struct MaxTradeBpsUpdated {
    pub pool: Pubkey,
    pub max_trade_bps: u16,
}

#[event]
pub struct FeesDeposited {
    pub pool: Pubkey,
    pub amount: u64,
    pub reserve: u64,
}

#[event]
pub struct TreasuryWithdrawn {
    pub pool: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PauseSet {
    pub pool: Pubkey,
    pub paused: bool,
}
