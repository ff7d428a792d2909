use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub admin: Pubkey,
    /// External wallet that treasury withdrawals are paid to.
    pub treasury: Pubkey,
    pub token_mint: Pubkey,
    pub reserve_mint: Pubkey,
    pub reserve_vault: Pubkey,
    pub treasury_vault: Pubkey,
    pub token_authority_program: Pubkey,
    /// Pooled reserve backing the token. Disjoint from `treasury_balance`.
    pub reserve_balance: u64,
    /// Protocol fee accrual, withdrawable by the admin; never part of quotes.
    pub treasury_balance: u64,
    pub reserve_ratio_ppm: u32,
    pub trade_fee_bps: u16,
    /// Share of the trade fee routed to the treasury, in bps of the fee.
    pub protocol_fee_bps: u16,
    /// Per-trade cap, in bps of the current reserve, recomputed per call.
    pub max_trade_bps: u16,
    /// Reserve base units per PRICE_SCALE token base units.
    pub flat_price: u64,
    pub graduation_threshold: u64,
    /// Sells are rejected while `now < sell_enabled_at`, regardless of phase.
    pub sell_enabled_at: i64,
    /// Monotonic: set the first time the reserve exceeds the threshold,
    /// never cleared even if sells later drain the reserve back down.
    pub has_graduated: bool,
    pub paused: bool,
    pub created_at: i64,
    pub authority_bump: u8,
    pub bump: u8,
}
