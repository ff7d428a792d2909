use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use helpers::*;
pub use instructions::*;
pub use state::*;

declare_id!("BCDY2dbsqFpqeHn3E4zz4ngmL75qJnQ2QCPaE6QRPmfp");

#[program]
pub mod curve_pool {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>, params: PoolParams) -> Result<()> {
        instructions::initialize_pool::handler(ctx, params)
    }

    pub fn buy(
        ctx: Context<Buy>,
        amount_in: u64,
        min_tokens_out: u64,
        deadline: i64,
    ) -> Result<()> {
        instructions::buy::handler(ctx, amount_in, min_tokens_out, deadline)
    }

    pub fn sell(
        ctx: Context<Sell>,
        tokens_in: u64,
        min_reserve_out: u64,
        deadline: i64,
    ) -> Result<()> {
        instructions::sell::handler(ctx, tokens_in, min_reserve_out, deadline)
    }

    pub fn deposit_fees(ctx: Context<DepositFees>, amount: u64) -> Result<()> {
        instructions::deposit_fees::handler(ctx, amount)
    }

    pub fn withdraw_treasury(ctx: Context<WithdrawTreasury>, amount: u64) -> Result<()> {
        instructions::withdraw_treasury::handler(ctx, amount)
    }

    pub fn set_parameters(
        ctx: Context<SetParameters>,
        reserve_ratio_ppm: u32,
        trade_fee_bps: u16,
        protocol_fee_bps: u16,
    ) -> Result<()> {
        instructions::set_parameters::handler(ctx, reserve_ratio_ppm, trade_fee_bps, protocol_fee_bps)
    }

    pub fn set_max_trade_bps(ctx: Context<SetMaxTradeBps>, max_trade_bps: u16) -> Result<()> {
        instructions::set_max_trade_bps::handler(ctx, max_trade_bps)
    }

    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::set_paused::handler(ctx, paused)
    }
}
