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

declare_id!("FFK2rLtsh1ZxT8rKYWjaBSyWNi5tE36FBJTVMJxkebLs");

#[program]
pub mod model_registry {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>, governor: Pubkey) -> Result<()> {
        instructions::initialize_registry::handler(ctx, governor)
    }

    pub fn register_model(
        ctx: Context<RegisterModel>,
        model_id: u64,
        name: String,
        primary_metric: String,
        token_mint: Pubkey,
        pool: Pubkey,
    ) -> Result<()> {
        instructions::register_model::handler(ctx, model_id, name, primary_metric, token_mint, pool)
    }

    pub fn set_reward_rate(ctx: Context<SetRewardRate>, reward_rate: u64) -> Result<()> {
        instructions::set_reward_rate::handler(ctx, reward_rate)
    }

    pub fn set_governor(ctx: Context<SetGovernor>, new_governor: Pubkey) -> Result<()> {
        instructions::set_governor::handler(ctx, new_governor)
    }
}
