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

declare_id!("7bf1dr8svEN4NZ9ksM5GewGUWgkqUQ9Fhy9adQHFZC3w");

#[program]
pub mod token_authority {
    use super::*;

    pub fn register_token(ctx: Context<RegisterToken>, pool: Pubkey) -> Result<()> {
        instructions::register_token::handler(ctx, pool)
    }

    pub fn add_issuer(ctx: Context<AddIssuer>, issuer: Pubkey) -> Result<()> {
        instructions::add_issuer::handler(ctx, issuer)
    }

    pub fn remove_issuer(ctx: Context<RemoveIssuer>, issuer: Pubkey) -> Result<()> {
        instructions::remove_issuer::handler(ctx, issuer)
    }

    pub fn mint_tokens(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
        instructions::mint_tokens::handler(ctx, amount)
    }

    pub fn burn_tokens(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        instructions::burn_tokens::handler(ctx, amount)
    }

    pub fn batch_mint<'info>(
        ctx: Context<'_, '_, 'info, 'info, BatchMint<'info>>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::batch_mint::handler(ctx, amounts)
    }
}
