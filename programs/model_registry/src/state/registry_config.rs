use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct RegistryConfig {
    pub governor: Pubkey,
    pub model_count: u64,
    pub created_at: i64,
    pub last_updated_at: i64,
    pub bump: u8,
}
