use anchor_lang::prelude::*;

#[event]
pub struct TokensIssued {
    pub token_mint: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TokensBurned {
    pub token_mint: Pubkey,
    pub holder: Pubkey,
    pub amount: u64,
}

/// A zero-amount batch entry was skipped instead of reverting the batch.
#[event]
pub struct MintSkipped {
    pub token_mint: Pubkey,
    pub recipient: Pubkey,
    pub index: u32,
}

#[event]
pub struct BatchMinted {
    pub token_mint: Pubkey,
    pub total_amount: u64,
    pub minted_count: u32,
    pub skipped_count: u32,
}

#[event]
pub struct IssuerAdded {
    pub token_mint: Pubkey,
    pub issuer: Pubkey,
}

#[event]
pub struct IssuerRemoved {
    pub token_mint: Pubkey,
    pub issuer: Pubkey,
}
