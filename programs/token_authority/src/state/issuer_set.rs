use anchor_lang::prelude::*;

use crate::constants::MAX_ISSUERS;

/// Per-token capability set: the callers allowed to mint and burn through
/// the gateway. The SPL mint authority itself is held by the program's
/// `mint-authority` PDA.
#[account]
#[derive(InitSpace)]
pub struct IssuerSet {
    pub admin: Pubkey,
    pub pool: Pubkey,
    pub token_mint: Pubkey,
    #[max_len(MAX_ISSUERS)]
    pub issuers: Vec<Pubkey>,
    pub authority_bump: u8,
    pub bump: u8,
}

impl IssuerSet {
    pub fn is_issuer(&self, key: &Pubkey) -> bool {
        self.issuers.contains(key)
    }
}
