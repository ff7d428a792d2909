use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::IssuerSet};

pub fn require_admin(admin: &Signer<'_>, issuer_set: &Account<IssuerSet>) -> Result<()> {
    require_keys_eq!(admin.key(), issuer_set.admin, ErrorCode::Unauthorized);
    Ok(())
}

pub fn assert_issuer_authorized(
    issuer: &Signer<'_>,
    issuer_set: &Account<IssuerSet>,
) -> Result<()> {
    require!(
        issuer_set.is_issuer(&issuer.key()),
        ErrorCode::UnauthorizedIssuer
    );
    Ok(())
}
