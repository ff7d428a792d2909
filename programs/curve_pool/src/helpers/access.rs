use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::Pool};

pub fn require_admin(signer: &Signer, pool: &Pool) -> Result<()> {
    require_keys_eq!(signer.key(), pool.admin, ErrorCode::Unauthorized);
    Ok(())
}
