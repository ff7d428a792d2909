use anchor_lang::prelude::*;

use crate::{
    constants::{METRIC_LEN, NAME_LEN},
    error::ErrorCode,
    state::RegistryConfig,
};

pub fn require_governor(authority: &Signer<'_>, config: &Account<RegistryConfig>) -> Result<()> {
    require_keys_eq!(authority.key(), config.governor, ErrorCode::Unauthorized);
    Ok(())
}

pub fn to_fixed_name(name: &str) -> Result<[u8; NAME_LEN]> {
    let bytes = name.as_bytes();
    require!(
        !bytes.is_empty() && bytes.len() <= NAME_LEN,
        ErrorCode::InvalidNameLength
    );

    let mut out = [0u8; NAME_LEN];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}

pub fn to_fixed_metric(metric: &str) -> Result<[u8; METRIC_LEN]> {
    let bytes = metric.as_bytes();
    require!(
        !bytes.is_empty() && bytes.len() <= METRIC_LEN,
        ErrorCode::InvalidMetricLength
    );

    let mut out = [0u8; METRIC_LEN];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_name_pads_with_zeros() {
        let name = to_fixed_name("resnet-ft").unwrap();
        assert_eq!(&name[..9], b"resnet-ft");
        assert!(name[9..].iter().all(|b| *b == 0));
    }

    #[test]
    fn fixed_name_rejects_empty_and_oversized() {
        assert!(to_fixed_name("").is_err());
        assert!(to_fixed_name(&"x".repeat(NAME_LEN + 1)).is_err());
    }

    #[test]
    fn fixed_metric_rejects_oversized() {
        assert!(to_fixed_metric("accuracy").is_ok());
        assert!(to_fixed_metric(&"m".repeat(METRIC_LEN + 1)).is_err());
    }
}
