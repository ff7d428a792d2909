use anchor_lang::prelude::*;

use crate::{
    constants::{
        MAX_PROTOCOL_FEE_BPS, MAX_RESERVE_RATIO_PPM, MAX_TRADE_CAP_BPS, MAX_TRADE_FEE_BPS,
        MIN_RESERVE_RATIO_PPM,
    },
    error::ErrorCode,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace)]
pub struct PoolParams {
    pub reserve_ratio_ppm: u32,
    pub trade_fee_bps: u16,
    pub protocol_fee_bps: u16,
    /// Zero selects DEFAULT_MAX_TRADE_BPS.
    pub max_trade_bps: u16,
    pub flat_price: u64,
    pub graduation_threshold: u64,
    pub sell_enabled_at: i64,
}

impl PoolParams {
    pub fn validate(&self) -> Result<()> {
        validate_curve_params(
            self.reserve_ratio_ppm,
            self.trade_fee_bps,
            self.protocol_fee_bps,
        )?;
        if self.max_trade_bps != 0 {
            validate_trade_cap(self.max_trade_bps)?;
        }
        require!(self.flat_price > 0, ErrorCode::InvalidPrice);
        require!(self.graduation_threshold > 0, ErrorCode::InvalidThreshold);
        Ok(())
    }
}

/// Each bound is checked independently so a caller learns exactly which
/// parameter was out of range.
pub fn validate_curve_params(
    reserve_ratio_ppm: u32,
    trade_fee_bps: u16,
    protocol_fee_bps: u16,
) -> Result<()> {
    require!(
        (MIN_RESERVE_RATIO_PPM..=MAX_RESERVE_RATIO_PPM).contains(&reserve_ratio_ppm),
        ErrorCode::InvalidReserveRatio
    );
    require!(trade_fee_bps <= MAX_TRADE_FEE_BPS, ErrorCode::InvalidFeeBps);
    require!(
        protocol_fee_bps <= MAX_PROTOCOL_FEE_BPS,
        ErrorCode::InvalidFeeBps
    );
    Ok(())
}

pub fn validate_trade_cap(max_trade_bps: u16) -> Result<()> {
    require!(
        max_trade_bps >= 1 && max_trade_bps <= MAX_TRADE_CAP_BPS,
        ErrorCode::InvalidTradeCap
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> PoolParams {
        PoolParams {
            reserve_ratio_ppm: 100_000,
            trade_fee_bps: 100,
            protocol_fee_bps: 2_500,
            max_trade_bps: 2_000,
            flat_price: 10_000,
            graduation_threshold: 25_000_000_000,
            sell_enabled_at: 0,
        }
    }

    #[test]
    fn accepts_reasonable_params() {
        assert!(base_params().validate().is_ok());
    }

    #[test]
    fn rejects_each_bound_independently() {
        let mut p = base_params();
        p.reserve_ratio_ppm = 49_999;
        assert!(p.validate().is_err());

        let mut p = base_params();
        p.reserve_ratio_ppm = 500_001;
        assert!(p.validate().is_err());

        let mut p = base_params();
        p.trade_fee_bps = 1_001;
        assert!(p.validate().is_err());

        let mut p = base_params();
        p.protocol_fee_bps = 5_001;
        assert!(p.validate().is_err());

        let mut p = base_params();
        p.max_trade_bps = 5_001;
        assert!(p.validate().is_err());

        let mut p = base_params();
        p.flat_price = 0;
        assert!(p.validate().is_err());

        let mut p = base_params();
        p.graduation_threshold = 0;
        assert!(p.validate().is_err());
    }
}
