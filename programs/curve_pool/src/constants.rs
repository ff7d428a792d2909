pub const BPS_DENOM: u64 = 10_000;
pub const PPM_DENOM: u64 = 1_000_000;

/// Flat price is quoted in reserve base units per `PRICE_SCALE` token base units.
pub const PRICE_SCALE: u64 = 1_000_000;

pub const MIN_RESERVE_RATIO_PPM: u32 = 50_000;
pub const MAX_RESERVE_RATIO_PPM: u32 = 500_000;
pub const MAX_TRADE_FEE_BPS: u16 = 1_000;
pub const MAX_PROTOCOL_FEE_BPS: u16 = 5_000;
pub const MAX_TRADE_CAP_BPS: u16 = 5_000;
pub const DEFAULT_MAX_TRADE_BPS: u16 = 2_000;
