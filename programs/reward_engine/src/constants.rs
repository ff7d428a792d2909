pub const BPS_DENOM: u64 = 10_000;

/// Aggregate reward formula divisor: score is in bps, converted to
/// percentage points (/100), and the weight is a bps share (/10,000).
pub const REWARD_DENOM: u128 = 1_000_000;

pub const MAX_BATCH_CONTRIBUTORS: usize = 100;
