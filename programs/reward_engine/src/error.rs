use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Null address")]
    NullAddress,
    #[msg("Metric exceeds 10000 bps")]
    MetricOutOfRange,
    #[msg("Weight exceeds 10000 bps")]
    InvalidWeight,
    #[msg("Weights must sum to exactly 10000 bps")]
    WeightSumMismatch,
    #[msg("Contributed samples exceed total samples")]
    InvalidSampleCounts,
    #[msg("Array length mismatch")]
    LengthMismatch,
    #[msg("Empty contributor list")]
    EmptyBatch,
    #[msg("Contributor list exceeds batch ceiling")]
    BatchTooLarge,
    #[msg("Resubmission within the cooldown window")]
    CooldownActive,
    #[msg("Invalid cooldown")]
    InvalidCooldown,
    #[msg("Model entry does not match pool token")]
    ModelMismatch,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Math overflow")]
    MathOverflow,
}
