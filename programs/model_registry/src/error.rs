use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid name length")]
    InvalidNameLength,
    #[msg("Invalid metric length")]
    InvalidMetricLength,
    #[msg("Null address")]
    NullAddress,
    #[msg("Math overflow")]
    MathOverflow,
}
