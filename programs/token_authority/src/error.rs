use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Caller is not an authorized issuer")]
    UnauthorizedIssuer,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Null address")]
    NullAddress,
    #[msg("Invalid mint authority")]
    InvalidMintAuthority,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Recipient and amount lengths differ")]
    LengthMismatch,
    #[msg("Batch is empty")]
    EmptyBatch,
    #[msg("Batch exceeds the size ceiling")]
    BatchTooLarge,
    #[msg("Issuer set is full")]
    IssuerSetFull,
    #[msg("Issuer already exists")]
    IssuerAlreadyExists,
    #[msg("Issuer not found")]
    IssuerNotFound,
    #[msg("Math overflow")]
    MathOverflow,
}
