use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Null address")]
    NullAddress,
    #[msg("Pool is paused")]
    Paused,
    #[msg("Deadline expired")]
    DeadlineExpired,
    #[msg("Sells are not enabled yet")]
    SellsNotEnabled,
    #[msg("Slippage exceeded")]
    SlippageExceeded,
    #[msg("Trade exceeds size cap")]
    TradeSizeExceeded,
    #[msg("Insufficient reserve")]
    InsufficientReserve,
    #[msg("Insufficient treasury balance")]
    InsufficientTreasury,
    #[msg("Token supply is empty")]
    SupplyEmpty,
    #[msg("Sell exceeds outstanding supply")]
    SellExceedsSupply,
    #[msg("Invalid reserve ratio")]
    InvalidReserveRatio,
    #[msg("Invalid fee bps")]
    InvalidFeeBps,
    #[msg("Invalid trade cap")]
    InvalidTradeCap,
    #[msg("Invalid flat price")]
    InvalidPrice,
    #[msg("Invalid graduation threshold")]
    InvalidThreshold,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Invalid program account")]
    InvalidProgramAccount,
    #[msg("Math overflow")]
    MathOverflow,
}
