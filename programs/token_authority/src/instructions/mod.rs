pub mod add_issuer;
pub mod batch_mint;
pub mod burn_tokens;
pub mod mint_tokens;
pub mod register_token;
pub mod remove_issuer;

pub use add_issuer::*;
pub use batch_mint::*;
pub use burn_tokens::*;
pub use mint_tokens::*;
pub use register_token::*;
pub use remove_issuer::*;
