pub mod access;
pub mod score;

pub use access::*;
pub use score::*;
