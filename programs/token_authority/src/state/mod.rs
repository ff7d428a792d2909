pub mod issuer_set;

pub use issuer_set::*;
