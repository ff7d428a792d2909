pub mod access;
pub mod math;
pub mod pricing;
pub mod transfer;

pub use access::*;
pub use math::*;
pub use pricing::*;
pub use transfer::*;
