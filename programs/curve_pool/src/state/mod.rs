pub mod pool;
pub mod pool_params;

pub use pool::*;
pub use pool_params::*;
