pub mod buy;
pub mod deposit_fees;
pub mod initialize_pool;
pub mod sell;
pub mod set_max_trade_bps;
pub mod set_parameters;
pub mod set_paused;
pub mod withdraw_treasury;

pub use buy::*;
pub use deposit_fees::*;
pub use initialize_pool::*;
pub use sell::*;
pub use set_max_trade_bps::*;
pub use set_parameters::*;
pub use set_paused::*;
pub use withdraw_treasury::*;
