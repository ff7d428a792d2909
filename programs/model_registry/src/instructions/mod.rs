pub mod initialize_registry;
pub mod register_model;
pub mod set_governor;
pub mod set_reward_rate;

pub use initialize_registry::*;
pub use register_model::*;
pub use set_governor::*;
pub use set_reward_rate::*;
