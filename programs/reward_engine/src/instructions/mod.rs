pub mod create_contributor_stats;
pub mod initialize_rewards;
pub mod submit_evaluation;
pub mod submit_evaluation_batch;
pub mod update_reward_limits;

pub use create_contributor_stats::*;
pub use initialize_rewards::*;
pub use submit_evaluation::*;
pub use submit_evaluation_batch::*;
pub use update_reward_limits::*;
