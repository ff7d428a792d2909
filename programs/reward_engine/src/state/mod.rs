pub mod contributor_stats;
pub mod evaluation_record;
pub mod metric_set;
pub mod reward_config;

pub use contributor_stats::*;
pub use evaluation_record::*;
pub use metric_set::*;
pub use reward_config::*;
