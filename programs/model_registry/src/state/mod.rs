pub mod model_entry;
pub mod registry_config;

pub use model_entry::*;
pub use registry_config::*;
