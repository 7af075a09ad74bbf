pub mod evolution;
pub mod manager;
pub mod run;
pub mod traits;

pub use evolution::EvolutionConfig;
pub use manager::{AppConfig, ConfigManager};
pub use run::RunConfig;
pub use traits::ConfigSection;
