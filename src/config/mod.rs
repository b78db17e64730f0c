pub mod traits;
pub mod evolution;
pub mod economics;
pub mod inputs;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use economics::EconomicAssumptions;
pub use inputs::InputsConfig;
