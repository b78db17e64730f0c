use super::{
    economics::EconomicAssumptions,
    evolution::EvolutionConfig,
    inputs::InputsConfig,
    traits::ConfigSection,
};
use crate::error::OptimizerError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `UBIOPT__EVOLUTION__SEED=7`
pub const ENV_PREFIX: &str = "UBIOPT";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub economics: EconomicAssumptions,
    pub inputs: InputsConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), OptimizerError> {
        self.evolution.validate()?;
        self.economics.validate()?;
        self.inputs.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML or JSON file, layering `UBIOPT__*` environment overrides on top
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), OptimizerError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        *self.write_lock()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), OptimizerError> {
        let toml_str = {
            let config = self.read_lock()?;
            toml::to_string_pretty(&*config)?
        };

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> Result<AppConfig, OptimizerError> {
        Ok(self.read_lock()?.clone())
    }

    pub fn update<F>(&self, f: F) -> Result<(), OptimizerError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get()?;
        f(&mut candidate);
        candidate.validate()?;
        *self.write_lock()? = candidate;
        Ok(())
    }

    fn read_lock(&self) -> Result<std::sync::RwLockReadGuard<'_, AppConfig>, OptimizerError> {
        self.config
            .read()
            .map_err(|_| OptimizerError::Configuration("Config lock poisoned".to_string()))
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, AppConfig>, OptimizerError> {
        self.config
            .write()
            .map_err(|_| OptimizerError::Configuration("Config lock poisoned".to_string()))
    }
}
