use crate::conf::error::ConfigError;
use crate::conf::types::FragstatConfig;
use std::fs;
use std::path::Path;

/// Reads, parses and validates a TOML config file.
///
/// Every key is optional; a missing section falls back to its defaults.
pub fn load_config(path: &Path) -> Result<FragstatConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config(path, &contents)
}

pub fn parse_config(path: &Path, contents: &str) -> Result<FragstatConfig, ConfigError> {
    let cfg: FragstatConfig = toml::from_str(contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    cfg.validate()?;
    Ok(cfg)
}

impl FragstatConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.queue_capacity == 0 {
            return Err(ConfigError::InvalidQueueCapacity {
                capacity: self.pipeline.queue_capacity,
            });
        }
        Ok(())
    }
}
