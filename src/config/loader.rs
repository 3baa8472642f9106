//! YAML config loading

use std::fs;
use std::io;
use std::path::Path;

use super::schema::ModerarConfig;
use crate::error::{Error, Result};

impl ModerarConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))
    }
}

/// Load and validate a YAML config file
///
/// Read failures surface as [`Error::Io`] with the path in the message.
///
/// # Example
///
/// ```no_run
/// use moderar::config::load_config;
///
/// let config = load_config("moderar.yaml")?;
/// let cache = config.targets.build_cache();
/// # Ok::<(), moderar::Error>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ModerarConfig> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to read config file {}: {e}", path.display()),
        )
    })?;
    let config = ModerarConfig::from_yaml_str(&yaml)?;
    tracing::info!(
        path = %path.display(),
        corruption_prob = config.tokenizer.policy.corruption_prob(),
        num_bins = config.targets.num_bins,
        n_splits = config.folds.n_splits,
        ensemble = config.ensemble.name(),
        "loaded config"
    );
    Ok(config)
}
