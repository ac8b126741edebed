pub mod config;
pub mod extract;
pub mod text;

use std::path::{Path, PathBuf};

use labelscan_core::LabelscanConfig;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("labelscan")
        .join("config.json")
}

/// Load the explicit config file, else the default one if present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<LabelscanConfig> {
    if let Some(path) = config_path {
        return Ok(LabelscanConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(LabelscanConfig::from_file(&default_path)?)
    } else {
        Ok(LabelscanConfig::default())
    }
}
