use std::env;
use std::io::ErrorKind;

use anyhow::Context;

use super::model::Config;

/// Load configuration from the YAML file named by the `CONFIG_FILE`
/// environment variable (default `config.yml`). A missing file falls back
/// to defaults; a file that exists but fails to parse is fatal.
pub fn load_config() -> anyhow::Result<Config> {
    let path = env::var("CONFIG_FILE").unwrap_or_else(|_| "config.yml".to_string());

    match std::fs::read_to_string(&path) {
        Ok(raw) => {
            serde_yaml::from_str(&raw).with_context(|| format!("invalid config in {path}"))
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::info!("no config file at {path}, using defaults");
            Ok(Config::default())
        }
        Err(err) => Err(err).with_context(|| format!("failed to read {path}")),
    }
}
