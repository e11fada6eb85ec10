use crate::prelude::*;
use mirprimer_core::PrimerConfig;
use std::path::Path;

/// Load primer settings from an optional TOML file, then apply CLI overrides.
///
/// Without a file the built-in defaults are used. The merged result is
/// validated before it is returned.
pub async fn load_config(global: &crate::Global) -> Result<PrimerConfig> {
    let config = match &global.config {
        Some(path) => read_config_file(path).await?,
        None => {
            log::debug!("No config file given, using defaults");
            PrimerConfig::default()
        }
    };

    let config = config.with_overrides(global.prefix.clone(), global.suffix.clone());

    config
        .validate()
        .wrap_err("Invalid primer settings after applying overrides")?;

    Ok(config)
}

async fn read_config_file(path: &Path) -> Result<PrimerConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    log::debug!("Loaded config from {}", path.display());

    let config = PrimerConfig::from_toml_str(&content).map_err(|e| Error::Config {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(config)
}
