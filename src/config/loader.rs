use std::fs;
use std::path::{Path, PathBuf};

use super::core::LexcastConfig;
use crate::errors::ConfigError;

/// File name searched for in the current directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".lexcast.toml";

/// Environment variable overriding `signature.convention`
pub const ENV_CONVENTION: &str = "LEXCAST_CONVENTION";

/// Environment variable overriding `cast.on_unrecognized`
pub const ENV_ON_UNRECOGNIZED: &str = "LEXCAST_ON_UNRECOGNIZED";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<LexcastConfig, toml::de::Error> {
    toml::from_str::<LexcastConfig>(contents)
}

/// Read and parse a config file
pub fn load_config_from_path(path: &Path) -> Result<LexcastConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Try loading config from a specific path, logging anything but a missing file
fn try_load_config_from_path(config_path: &Path) -> Option<LexcastConfig> {
    match load_config_from_path(config_path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) if e.is_not_found() => None,
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.lexcast.toml`
pub fn find_config_from(start: PathBuf) -> Option<LexcastConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

/// Load configuration from `.lexcast.toml` if it exists
pub fn load_config() -> LexcastConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return LexcastConfig::default();
        }
    };

    find_config_from(current).unwrap_or_else(|| {
        log::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        LexcastConfig::default()
    })
}

/// Apply environment overrides read through `lookup`
///
/// Overrides are applied in order; the first invalid value aborts and leaves
/// later settings untouched.
pub fn apply_env_overrides<F>(config: &mut LexcastConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(ENV_CONVENTION) {
        config.signature.convention = value.parse().map_err(|reason| ConfigError::InvalidEnv {
            var: ENV_CONVENTION,
            value: value.clone(),
            reason,
        })?;
    }

    if let Some(value) = lookup(ENV_ON_UNRECOGNIZED) {
        config.cast.on_unrecognized = value.parse().map_err(|reason| ConfigError::InvalidEnv {
            var: ENV_ON_UNRECOGNIZED,
            value: value.clone(),
            reason,
        })?;
    }

    Ok(())
}

/// Apply overrides from the process environment, warning on invalid values
pub fn apply_process_env(config: &mut LexcastConfig) {
    if let Err(e) = apply_env_overrides(config, |var| std::env::var(var).ok()) {
        log::warn!("Ignoring environment override: {}", e);
    }
}
