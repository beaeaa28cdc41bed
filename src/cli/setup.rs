//! Setup and run helpers for the demo binary
//!
//! Logging and configuration are resolved once at startup; the conversion
//! itself is a thin dispatch from [`TargetType`] to a concrete Rust type.

use std::fmt::Display;
use std::str::FromStr;

use super::args::{Cli, ErrorFormat, TargetType};
use crate::cast::{LexicalCaster, UnrecognizedSignaturePolicy};
use crate::config::{self, LexcastConfig};
use crate::errors::ConversionError;

/// Map `-v` occurrences to a log level filter
pub fn log_level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Initialize env_logger. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
    let default_level = log_level_for(verbosity).to_string().to_lowercase();
    let env = env_logger::Env::default().default_filter_or(default_level);

    // try_init: a logger may already be installed when embedded in tests
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Resolve configuration: file, then environment, then CLI flags
pub fn resolve_config(cli: &Cli) -> LexcastConfig {
    let mut resolved = match &cli.config {
        Some(path) => config::load_config_from_path(path).unwrap_or_else(|e| {
            log::warn!("{}. Using defaults.", e);
            LexcastConfig::default()
        }),
        None => config::load_config(),
    };

    config::apply_process_env(&mut resolved);
    apply_cli_overrides(&mut resolved, cli);
    log::debug!("Resolved configuration: {:?}", resolved);
    resolved
}

/// Pure function applying command-line flags on top of `config`
pub fn apply_cli_overrides(config: &mut LexcastConfig, cli: &Cli) {
    if let Some(convention) = cli.convention {
        config.signature.convention = convention.into();
    }
    if cli.legacy_default {
        config.cast.on_unrecognized = UnrecognizedSignaturePolicy::LegacyDefault;
    }
}

/// Convert `input` to `target`, returning the converted value as text
// `&String` keeps the captured source type `String` rather than `str`
#[allow(clippy::ptr_arg)]
pub fn convert_input(
    caster: &LexicalCaster,
    target: TargetType,
    input: &String,
) -> Result<String, ConversionError> {
    match target {
        TargetType::Int => convert_to::<i32>(caster, input),
        TargetType::Long => convert_to::<i64>(caster, input),
        TargetType::Unsigned => convert_to::<u32>(caster, input),
        TargetType::Float => convert_to::<f64>(caster, input),
        TargetType::Bool => convert_to::<bool>(caster, input),
        TargetType::Char => convert_to::<char>(caster, input),
        TargetType::String => convert_to::<String>(caster, input),
    }
}

#[allow(clippy::ptr_arg)]
fn convert_to<T>(caster: &LexicalCaster, input: &String) -> Result<String, ConversionError>
where
    T: FromStr + Default + Display,
    T::Err: Display,
{
    caster
        .cast_or_default::<T, String>(input)
        .map(|value| value.to_string())
}

/// Render a conversion error for the error stream
pub fn render_error(err: &ConversionError, format: ErrorFormat) -> String {
    match format {
        ErrorFormat::Text => err.to_string(),
        ErrorFormat::Json => serde_json::to_string_pretty(err).unwrap_or_else(|e| {
            log::warn!("Failed to serialize error as JSON: {}", e);
            err.to_string()
        }),
    }
}
