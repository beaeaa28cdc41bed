//! Configuration for lexcast.
//!
//! Settings come from, in increasing precedence: built-in defaults, a
//! `.lexcast.toml` file (current directory or up to ten ancestors), the
//! `LEXCAST_CONVENTION` / `LEXCAST_ON_UNRECOGNIZED` environment variables,
//! and finally command-line flags applied by the binary.

mod core;
mod loader;

pub use self::core::{CastConfig, LexcastConfig, SignatureConfig};
pub use self::loader::{
    apply_env_overrides, apply_process_env, directory_ancestors, find_config_from, load_config,
    load_config_from_path, parse_config, CONFIG_FILE_NAME, ENV_CONVENTION, ENV_ON_UNRECOGNIZED,
};
