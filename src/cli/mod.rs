//! CLI module for the lexcast demo binary
//!
//! - Argument parsing (`args`)
//! - Logging, configuration and conversion dispatch (`setup`)

pub mod args;
pub mod setup;

// Re-export commonly used types for convenience
pub use args::{Cli, ConventionArg, ErrorFormat, TargetType};
pub use setup::{
    apply_cli_overrides, convert_input, init_logging, log_level_for, render_error, resolve_config,
};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
