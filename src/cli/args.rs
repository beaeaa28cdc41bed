use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::signature::SignatureConvention;

#[derive(Parser, Debug)]
#[command(name = "lexcast")]
#[command(about = "Lexical cast demo reporting source and target types on failure", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Text to convert
    #[arg(default_value = "aa")]
    pub input: String,

    /// Target type to convert into
    #[arg(short, long, value_enum, default_value = "int")]
    pub target: TargetType,

    /// Signature convention (overrides config file and environment)
    #[arg(long, value_enum)]
    pub convention: Option<ConventionArg>,

    /// Return the target's default value when a failed cast cannot be diagnosed
    #[arg(long = "legacy-default")]
    pub legacy_default: bool,

    /// Error output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ErrorFormat,

    /// Configuration file (defaults to the nearest .lexcast.toml)
    #[arg(short, long, env = "LEXCAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

/// Target types the demo can convert into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TargetType {
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 32-bit unsigned integer
    Unsigned,
    /// 64-bit float
    Float,
    Bool,
    Char,
    String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConventionArg {
    Bracket,
    Annotated,
}

impl From<ConventionArg> for SignatureConvention {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::Bracket => SignatureConvention::Bracket,
            ConventionArg::Annotated => SignatureConvention::Annotated,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ErrorFormat {
    Text,
    Json,
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
