// Export modules for library usage
pub mod cast;
pub mod cli;
pub mod config;
pub mod errors;
pub mod signature;

// Re-export commonly used types
pub use crate::cast::{lexical_cast, lexical_cast_with, LexicalCaster, UnrecognizedSignaturePolicy};
pub use crate::config::LexcastConfig;
pub use crate::errors::{ConfigError, ConversionError};
pub use crate::signature::{
    normalize_type_name, parse_signature, Signature, SignatureConvention, SignatureError,
    SignatureParse, TypePair,
};
