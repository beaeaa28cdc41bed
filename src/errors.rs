//! Error types surfaced by lexcast.
//!
//! [`ConversionError`] is the only error a cast returns. Signature parsing
//! failures stay internal to the wrapper (see
//! [`crate::signature::SignatureError`]); configuration problems are
//! [`ConfigError`] and are normally logged and replaced by defaults.
//!
//! # Example
//!
//! ```rust
//! use lexcast::errors::ConversionError;
//! use lexcast::signature::TypePair;
//!
//! let err = ConversionError::bad_cast("aa", TypePair::new("String", "i32"));
//! assert_eq!(
//!     err.to_string(),
//!     "bad lexical cast: source value could not be interpreted as target type\n\
//!      Source arg:aa\nSource type:String\nTarget type:i32"
//! );
//! ```

use crate::signature::TypePair;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// First line of every [`ConversionError`] rendering.
pub const BAD_CAST_MESSAGE: &str =
    "bad lexical cast: source value could not be interpreted as target type";

/// A lexical cast could not produce a value of the target type.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionError {
    /// Conversion failed and the wrapper recovered both type names.
    #[error(
        "{}\nSource arg:{input}\nSource type:{source_type}\nTarget type:{target_type}",
        BAD_CAST_MESSAGE
    )]
    BadCast {
        /// Textual form of the value that was converted.
        input: String,
        source_type: String,
        target_type: String,
    },

    /// Conversion failed and the captured signature was not recognized.
    #[error("{}\nSource arg:{input}\nReason:{reason}", BAD_CAST_MESSAGE)]
    Undiagnosed {
        /// Textual form of the value that was converted.
        input: String,
        /// Message of the underlying parse failure.
        reason: String,
    },
}

impl ConversionError {
    pub fn bad_cast(input: impl Into<String>, types: TypePair) -> Self {
        Self::BadCast {
            input: input.into(),
            source_type: types.source,
            target_type: types.target,
        }
    }

    pub fn undiagnosed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Undiagnosed {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Textual form of the value that failed to convert.
    pub fn input(&self) -> &str {
        match self {
            Self::BadCast { input, .. } | Self::Undiagnosed { input, .. } => input,
        }
    }

    /// Source and target type names, when they were recovered.
    pub fn type_pair(&self) -> Option<TypePair> {
        match self {
            Self::BadCast {
                source_type,
                target_type,
                ..
            } => Some(TypePair::new(source_type.clone(), target_type.clone())),
            Self::Undiagnosed { .. } => None,
        }
    }

    pub fn is_diagnosed(&self) -> bool {
        matches!(self, Self::BadCast { .. })
    }
}

/// Configuration could not be loaded or applied.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Missing files are expected while searching for a config file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bad_cast_rendering() {
        let err = ConversionError::bad_cast("aa", TypePair::new("std::string", "int"));
        assert_eq!(
            err.to_string(),
            format!(
                "{}\nSource arg:aa\nSource type:std::string\nTarget type:int",
                BAD_CAST_MESSAGE
            )
        );
    }

    #[test]
    fn test_undiagnosed_rendering() {
        let err = ConversionError::undiagnosed("aa", "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            format!(
                "{}\nSource arg:aa\nReason:invalid digit found in string",
                BAD_CAST_MESSAGE
            )
        );
        assert!(!err.is_diagnosed());
        assert_eq!(err.type_pair(), None);
    }

    #[test]
    fn test_accessors() {
        let err = ConversionError::bad_cast("1.5", TypePair::new("str", "u8"));
        assert_eq!(err.input(), "1.5");
        assert_eq!(err.type_pair(), Some(TypePair::new("str", "u8")));
        assert!(err.is_diagnosed());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let err = ConversionError::bad_cast("aa", TypePair::new("String", "i32"));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "bad_cast");
        assert_eq!(json["input"], "aa");
        assert_eq!(json["source_type"], "String");
        assert_eq!(json["target_type"], "i32");
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::Read {
            path: PathBuf::from(".lexcast.toml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("failed to read config file .lexcast.toml"));
    }
}
