//! Recovering type names from runtime function signatures.
//!
//! When a lexical cast fails, the wrapper captures the signature of the
//! generic function instantiation that is currently executing and hands it
//! to this module. The parser pulls the target and source type arguments back
//! out of that text so the error can name them.
//!
//! # Conventions
//!
//! Two textual layouts are understood:
//!
//! - **Bracket**: the generic argument list follows the function name,
//!   `lexcast::cast::lexical_cast_with<i32, alloc::string::String>`.
//!   Target comes first. Verbose string type spellings are shortened.
//! - **Annotated**: the arguments are bound in a trailing annotation,
//!   `... [with Target = int; Source = std::string]`. Names are used as-is.
//!
//! Exactly one convention is active for a given caster. It is chosen once,
//! from configuration or [`SignatureConvention::native`], and never
//! re-detected per call.
//!
//! # Example
//!
//! ```rust
//! use lexcast::signature::{SignatureConvention, TypePair};
//!
//! let pair = SignatureConvention::Annotated
//!     .parse("T f(const S&) [with Target = int; Source = std::string]")
//!     .unwrap();
//! assert_eq!(pair, TypePair::new("std::string", "int"));
//! ```

pub mod annotated;
pub mod bracket;
pub mod capture;
pub mod normalize;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use capture::Signature;
pub use normalize::normalize_type_name;

/// Source and target type names recovered from a signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypePair {
    /// Type of the value being converted.
    pub source: String,
    /// Type the value was being converted into.
    pub target: String,
}

impl TypePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Why a signature could not be split into a [`TypePair`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// A required marker substring was not present.
    #[error("signature does not contain marker `{marker}`")]
    MissingMarker { marker: &'static str },
}

/// Textual layout of a captured signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureConvention {
    /// `name<Target, Source>` generic argument list.
    #[default]
    Bracket,
    /// `[with Target = ...; Source = ...]` annotation.
    Annotated,
}

impl SignatureConvention {
    /// Convention produced by the toolchain this crate was compiled with.
    ///
    /// rustc renders function item names with their generic argument list,
    /// so this is always [`SignatureConvention::Bracket`].
    pub const fn native() -> Self {
        SignatureConvention::Bracket
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            SignatureConvention::Bracket => "bracket",
            SignatureConvention::Annotated => "annotated",
        }
    }

    /// Parse `signature`, reporting which marker was missing on failure.
    pub fn try_parse(&self, signature: &str) -> Result<TypePair, SignatureError> {
        match self {
            SignatureConvention::Bracket => bracket::parse(signature),
            SignatureConvention::Annotated => annotated::parse(signature),
        }
    }

    /// Parse `signature`, returning `None` when it is not recognized.
    pub fn parse(&self, signature: &str) -> Option<TypePair> {
        self.try_parse(signature).ok()
    }
}

impl fmt::Display for SignatureConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bracket" => Ok(SignatureConvention::Bracket),
            "annotated" => Ok(SignatureConvention::Annotated),
            other => Err(format!(
                "unknown signature convention '{}', expected 'bracket' or 'annotated'",
                other
            )),
        }
    }
}

/// Seam between the conversion wrapper and the signature parser.
///
/// [`SignatureConvention`] is the production implementation. The wrapper
/// only calls [`SignatureParse::parse_signature`] on the failure path.
pub trait SignatureParse {
    /// Convention the wrapper must capture signatures in.
    fn convention(&self) -> SignatureConvention;

    fn parse_signature(&self, signature: &str) -> Result<TypePair, SignatureError>;
}

impl SignatureParse for SignatureConvention {
    fn convention(&self) -> SignatureConvention {
        *self
    }

    fn parse_signature(&self, signature: &str) -> Result<TypePair, SignatureError> {
        self.try_parse(signature)
    }
}

/// Parse `signature` with `convention`.
pub fn parse_signature(signature: &str, convention: SignatureConvention) -> Option<TypePair> {
    convention.parse(signature)
}
