use serde::{Deserialize, Serialize};

use crate::cast::UnrecognizedSignaturePolicy;
use crate::signature::SignatureConvention;

/// Root configuration structure for lexcast
///
/// ```toml
/// [signature]
/// convention = "annotated"
///
/// [cast]
/// on_unrecognized = "legacy_default"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LexcastConfig {
    /// Signature capture and parsing
    #[serde(default)]
    pub signature: SignatureConfig,

    /// Conversion wrapper behavior
    #[serde(default)]
    pub cast: CastConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignatureConfig {
    /// Signature convention (default: the toolchain's native convention)
    #[serde(default = "SignatureConvention::native")]
    pub convention: SignatureConvention,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            convention: SignatureConvention::native(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CastConfig {
    /// What to do when a failed cast's signature is not recognized (default: raise)
    #[serde(default)]
    pub on_unrecognized: UnrecognizedSignaturePolicy,
}
