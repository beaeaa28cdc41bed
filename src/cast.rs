//! Lexical cast with type-annotated failures.
//!
//! A lexical cast renders the source value with [`Display`] and parses the
//! text with [`FromStr`]. When parsing fails, the wrapper captures its own
//! signature, recovers the source and target type names from it, and
//! returns them inside a [`ConversionError`].
//!
//! The success path never touches the signature parser.
//!
//! # Example
//!
//! ```rust
//! use lexcast::cast::lexical_cast;
//! use lexcast::errors::ConversionError;
//!
//! let value: i32 = lexical_cast(&String::from("123")).unwrap();
//! assert_eq!(value, 123);
//!
//! let err = lexical_cast::<i32, String>(&String::from("aa")).unwrap_err();
//! match err {
//!     ConversionError::BadCast { input, source_type, target_type } => {
//!         assert_eq!(input, "aa");
//!         assert_eq!(source_type, "String");
//!         assert_eq!(target_type, "i32");
//!     }
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```

use crate::config::LexcastConfig;
use crate::errors::ConversionError;
use crate::signature::{Signature, SignatureConvention, SignatureParse};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// What [`LexicalCaster::cast_or_default`] does when a conversion fails and
/// the captured signature cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedSignaturePolicy {
    /// Return [`ConversionError::Undiagnosed`].
    #[default]
    Raise,
    /// Swallow the failure and return `T::default()`.
    LegacyDefault,
}

impl FromStr for UnrecognizedSignaturePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "raise" => Ok(Self::Raise),
            "legacy_default" => Ok(Self::LegacyDefault),
            other => Err(format!(
                "unknown policy '{}', expected 'raise' or 'legacy_default'",
                other
            )),
        }
    }
}

/// Lexical cast using the toolchain's native signature convention.
pub fn lexical_cast<T, S>(arg: &S) -> Result<T, ConversionError>
where
    T: FromStr,
    T::Err: Display,
    S: Display + ?Sized,
{
    lexical_cast_with(arg, &SignatureConvention::native())
}

/// Lexical cast that diagnoses failures with `parser`.
///
/// This is the function whose signature is captured on failure, so its name
/// is the bracket convention's marker.
pub fn lexical_cast_with<T, S>(
    arg: &S,
    parser: &dyn SignatureParse,
) -> Result<T, ConversionError>
where
    T: FromStr,
    T::Err: Display,
    S: Display + ?Sized,
{
    let input = arg.to_string();
    match input.parse::<T>() {
        Ok(value) => Ok(value),
        Err(err) => {
            let signature = Signature::capture::<T, S, _>(
                &lexical_cast_with::<T, S>,
                parser.convention(),
            );
            Err(diagnose(input, &signature, parser, err.to_string()))
        }
    }
}

fn diagnose(
    input: String,
    signature: &Signature,
    parser: &dyn SignatureParse,
    reason: String,
) -> ConversionError {
    log::debug!(
        "Lexical cast of '{}' failed ({}), parsing {} signature '{}'",
        input,
        reason,
        parser.convention(),
        signature
    );

    match parser.parse_signature(signature.as_str()) {
        Ok(types) => ConversionError::bad_cast(input, types),
        Err(e) => {
            log::debug!("Signature not recognized: {}", e);
            ConversionError::undiagnosed(input, reason)
        }
    }
}

/// Lexical cast bound to one signature parser and failure policy.
///
/// The parser is fixed at construction, so every cast made through one
/// caster uses the same convention.
#[derive(Debug, Clone)]
pub struct LexicalCaster<P = SignatureConvention> {
    parser: P,
    policy: UnrecognizedSignaturePolicy,
}

impl LexicalCaster {
    /// Caster for the native convention that raises on unrecognized
    /// signatures.
    pub fn native() -> Self {
        Self::with_parser(SignatureConvention::native())
    }

    pub fn from_config(config: &LexcastConfig) -> Self {
        Self::with_parser(config.signature.convention).with_policy(config.cast.on_unrecognized)
    }
}

impl Default for LexicalCaster {
    fn default() -> Self {
        Self::native()
    }
}

impl<P: SignatureParse> LexicalCaster<P> {
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            policy: UnrecognizedSignaturePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: UnrecognizedSignaturePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn policy(&self) -> UnrecognizedSignaturePolicy {
        self.policy
    }

    /// Convert `arg` into `T`. Always returns an error on failure, whatever
    /// the policy.
    pub fn cast<T, S>(&self, arg: &S) -> Result<T, ConversionError>
    where
        T: FromStr,
        T::Err: Display,
        S: Display + ?Sized,
    {
        lexical_cast_with(arg, &self.parser)
    }

    /// Convert `arg` into `T`, honoring the unrecognized-signature policy.
    ///
    /// With [`UnrecognizedSignaturePolicy::LegacyDefault`] an undiagnosed
    /// failure yields `T::default()`. Diagnosed failures are always returned.
    pub fn cast_or_default<T, S>(&self, arg: &S) -> Result<T, ConversionError>
    where
        T: FromStr + Default,
        T::Err: Display,
        S: Display + ?Sized,
    {
        match self.cast(arg) {
            Err(ConversionError::Undiagnosed { input, reason })
                if self.policy == UnrecognizedSignaturePolicy::LegacyDefault =>
            {
                log::warn!(
                    "Swallowing failed cast of '{}' ({}); returning default value",
                    input,
                    reason
                );
                Ok(T::default())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{SignatureError, TypePair};
    use pretty_assertions::assert_eq;

    /// Parser that recognizes nothing.
    struct RejectAll(SignatureConvention);

    impl SignatureParse for RejectAll {
        fn convention(&self) -> SignatureConvention {
            self.0
        }

        fn parse_signature(&self, _signature: &str) -> Result<TypePair, SignatureError> {
            Err(SignatureError::MissingMarker { marker: "<none>" })
        }
    }

    #[test]
    fn test_successful_cast() {
        let value: i32 = lexical_cast(&String::from("123")).unwrap();
        assert_eq!(value, 123);

        let value: f64 = lexical_cast("2.5").unwrap();
        assert_eq!(value, 2.5);
    }

    #[test]
    fn test_cast_from_non_string_source() {
        let value: String = lexical_cast(&42u8).unwrap();
        assert_eq!(value, "42");

        let err = lexical_cast::<bool, u8>(&1).unwrap_err();
        assert_eq!(err.type_pair(), Some(TypePair::new("u8", "bool")));
    }

    #[test]
    fn test_bracket_failure_names_both_types() {
        let err = lexical_cast::<i32, String>(&String::from("aa")).unwrap_err();
        assert_eq!(
            err,
            ConversionError::bad_cast("aa", TypePair::new("String", "i32"))
        );
    }

    #[test]
    fn test_annotated_failure_names_both_types() {
        let caster = LexicalCaster::with_parser(SignatureConvention::Annotated);
        let err = caster.cast::<u16, str>("-1").unwrap_err();
        assert_eq!(err, ConversionError::bad_cast("-1", TypePair::new("str", "u16")));
    }

    #[test]
    fn test_unrecognized_signature_raises_by_default() {
        let caster = LexicalCaster::with_parser(RejectAll(SignatureConvention::Bracket));
        let err = caster.cast_or_default::<i32, str>("aa").unwrap_err();
        assert_eq!(err.input(), "aa");
        assert!(!err.is_diagnosed());
    }

    #[test]
    fn test_legacy_default_policy_swallows_undiagnosed_failures() {
        let caster = LexicalCaster::with_parser(RejectAll(SignatureConvention::Bracket))
            .with_policy(UnrecognizedSignaturePolicy::LegacyDefault);

        assert_eq!(caster.cast_or_default::<i32, str>("aa"), Ok(0));
        assert_eq!(caster.cast_or_default::<i32, str>("7"), Ok(7));
        // plain cast ignores the policy
        assert!(caster.cast::<i32, str>("aa").is_err());
    }

    #[test]
    fn test_legacy_default_policy_keeps_diagnosed_failures() {
        let caster = LexicalCaster::native().with_policy(UnrecognizedSignaturePolicy::LegacyDefault);
        let err = caster.cast_or_default::<i32, str>("aa").unwrap_err();
        assert!(err.is_diagnosed());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "legacy-default".parse::<UnrecognizedSignaturePolicy>(),
            Ok(UnrecognizedSignaturePolicy::LegacyDefault)
        );
        assert_eq!(
            "RAISE".parse::<UnrecognizedSignaturePolicy>(),
            Ok(UnrecognizedSignaturePolicy::Raise)
        );
        assert!("ignore".parse::<UnrecognizedSignaturePolicy>().is_err());
    }
}
