//! Annotated convention: `... [with Target = X; Source = Y]`.

use super::{SignatureError, TypePair};

/// Introduces the target type binding.
pub const TARGET_MARKER: &str = "[with Target = ";
/// Introduces the source type binding; searched after [`TARGET_MARKER`].
pub const SOURCE_MARKER: &str = "; Source = ";
/// Closes the annotation; searched after [`SOURCE_MARKER`].
pub const CLOSING_MARKER: &str = "]";

/// Parse an annotated-convention signature.
///
/// Names are taken verbatim between the markers. Each marker missing in
/// order is reported on its own.
pub fn parse(signature: &str) -> Result<TypePair, SignatureError> {
    let target_start = find_after(signature, 0, TARGET_MARKER)? + TARGET_MARKER.len();
    let source_marker = find_after(signature, target_start, SOURCE_MARKER)?;
    let source_start = source_marker + SOURCE_MARKER.len();
    let end = find_after(signature, source_start, CLOSING_MARKER)?;

    Ok(TypePair {
        source: signature[source_start..end].to_string(),
        target: signature[target_start..source_marker].to_string(),
    })
}

fn find_after(haystack: &str, from: usize, marker: &'static str) -> Result<usize, SignatureError> {
    haystack[from..]
        .find(marker)
        .map(|pos| from + pos)
        .ok_or(SignatureError::MissingMarker { marker })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_annotation() {
        let pair = parse("[with Target = int; Source = std::string]").unwrap();
        assert_eq!(pair, TypePair::new("std::string", "int"));
    }

    #[test]
    fn test_parse_gcc_pretty_function() {
        let sig = "Target lexical_cast_with(const Source&) [with Target = int; Source = std::__cxx11::basic_string<char>]";
        let pair = parse(sig).unwrap();
        assert_eq!(pair.target, "int");
        // no normalization in this convention
        assert_eq!(pair.source, "std::__cxx11::basic_string<char>");
    }

    #[test]
    fn test_missing_target_marker() {
        assert_eq!(
            parse("f(const S&) [Source = int]"),
            Err(SignatureError::MissingMarker {
                marker: TARGET_MARKER
            })
        );
    }

    #[test]
    fn test_missing_source_marker() {
        assert_eq!(
            parse("[with Target = int]"),
            Err(SignatureError::MissingMarker {
                marker: SOURCE_MARKER
            })
        );
    }

    #[test]
    fn test_source_marker_must_follow_target_marker() {
        assert_eq!(
            parse("; Source = int [with Target = long]"),
            Err(SignatureError::MissingMarker {
                marker: SOURCE_MARKER
            })
        );
    }

    #[test]
    fn test_missing_closing_marker() {
        assert_eq!(
            parse("[with Target = int; Source = std::string"),
            Err(SignatureError::MissingMarker {
                marker: CLOSING_MARKER
            })
        );
    }

    #[test]
    fn test_empty_bindings() {
        let pair = parse("[with Target = ; Source = ]").unwrap();
        assert_eq!(pair, TypePair::new("", ""));
    }
}
