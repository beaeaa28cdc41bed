//! Bracket convention: `path::lexical_cast_with<Target, Source>`.
//!
//! The generic argument list is scanned with a nesting depth so that commas
//! and angle brackets inside either argument (`Vec<u8, A>`) do not split it.
//! Only a comma at depth 1 separates target from source.

use super::normalize::normalize_type_name;
use super::{SignatureError, TypePair};

/// Name of the wrapper function followed by the opening bracket of its
/// generic argument list.
pub const WRAPPER_MARKER: &str = "lexical_cast_with<";

/// Parse a bracket-convention signature.
///
/// Fails only when [`WRAPPER_MARKER`] is absent. Unbalanced input after the
/// marker still yields whatever was accumulated.
pub fn parse(signature: &str) -> Result<TypePair, SignatureError> {
    parse_with_marker(signature, WRAPPER_MARKER)
}

/// Parse using an explicit marker. `marker` must end with `<`.
pub(crate) fn parse_with_marker(
    signature: &str,
    marker: &'static str,
) -> Result<TypePair, SignatureError> {
    let start = signature
        .find(marker)
        .ok_or(SignatureError::MissingMarker { marker })?
        + marker.len();

    let (target, source) = split_generic_arguments(&signature[start..]);

    Ok(TypePair {
        source: normalize_type_name(&source),
        target: normalize_type_name(&target),
    })
}

/// Split the text following an already-consumed `<` into its first and
/// second top-level arguments.
fn split_generic_arguments(args: &str) -> (String, String) {
    let mut depth = 1usize;
    let mut target = String::new();
    let mut source = String::new();
    let mut parsing_target = true;

    for ch in args.chars() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            ',' if depth == 1 => {
                parsing_target = false;
                continue;
            }
            _ => {}
        }

        if parsing_target {
            target.push(ch);
        } else {
            source.push(ch);
        }
    }

    (target, source)
}
