//! Shortening of verbose string type spellings.
//!
//! Signatures spell string types the way the standard library defines them,
//! `std::basic_string<char, std::char_traits<char>, std::allocator<char>>` or
//! `alloc::string::String`. Error messages read better with the conventional
//! names, `std::string` and `String`.
//!
//! Normalization is idempotent: every output is either a short name, which no
//! rule matches, or the trimmed input, which no rule matched.

/// Leading qualifiers kept in front of a shortened name. Longest first.
const QUALIFIERS: &[&str] = &["const ", "&mut ", "&"];

/// Rust string types rendered by `std::any::type_name`.
const RUST_STRING_TYPES: &[(&str, &str)] = &[
    ("alloc::string::String", "String"),
    ("alloc::boxed::Box<str>", "Box<str>"),
    ("alloc::rc::Rc<str>", "Rc<str>"),
    ("alloc::sync::Arc<str>", "Arc<str>"),
    ("alloc::borrow::Cow<str>", "Cow<str>"),
];

/// Character type of a `basic_string` to the prefix of its short name.
const CHAR_WIDTHS: &[(&str, &str)] = &[
    ("char", ""),
    ("wchar_t", "w"),
    ("char8_t", "u8"),
    ("char16_t", "u16"),
    ("char32_t", "u32"),
];

const STD_BASIC_STRING: &str = "std::basic_string<";
const PMR_BASIC_STRING: &str = "std::pmr::basic_string<";
const PMR_ALLOCATOR: &str = "polymorphic_allocator";

/// Rewrite a verbose string type name to its short conventional name.
///
/// Surrounding whitespace is removed. Names that are not a recognized string
/// type are otherwise returned unchanged.
///
/// # Examples
///
/// ```rust
/// use lexcast::signature::normalize_type_name;
///
/// assert_eq!(
///     normalize_type_name("const std::basic_string<char, std::char_traits<char>, std::allocator<char>>"),
///     "const std::string"
/// );
/// assert_eq!(normalize_type_name(" alloc::string::String"), "String");
/// assert_eq!(normalize_type_name("i32"), "i32");
/// ```
pub fn normalize_type_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let (qualifier, body) = split_qualifier(trimmed);

    match shorten_rust_string(body).or_else(|| shorten_basic_string(body)) {
        Some(short) => format!("{}{}", qualifier, short),
        None => trimmed.to_string(),
    }
}

fn split_qualifier(name: &str) -> (&str, &str) {
    QUALIFIERS
        .iter()
        .find_map(|q| name.strip_prefix(q).map(|rest| (*q, rest)))
        .unwrap_or(("", name))
}

fn shorten_rust_string(body: &str) -> Option<String> {
    RUST_STRING_TYPES
        .iter()
        .find(|(long, _)| *long == body)
        .map(|(_, short)| short.to_string())
}

/// Map `std::basic_string<CharT, ...>` and `std::pmr::basic_string<CharT>`
/// to `std::string`, `std::pmr::wstring` and friends.
fn shorten_basic_string(body: &str) -> Option<String> {
    let (args_start, pmr_spelling) = match body.find(PMR_BASIC_STRING) {
        Some(pos) => (pos + PMR_BASIC_STRING.len(), true),
        None => (body.find(STD_BASIC_STRING)? + STD_BASIC_STRING.len(), false),
    };

    let args = &body[args_start..];
    let char_type = args
        .split(|c| c == ',' || c == '>')
        .next()
        .map(str::trim)?;
    let width = CHAR_WIDTHS
        .iter()
        .find(|(name, _)| *name == char_type)
        .map(|(_, prefix)| *prefix)?;

    let pmr = pmr_spelling || args.contains(PMR_ALLOCATOR);
    Some(format!(
        "std::{}{}string",
        if pmr { "pmr::" } else { "" },
        width
    ))
}
