//! Capturing the signature of the running generic function.
//!
//! rustc has no `__PRETTY_FUNCTION__`, but the name of a function item
//! carries its generic arguments: `type_name_of_val(&f::<i32, String>)` is
//! `crate::f<i32, alloc::string::String>`. A function captures its own
//! signature by passing a reference to its own instantiation.

use super::SignatureConvention;
use std::any::{type_name, type_name_of_val};
use std::fmt;

/// Signature text of one generic function instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    /// Capture the signature of `func`, instantiated with target `T` and
    /// source `S`, rendered in `convention`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lexcast::signature::{Signature, SignatureConvention};
    ///
    /// fn convert<T, S: ?Sized>(_: &S) {}
    ///
    /// let sig = Signature::capture::<u8, str, _>(&convert::<u8, str>, SignatureConvention::Annotated);
    /// assert!(sig.as_str().ends_with("[with Target = u8; Source = str]"));
    /// ```
    pub fn capture<T: ?Sized, S: ?Sized, F: ?Sized>(
        func: &F,
        convention: SignatureConvention,
    ) -> Self {
        let name = type_name_of_val(func);
        match convention {
            SignatureConvention::Bracket => Signature(name.to_string()),
            SignatureConvention::Annotated => {
                let path = name.split('<').next().unwrap_or(name);
                Signature(format!(
                    "{}(&Source) -> Target [with Target = {}; Source = {}]",
                    path,
                    type_name::<T>(),
                    type_name::<S>()
                ))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Signature {
    fn from(text: String) -> Self {
        Signature(text)
    }
}
