// Test utility module for lexcast integration tests
#![allow(dead_code)]

use std::cell::Cell;

use lexcast::{SignatureConvention, SignatureError, SignatureParse, TypePair};

/// Signature parser that records every invocation and the last signature it saw
pub struct RecordingParser {
    inner: SignatureConvention,
    calls: Cell<usize>,
    last_signature: std::cell::RefCell<Option<String>>,
}

impl RecordingParser {
    pub fn new(inner: SignatureConvention) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
            last_signature: std::cell::RefCell::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_signature(&self) -> Option<String> {
        self.last_signature.borrow().clone()
    }
}

impl SignatureParse for RecordingParser {
    fn convention(&self) -> SignatureConvention {
        self.inner
    }

    fn parse_signature(&self, signature: &str) -> Result<TypePair, SignatureError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_signature.borrow_mut() = Some(signature.to_string());
        self.inner.try_parse(signature)
    }
}

/// Bracket-convention signature for `lexical_cast_with` with the given arguments
pub fn bracket_signature(target: &str, source: &str) -> String {
    format!("lexcast::cast::lexical_cast_with<{}, {}>", target, source)
}
