//! Shared proptest strategies for schema tests.

use proptest::prelude::*;

/// Strategy for generating identifier-like names.
pub fn arb_ident() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,19}"
}

/// Strategy for generating short prose, as found in doc comments.
pub fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z ,.]{1,40}"
}
