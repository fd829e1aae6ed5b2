//! Flattening of typedoc reflection trees into renderable entries.
//!
//! This crate turns the documentation generator's reflection JSON (a
//! recursive tree: package → modules → items → signatures → parameters
//! → types) into the flat, ordered list of [`Entry`] records the API
//! reference pages render. The transform is pure and deterministic:
//! the input tree is never mutated, entry order mirrors declaration
//! order, and a single malformed node fails the whole call instead of
//! producing a partial reference.
//!
//! ## Usage
//!
//! ```no_run
//! use apiref_flatten::{FlattenOptions, run};
//!
//! let input = std::fs::File::open("api.json").unwrap();
//! let mut output = Vec::new();
//! run(input, &mut output, &FlattenOptions::default()).unwrap();
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports types from `apiref_schemas` for convenience.
//! See [`apiref_schemas`] for schema documentation.

mod classify;
mod error;
mod render;
mod walk;

use std::io::{Read, Write};

// Re-export schema types for convenience.
#[doc(inline)]
pub use apiref_schemas::{
    Comment, Entry, EntryDetail, Item, Module, Package, Parameter,
    ParameterEntry, Signature, Type,
};
use tracing::debug_span;

#[doc(inline)]
pub use crate::error::FlattenError;
use crate::error::FlattenErrorKind;
#[doc(inline)]
pub use crate::walk::{FlattenOptions, flatten};

/// Run the flatten operation.
///
/// Reads a [`Package`] reflection document from the input, flattens it
/// into entries, and writes the entry list to output as pretty-printed
/// JSON.
///
/// # Errors
///
/// Returns [`FlattenError`] if:
/// - Reading from input fails ([`FlattenError::is_io`])
/// - The input is not valid reflection JSON
///   ([`FlattenError::is_deserialization`])
/// - The tree contains a malformed node
///   ([`FlattenError::is_schema_format`])
/// - Writing to output fails ([`FlattenError::is_io`])
/// - JSON serialization fails ([`FlattenError::is_serialization`])
///
/// # Example
///
/// ```no_run
/// use std::io::stdout;
/// use apiref_flatten::{FlattenOptions, run};
///
/// let input = std::fs::File::open("api.json").unwrap();
/// let mut out = stdout().lock();
/// run(input, &mut out, &FlattenOptions::default()).unwrap();
/// ```
pub fn run(
    mut input: impl Read,
    mut output: impl Write,
    options: &FlattenOptions,
) -> Result<(), FlattenError> {
    let _span = debug_span!("run").entered();

    // Step 1: Read and parse the reflection document.
    let mut json = String::new();
    input.read_to_string(&mut json)?;
    let package: Package = serde_json::from_str(&json).map_err(|e| {
        FlattenError::new(FlattenErrorKind::Deserialization(e))
    })?;

    // Step 2: Flatten the tree into entries.
    let entries = flatten(&package, options)?;

    // Step 3: Write output JSON.
    serde_json::to_writer_pretty(&mut output, &entries)
        .map_err(|e| FlattenError::new(FlattenErrorKind::Serialization(e)))?;
    writeln!(output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create an intrinsic type for testing.
    fn intrinsic(name: &str) -> Type {
        Type {
            id: None,
            kind: "intrinsic".to_string(),
            name: name.to_string(),
            operator: None,
            target: None,
        }
    }

    /// Helper to create a single-signature method item.
    fn make_method(name: &str) -> Item {
        Item {
            name: name.to_string(),
            kind_string: "Method".to_string(),
            signatures: vec![Signature {
                name: name.to_string(),
                id: 0,
                kind: 4096,
                kind_string: "Call signature".to_string(),
                overwrites: Vec::new(),
                flags: Default::default(),
                return_type: intrinsic("void"),
                parameters: Vec::new(),
                type_parameter: Vec::new(),
                comment: None,
            }],
            ..Item::default()
        }
    }

    /// Helper to wrap items into a one-module package.
    fn make_package(children: Vec<Item>) -> Package {
        Package {
            name: "engine".to_string(),
            children: vec![Module {
                name: "Camera".to_string(),
                kind_string: "Class".to_string(),
                children,
                ..Module::default()
            }],
            ..Package::default()
        }
    }

    /// Roundtrip smoke test: `run` produces valid entry JSON.
    #[test]
    fn test_run_roundtrip() {
        let package = make_package(vec![make_method("destroy")]);
        let input_json = serde_json::to_string(&package).unwrap();

        let mut output = Vec::new();
        run(
            input_json.as_bytes(),
            &mut output,
            &FlattenOptions::default(),
        )
        .unwrap();

        let entries: Vec<Entry> = serde_json::from_slice(&output)
            .expect("output should be valid entry JSON");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display, "destroy(): void");
    }

    /// Invalid JSON should yield a deserialization error classification.
    #[test]
    fn test_run_invalid_json() {
        let mut output = Vec::new();
        let result = run(
            "not valid json".as_bytes(),
            &mut output,
            &FlattenOptions::default(),
        );

        assert!(result.is_err());
        assert!(result.unwrap_err().is_deserialization());
    }

    /// A malformed node should classify as a schema-format error and
    /// produce no output.
    #[test]
    fn test_run_malformed_node() {
        let package = make_package(vec![Item {
            name: "mystery".to_string(),
            kind_string: "Method".to_string(),
            ..Item::default()
        }]);
        let input_json = serde_json::to_string(&package).unwrap();

        let mut output = Vec::new();
        let result = run(
            input_json.as_bytes(),
            &mut output,
            &FlattenOptions::default(),
        );

        assert!(result.unwrap_err().is_schema_format());
        assert!(output.is_empty(), "no partial output on failure");
    }
}
