//! Error types for the apiref-flatten crate.

use std::backtrace::Backtrace;
use std::fmt;

use apiref_schemas::{Item, Type};

/// Error type for flatten operations.
///
/// This error captures failures that can occur while parsing the
/// reflection document, walking the tree, and writing output. Uses the
/// canonical struct pattern with backtrace capture and `is_xxx()`
/// helper methods.
#[derive(Debug)]
pub struct FlattenError {
    kind: FlattenErrorKind,
    backtrace: Backtrace,
}

/// Internal error variants. Not exposed publicly; use `is_xxx()` methods.
#[derive(Debug)]
pub(crate) enum FlattenErrorKind {
    /// An item carries none of the recognized payloads (signatures,
    /// type, accessor signatures) and is not a container.
    UnrecognizedItem {
        /// Generator id of the offending node.
        id: u64,
        /// Declaration kind label of the offending node.
        kind_string: String,
    },
    /// A type node carries a discriminant outside the known vocabulary.
    UnknownTypeKind {
        /// The unrecognized discriminant string.
        kind: String,
        /// Display name of the offending type node.
        name: String,
    },
    /// Failed to deserialize the input document.
    Deserialization(serde_json::Error),
    /// Failed to serialize output to JSON.
    Serialization(serde_json::Error),
    /// I/O error when reading input or writing output.
    Io(std::io::Error),
}

impl FlattenError {
    /// Creates an error from an error kind, capturing a backtrace.
    pub(crate) fn new(kind: FlattenErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a schema-format error for an item whose shape matches no
    /// recognized case.
    pub(crate) fn unrecognized_item(item: &Item) -> Self {
        Self::new(FlattenErrorKind::UnrecognizedItem {
            id: item.id,
            kind_string: item.kind_string.clone(),
        })
    }

    /// Creates a schema-format error for an unknown type discriminant.
    pub(crate) fn unknown_type_kind(ty: &Type) -> Self {
        Self::new(FlattenErrorKind::UnknownTypeKind {
            kind: ty.kind.clone(),
            name: ty.name.clone(),
        })
    }

    /// Returns true if this error is due to a malformed schema node.
    ///
    /// Covers both unrecognized item shapes and unknown type
    /// discriminants. Malformed nodes abort the whole flatten call;
    /// there is no partial output to salvage.
    pub fn is_schema_format(&self) -> bool {
        matches!(
            self.kind,
            FlattenErrorKind::UnrecognizedItem { .. }
                | FlattenErrorKind::UnknownTypeKind { .. }
        )
    }

    /// Returns true if this error is due to deserialization failure.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, FlattenErrorKind::Deserialization(_))
    }

    /// Returns true if this error is due to serialization failure.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, FlattenErrorKind::Serialization(_))
    }

    /// Returns true if this error is due to I/O failure.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, FlattenErrorKind::Io(_))
    }

    /// Returns the backtrace captured when this error was created.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for FlattenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlattenErrorKind::UnrecognizedItem { id, kind_string } => {
                write!(
                    f,
                    "schema format error: item {id} ({kind_string}) has no \
                     signatures, type, or accessor signatures"
                )
            }
            FlattenErrorKind::UnknownTypeKind { kind, name } => {
                write!(
                    f,
                    "schema format error: unrecognized type discriminant \
                     `{kind}` on type `{name}`"
                )
            }
            FlattenErrorKind::Deserialization(err) => {
                write!(f, "failed to deserialize input: {err}")
            }
            FlattenErrorKind::Serialization(err) => {
                write!(f, "failed to serialize output: {err}")
            }
            FlattenErrorKind::Io(err) => {
                write!(f, "I/O error: {err}")
            }
        }
    }
}

impl fmt::Display for FlattenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Summary of what happened.
        writeln!(f, "{}", self.kind)?;

        // Backtrace (will be empty unless RUST_BACKTRACE is set).
        write!(f, "{}", self.backtrace)
    }
}

impl std::error::Error for FlattenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            FlattenErrorKind::UnrecognizedItem { .. }
            | FlattenErrorKind::UnknownTypeKind { .. } => None,
            FlattenErrorKind::Deserialization(err)
            | FlattenErrorKind::Serialization(err) => Some(err),
            FlattenErrorKind::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for FlattenError {
    fn from(err: std::io::Error) -> Self {
        Self {
            kind: FlattenErrorKind::Io(err),
            backtrace: Backtrace::capture(),
        }
    }
}
