//! Flattened documentation entries: the pipeline's output format.
//!
//! An [`Entry`] is one renderable documentation record produced by
//! flattening the reflection tree. The rendering layer consumes entries
//! in order; their sequence mirrors declaration order in the original
//! source, so no sorting happens downstream.
//!
//! Shape-specific fields live in [`EntryDetail`], a tagged enum
//! flattened into the record, so the frontend can switch on the detail
//! tag exhaustively instead of probing optional fields.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::typedoc::{Comment, Source};

/// Returns true if the flag is unset (for serde `skip_serializing_if`).
fn is_false(value: &bool) -> bool {
    !*value
}

/// One renderable documentation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Entry {
    /// Name of the module (class, interface) owning this member.
    pub module: String,

    /// Member name.
    pub name: String,

    /// Generator id of the source item.
    #[ts(type = "number")]
    pub id: u64,

    /// Declaration kind label of the source item (e.g. `"Method"`).
    pub kind: String,

    /// Pre-rendered one-line display string, e.g.
    /// `"project(point: Vector3): Vector3"` or `"fieldOfView: number"`.
    pub display: String,

    /// Set when the member was inherited from a base class.
    #[serde(default, skip_serializing_if = "is_false")]
    pub inherited: bool,

    /// Resolved doc comment. For callables this is the signature's
    /// comment, falling back to the item's own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,

    /// Source locations of the member.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,

    /// Shape-specific fields, tagged by entry shape.
    #[serde(flatten)]
    pub detail: EntryDetail,
}

/// Shape-specific fields of an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
pub enum EntryDetail {
    /// A callable form: one entry per overload signature.
    Call {
        /// Parameters in declaration order.
        parameters: Vec<ParameterEntry>,

        /// Rendered return type.
        returns: String,
    },

    /// A property or field.
    Property {
        /// Rendered type.
        #[serde(rename = "type")]
        ty: String,

        /// Default-value literal, verbatim from source.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<String>,
    },

    /// A get/set accessor. At least one side is present.
    Accessor {
        /// Rendered getter return type.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        getter: Option<String>,

        /// Rendered setter value type.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        setter: Option<String>,
    },
}

/// One rendered parameter of a call entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct ParameterEntry {
    /// Parameter name.
    pub name: String,

    /// Rendered parameter type.
    #[serde(rename = "type")]
    pub ty: String,

    /// Set for optional parameters (`x?: T`).
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,

    /// Doc comment for this parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}
