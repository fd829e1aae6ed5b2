//! Item shape and type discriminant classification.
//!
//! The generator's item nodes are loosely typed: which optional fields
//! are present determines how a node is documented. This module resolves
//! that shape once per item into the closed [`ItemShape`] variant, and
//! maps the `type` discriminant strings onto the closed [`TypeKind`]
//! vocabulary, so the rest of the walker matches exhaustively instead of
//! probing optional fields at every use site.

use apiref_schemas::{Item, Signature, Type};

use crate::error::FlattenError;

/// Kind labels that mark pure containers: items that group other
/// declarations and carry no documentable payload of their own.
const CONTAINER_KINDS: &[&str] = &["Module", "Namespace", "External module"];

/// How an item is documented, resolved from its populated fields.
#[derive(Debug)]
pub(crate) enum ItemShape<'a> {
    /// A callable member: one renderable signature per overload.
    Callable(&'a [Signature]),
    /// A property or field with a resolved type.
    Property(&'a Type),
    /// A get/set accessor; at least one side is present.
    Accessor {
        get: Option<&'a Signature>,
        set: Option<&'a Signature>,
    },
    /// A namespace/module container; emits no entry of its own.
    Container,
}

/// Resolves an item's shape from its populated fields.
///
/// Resolution order matches the documentation precedence: callable
/// signatures win over a resolved type, which wins over accessor
/// signatures. An item with none of these payloads must be a known
/// container kind; anything else is a malformed node.
pub(crate) fn classify(item: &Item) -> Result<ItemShape<'_>, FlattenError> {
    if !item.signatures.is_empty() {
        return Ok(ItemShape::Callable(&item.signatures));
    }

    if let Some(ty) = &item.ty {
        return Ok(ItemShape::Property(ty));
    }

    let get = item.get_signature.as_deref().and_then(<[_]>::first);
    let set = item.set_signature.as_deref().and_then(<[_]>::first);
    if get.is_some() || set.is_some() {
        return Ok(ItemShape::Accessor { get, set });
    }

    if CONTAINER_KINDS.contains(&item.kind_string.as_str()) {
        return Ok(ItemShape::Container);
    }

    Err(FlattenError::unrecognized_item(item))
}

/// Closed vocabulary of type-representation discriminants.
///
/// Mirrors the generator's `type` strings. A discriminant outside this
/// set is a schema-format error, never silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeKind {
    Intrinsic,
    Reference,
    Array,
    Union,
    Intersection,
    Tuple,
    TypeParameter,
    StringLiteral,
    Reflection,
    TypeOperator,
    Unknown,
}

impl TypeKind {
    /// Parses a discriminant string, returning `None` when it falls
    /// outside the known vocabulary.
    pub(crate) fn parse(discriminant: &str) -> Option<Self> {
        match discriminant {
            "intrinsic" => Some(Self::Intrinsic),
            "reference" => Some(Self::Reference),
            "array" => Some(Self::Array),
            "union" => Some(Self::Union),
            "intersection" => Some(Self::Intersection),
            "tuple" => Some(Self::Tuple),
            "typeParameter" => Some(Self::TypeParameter),
            "stringLiteral" => Some(Self::StringLiteral),
            "reflection" => Some(Self::Reflection),
            "typeOperator" => Some(Self::TypeOperator),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Display suffix appended after a nested element type.
    pub(crate) fn suffix(self) -> &'static str {
        match self {
            Self::Array => "[]",
            _ => "",
        }
    }
}
