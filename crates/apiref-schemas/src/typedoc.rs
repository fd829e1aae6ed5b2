//! Typedoc reflection schema: the documentation generator's wire format.
//!
//! The TypeScript documentation generator emits a recursive JSON tree
//! describing every declaration in the engine's public API:
//! packages → modules → items → signatures → parameters → types.
//! This module models that tree exactly as it appears on the wire
//! (camelCase field names, optional fields omitted when absent) so the
//! generator's output can be consumed without a preprocessing step.
//!
//! The tree is produced once per release by the generator and is
//! treated as immutable input. Unknown extra fields (e.g. the
//! generator's `groups` arrays) are ignored on deserialization.
//!
//! ## Terminology
//!
//! - **Package**: the root reflection for one published package.
//! - **Module**: a top-level declaration (class, interface, enum) whose
//!   `children` are its members. The generator calls every such node a
//!   "module" regardless of its `kindString`.
//! - **Item**: one member declaration (method, property, accessor, ...).

use serde::{Deserialize, Serialize};
use serde_with::{OneOrMany, serde_as};
use ts_rs::TS;

/// Root reflection for one package: the top of the declaration tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Package name as published (e.g. `"engine"`).
    pub name: String,

    /// Generator-assigned numeric id, unique within the tree.
    #[serde(default)]
    #[ts(type = "number")]
    pub id: u64,

    /// Numeric declaration-kind code. `kind_string` is the usable form.
    #[serde(default)]
    #[ts(type = "number")]
    pub kind: u64,

    /// Declaration kind label (e.g. `"External module"`).
    #[serde(default)]
    pub kind_string: String,

    /// Top-level declarations in source order. Absent means no members.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Module>,

    /// Source locations. Provenance only, never documentation content.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}

/// A top-level declaration (class, interface, enum) and its members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Declaration name (e.g. `"Camera"`).
    pub name: String,

    /// Generator-assigned numeric id, unique within the tree.
    #[serde(default)]
    #[ts(type = "number")]
    pub id: u64,

    /// Numeric declaration-kind code.
    #[serde(default)]
    #[ts(type = "number")]
    pub kind: u64,

    /// Declaration kind label (e.g. `"Class"`, `"Interface"`).
    #[serde(default)]
    pub kind_string: String,

    /// Member declarations in source order. Absent means no members.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Item>,

    /// Doc comment attached to the declaration itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,

    /// Base types this declaration extends.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extended_types: Vec<DeclarationRef>,

    /// Source locations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}

/// One member declaration: a method, property, accessor, or nested
/// container.
///
/// Which of the optional payload fields is present determines how the
/// item is documented: `signatures` for callables, `type` for
/// properties, `get_signature`/`set_signature` for accessors. The
/// walker resolves this shape once per item instead of re-checking
/// field presence at every use site.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Member name (e.g. `"fieldOfView"`).
    pub name: String,

    /// Generator-assigned numeric id, unique within the tree.
    #[serde(default)]
    #[ts(type = "number")]
    pub id: u64,

    /// Numeric declaration-kind code.
    #[serde(default)]
    #[ts(type = "number")]
    pub kind: u64,

    /// Declaration kind label (e.g. `"Method"`, `"Property"`).
    #[serde(default)]
    pub kind_string: String,

    /// Doc comment. Callable items may instead carry per-signature
    /// comments; this one is the fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,

    /// Reference to the base-class member this item was inherited from.
    /// Presence means the item is not documented locally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<DeclarationRef>,

    /// Getter signatures for accessor members. The generator has
    /// emitted both a bare signature object and a one-element array
    /// across versions; both shapes deserialize here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<OneOrMany<_>>")]
    #[ts(type = "Signature | Signature[] | null")]
    pub get_signature: Option<Vec<Signature>>,

    /// Setter signatures for accessor members. Same shape tolerance as
    /// `get_signature`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<OneOrMany<_>>")]
    #[ts(type = "Signature | Signature[] | null")]
    pub set_signature: Option<Vec<Signature>>,

    /// Callable signatures in source order. Overloaded members carry
    /// one signature per overload.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<Signature>,

    /// Base-class members this item overrides.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overwrites: Vec<DeclarationRef>,

    /// Source locations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,

    /// Resolved type for property/field members.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,

    /// Default-value literal for property members, verbatim from source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// One callable form of a function or method: parameter list plus
/// return type. Overloaded items own several of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    /// Signature name. Matches the owning item's name for overloads.
    pub name: String,

    /// Generator-assigned numeric id.
    #[serde(default)]
    #[ts(type = "number")]
    pub id: u64,

    /// Numeric declaration-kind code.
    #[serde(default)]
    #[ts(type = "number")]
    pub kind: u64,

    /// Declaration kind label (e.g. `"Call signature"`).
    #[serde(default)]
    pub kind_string: String,

    /// Base-class signatures this one overrides.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overwrites: Vec<DeclarationRef>,

    /// Modifier flags.
    #[serde(default, skip_serializing_if = "Flags::is_clear")]
    pub flags: Flags,

    /// Return type. Always present on the wire, `void` included.
    #[serde(rename = "type")]
    pub return_type: Type,

    /// Parameters in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    /// Generic type parameters, reusing the parameter shape.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameter: Vec<Parameter>,

    /// Doc comment for this specific signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

/// A parameter of one signature. Also used for generic type parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name.
    pub name: String,

    /// Generator-assigned numeric id.
    #[serde(default)]
    #[ts(type = "number")]
    pub id: u64,

    /// Numeric declaration-kind code.
    #[serde(default)]
    #[ts(type = "number")]
    pub kind: u64,

    /// Declaration kind label (e.g. `"Parameter"`).
    #[serde(default)]
    pub kind_string: String,

    /// Doc comment for this parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,

    /// Modifier flags (`isOptional` for `x?: T` parameters).
    #[serde(default, skip_serializing_if = "Flags::is_clear")]
    pub flags: Flags,

    /// Resolved parameter type.
    #[serde(rename = "type")]
    pub ty: Type,
}

/// A type representation node.
///
/// `kind` is the generator's discriminant string (`intrinsic`,
/// `reference`, `array`, ...). Array and indexed forms nest the element
/// type under `target`; operator-wrapped forms (`keyof T`,
/// `readonly T[]`) carry the operator string alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    /// Id of the referenced declaration. The generator omits ids on
    /// intrinsic and unresolved types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "number | null")]
    pub id: Option<u64>,

    /// Representation discriminant (e.g. `"intrinsic"`, `"reference"`,
    /// `"array"`, `"union"`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Display name of the type.
    pub name: String,

    /// Type operator prefix (e.g. `"keyof"`, `"readonly"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    /// Element type for array/indexed forms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Box<Target>>,
}

/// Nested element type of an array/indexed type, with the generator's
/// own rendering of the full type string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// The element type (e.g. `number` within `number[]`).
    pub element_type: Type,

    /// The generator's type string for the whole form.
    #[serde(rename = "type")]
    pub ty: String,
}

/// Reference to another declaration by id and display name.
///
/// The generator uses this triple for `inheritedFrom`, `overwrites`,
/// and `extendedTypes` alike; one shared shape covers all three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationRef {
    /// Representation discriminant, `"reference"` in practice.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Id of the referenced declaration, when resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "number | null")]
    pub id: Option<u64>,

    /// Display name (e.g. `"Component.destroy"`).
    pub name: String,
}

/// Modifier flags on signatures and parameters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "camelCase")]
pub struct Flags {
    /// Marks optional parameters and signatures (`x?: T`).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_optional: bool,
}

impl Flags {
    /// Returns true if no flag is set.
    ///
    /// Takes `&self` because serde's `skip_serializing_if` passes by
    /// reference.
    #[expect(
        clippy::trivially_copy_pass_by_ref,
        reason = "Serde's skip_serializing_if passes by reference; keep &self."
    )]
    fn is_clear(&self) -> bool {
        !self.is_optional
    }
}

/// A doc comment as split by the generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// First paragraph of the comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_text: Option<String>,

    /// Remaining paragraphs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// `@returns` text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,

    /// Single structured tag, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tag>,
}

/// One structured comment tag (e.g. `@deprecated`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Tag name without the `@`.
    pub tag: String,

    /// Tag text.
    pub text: String,
}

/// Source location of a declaration. Provenance only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// File name relative to the package root.
    pub file_name: String,

    /// One-based line number.
    #[ts(type = "number")]
    pub line: u64,

    /// Zero-based column.
    #[ts(type = "number")]
    pub character: u64,
}

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::option;
    use proptest::prelude::*;

    use super::*;
    use crate::testutil::{arb_ident, arb_text};

    // -------------------------------------------------------------------------
    // Proptest strategies for generating arbitrary reflection trees.
    //
    // Defined here to keep the production types clean of test
    // annotations. The strategies generate bounded instances to avoid
    // stack overflow from unbounded recursion in `Type`.
    // -------------------------------------------------------------------------

    fn arb_flags() -> impl Strategy<Value = Flags> {
        any::<bool>().prop_map(|is_optional| Flags { is_optional })
    }

    fn arb_tag() -> impl Strategy<Value = Tag> {
        (arb_ident(), arb_text())
            .prop_map(|(tag, text)| Tag { tag, text })
    }

    prop_compose! {
        fn arb_comment()
            (
                short_text in option::of(arb_text()),
                text in option::of(arb_text()),
                returns in option::of(arb_text()),
                tags in option::of(arb_tag()),
            )
        -> Comment {
            Comment { short_text, text, returns, tags }
        }
    }

    prop_compose! {
        fn arb_source()
            (
                file_name in arb_ident(),
                line in 1..10_000u64,
                character in 0..200u64,
            )
        -> Source {
            Source { file_name, line, character }
        }
    }

    prop_compose! {
        fn arb_declaration_ref()
            (id in option::of(0..100_000u64), name in arb_ident())
        -> DeclarationRef {
            DeclarationRef { kind: "reference".to_string(), id, name }
        }
    }

    /// Strategy for a `Type` with bounded `target` nesting.
    fn arb_type() -> impl Strategy<Value = Type> {
        prop_compose! {
            fn arb_leaf_type()
                (
                    id in option::of(0..100_000u64),
                    kind in prop_oneof![
                        Just("intrinsic".to_string()),
                        Just("reference".to_string()),
                        Just("union".to_string()),
                    ],
                    name in arb_ident(),
                    operator in option::of(Just("keyof".to_string())),
                )
            -> Type {
                Type { id, kind, name, operator, target: None }
            }
        }
        arb_leaf_type().prop_recursive(2, 4, 1, |inner| {
            (option::of(0..100_000u64), arb_ident(), inner).prop_map(
                |(id, name, element_type)| Type {
                    id,
                    kind: "array".to_string(),
                    name,
                    operator: None,
                    target: Some(Box::new(Target {
                        ty: format!("{}[]", element_type.name),
                        element_type,
                    })),
                },
            )
        })
    }

    prop_compose! {
        fn arb_parameter()
            (
                name in arb_ident(),
                id in 0..100_000u64,
                comment in option::of(arb_comment()),
                flags in arb_flags(),
                ty in arb_type(),
            )
        -> Parameter {
            Parameter {
                name,
                id,
                kind: 32768,
                kind_string: "Parameter".to_string(),
                comment,
                flags,
                ty,
            }
        }
    }

    prop_compose! {
        fn arb_signature()
            (
                name in arb_ident(),
                id in 0..100_000u64,
                overwrites in vec(arb_declaration_ref(), 0..2),
                flags in arb_flags(),
                return_type in arb_type(),
                parameters in vec(arb_parameter(), 0..3),
                comment in option::of(arb_comment()),
            )
        -> Signature {
            Signature {
                name,
                id,
                kind: 4096,
                kind_string: "Call signature".to_string(),
                overwrites,
                flags,
                return_type,
                parameters,
                type_parameter: Vec::new(),
                comment,
            }
        }
    }

    prop_compose! {
        fn arb_item()
            (
                name in arb_ident(),
                id in 0..100_000u64,
                kind_string in prop_oneof![
                    Just("Method".to_string()),
                    Just("Property".to_string()),
                    Just("Accessor".to_string()),
                ],
                comment in option::of(arb_comment()),
                inherited_from in option::of(arb_declaration_ref()),
                signatures in vec(arb_signature(), 0..3),
                sources in vec(arb_source(), 0..2),
                ty in option::of(arb_type()),
                default_value in option::of(arb_ident()),
            )
        -> Item {
            Item {
                name,
                id,
                kind: 2048,
                kind_string,
                comment,
                inherited_from,
                get_signature: None,
                set_signature: None,
                signatures,
                overwrites: Vec::new(),
                sources,
                ty,
                default_value,
            }
        }
    }

    prop_compose! {
        fn arb_module()
            (
                name in arb_ident(),
                id in 0..100_000u64,
                children in vec(arb_item(), 0..4),
                comment in option::of(arb_comment()),
                extended_types in vec(arb_declaration_ref(), 0..2),
            )
        -> Module {
            Module {
                name,
                id,
                kind: 128,
                kind_string: "Class".to_string(),
                children,
                comment,
                extended_types,
                sources: Vec::new(),
            }
        }
    }

    prop_compose! {
        fn arb_package()
            (name in arb_ident(), children in vec(arb_module(), 0..3))
        -> Package {
            Package {
                name,
                id: 0,
                kind: 0,
                kind_string: "External module".to_string(),
                children,
                sources: Vec::new(),
            }
        }
    }

    proptest! {
        /// Arbitrary reflection trees survive a JSON roundtrip intact.
        #[test]
        fn test_package_roundtrip(package in arb_package()) {
            let json = serde_json::to_string(&package).expect("serialize");
            let parsed: Package =
                serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(parsed, package);
        }

        /// Types with nested targets survive a JSON roundtrip intact.
        #[test]
        fn test_type_roundtrip(ty in arb_type()) {
            let json = serde_json::to_string(&ty).expect("serialize");
            let parsed: Type = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(parsed, ty);
        }
    }

    // -----------------------------------------------------------------
    // Wire-format corner cases
    // -----------------------------------------------------------------

    /// Intrinsic types arrive without an id; absence is not an error.
    #[test]
    fn type_without_id_deserializes() {
        let ty: Type =
            serde_json::from_str(r#"{"type": "intrinsic", "name": "void"}"#)
                .expect("intrinsic type without id should deserialize");
        assert_eq!(ty.kind, "intrinsic");
        assert_eq!(ty.name, "void");
        assert_eq!(ty.id, None);
        assert!(ty.operator.is_none());
        assert!(ty.target.is_none());
    }

    /// A bare signature object in `getSignature` deserializes the same
    /// as a one-element array.
    #[test]
    fn get_signature_accepts_object_and_array() {
        let object_form = r#"{
            "name": "aspectRatio",
            "kindString": "Accessor",
            "getSignature": {
                "name": "aspectRatio",
                "type": {"type": "intrinsic", "name": "number"}
            }
        }"#;
        let array_form = r#"{
            "name": "aspectRatio",
            "kindString": "Accessor",
            "getSignature": [{
                "name": "aspectRatio",
                "type": {"type": "intrinsic", "name": "number"}
            }]
        }"#;

        let from_object: Item =
            serde_json::from_str(object_form).expect("object form");
        let from_array: Item =
            serde_json::from_str(array_form).expect("array form");

        assert_eq!(from_object, from_array);
        let signatures =
            from_object.get_signature.expect("getter should be present");
        assert_eq!(signatures.len(), 1);
        assert_eq!(signatures[0].return_type.name, "number");
    }

    /// Unknown generator fields (`groups`, future additions) are ignored.
    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{
            "name": "engine",
            "id": 0,
            "kind": 0,
            "kindString": "External module",
            "groups": [{"title": "Classes", "kind": 128}],
            "children": []
        }"#;
        let package: Package =
            serde_json::from_str(json).expect("unknown fields should be ignored");
        assert_eq!(package.name, "engine");
        assert!(package.children.is_empty());
    }

    /// Absent `children` means "no members", not a parse error.
    #[test]
    fn absent_children_deserializes_empty() {
        let module: Module = serde_json::from_str(
            r#"{"name": "MathUtil", "id": 7, "kind": 128, "kindString": "Class"}"#,
        )
        .expect("module without children should deserialize");
        assert!(module.children.is_empty());
    }

    /// Optional flags serialize compactly: a clear flag set is omitted.
    #[test]
    fn clear_flags_are_omitted() {
        let parameter = Parameter {
            name: "x".to_string(),
            id: 1,
            kind: 32768,
            kind_string: "Parameter".to_string(),
            comment: None,
            flags: Flags::default(),
            ty: Type {
                id: None,
                kind: "intrinsic".to_string(),
                name: "number".to_string(),
                operator: None,
                target: None,
            },
        };
        let json = serde_json::to_string(&parameter).expect("serialize");
        assert!(!json.contains("flags"));
    }
}
