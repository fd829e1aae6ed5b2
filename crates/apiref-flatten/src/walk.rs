//! The flatten walk: reflection tree in, ordered entries out.
//!
//! This module contains the core transform that turns a [`Package`]
//! reflection tree into the flat, ordered entry list the reference
//! pages render. The walk visits modules, items, and signatures in
//! input order, which mirrors declaration order in the original source;
//! the output sequence preserves it.
//!
//! The walk never mutates its input and performs no I/O; repeated calls
//! on the same tree produce identical output. A single malformed node
//! aborts the whole call: partial reference pages are worse than a
//! build-time failure.

use apiref_schemas::{
    Entry, EntryDetail, Item, Module, Package, ParameterEntry, Signature, Type,
};
use tracing::debug;

use crate::classify::{ItemShape, classify};
use crate::error::FlattenError;
use crate::render::{call_display, member_display, type_display};

/// Options controlling the flatten walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenOptions {
    /// Skip members carrying an `inheritedFrom` reference, documenting
    /// only what each class declares itself.
    pub own_members_only: bool,
}

/// Flattens a package reflection tree into renderable entries.
///
/// Emits, for each module in the package, one entry per documentable
/// member: one per overload signature for callables, one per property,
/// one per accessor. Container items (nested namespaces/modules) emit
/// nothing. Entry order follows the input's module, item, and signature
/// order.
///
/// # Errors
///
/// Returns a schema-format [`FlattenError`] if any item matches no
/// recognized shape, or any type node carries an unknown discriminant.
/// No partial output is produced.
pub fn flatten(
    package: &Package,
    options: &FlattenOptions,
) -> Result<Vec<Entry>, FlattenError> {
    let mut entries = Vec::new();

    for module in &package.children {
        let before = entries.len();
        for item in &module.children {
            let inherited = item.inherited_from.is_some();
            if inherited && options.own_members_only {
                continue;
            }

            match classify(item)? {
                ItemShape::Callable(signatures) => {
                    for signature in signatures {
                        entries.push(call_entry(
                            module, item, signature, inherited,
                        )?);
                    }
                }
                ItemShape::Property(ty) => {
                    entries.push(property_entry(module, item, ty, inherited)?);
                }
                ItemShape::Accessor { get, set } => {
                    entries.push(accessor_entry(
                        module, item, get, set, inherited,
                    )?);
                }
                ItemShape::Container => {}
            }
        }
        debug!(
            module = %module.name,
            entries = entries.len() - before,
            "flattened module"
        );
    }

    Ok(entries)
}

/// Builds one entry for a callable signature.
///
/// The signature's comment wins; the item's own comment is the
/// fallback for signatures the generator left uncommented.
fn call_entry(
    module: &Module,
    item: &Item,
    signature: &Signature,
    inherited: bool,
) -> Result<Entry, FlattenError> {
    let parameters = signature
        .parameters
        .iter()
        .map(|parameter| {
            Ok(ParameterEntry {
                name: parameter.name.clone(),
                ty: type_display(&parameter.ty)?,
                optional: parameter.flags.is_optional,
                comment: parameter.comment.clone(),
            })
        })
        .collect::<Result<Vec<_>, FlattenError>>()?;

    let returns = type_display(&signature.return_type)?;
    let comment = signature.comment.clone().or_else(|| item.comment.clone());

    Ok(Entry {
        module: module.name.clone(),
        name: item.name.clone(),
        id: item.id,
        kind: item.kind_string.clone(),
        display: call_display(&item.name, signature)?,
        inherited,
        comment,
        sources: item.sources.clone(),
        detail: EntryDetail::Call {
            parameters,
            returns,
        },
    })
}

/// Builds one entry for a property item.
fn property_entry(
    module: &Module,
    item: &Item,
    ty: &Type,
    inherited: bool,
) -> Result<Entry, FlattenError> {
    let rendered = type_display(ty)?;

    Ok(Entry {
        module: module.name.clone(),
        name: item.name.clone(),
        id: item.id,
        kind: item.kind_string.clone(),
        display: member_display(&item.name, &rendered),
        inherited,
        comment: item.comment.clone(),
        sources: item.sources.clone(),
        detail: EntryDetail::Property {
            ty: rendered,
            default_value: item.default_value.clone(),
        },
    })
}

/// Builds one entry for an accessor, combining whichever get/set
/// signatures are present.
///
/// The displayed value type comes from the getter's return type,
/// falling back to the setter's first parameter.
fn accessor_entry(
    module: &Module,
    item: &Item,
    get: Option<&Signature>,
    set: Option<&Signature>,
    inherited: bool,
) -> Result<Entry, FlattenError> {
    let getter = get
        .map(|signature| type_display(&signature.return_type))
        .transpose()?;
    let setter = set
        .and_then(|signature| signature.parameters.first())
        .map(|parameter| type_display(&parameter.ty))
        .transpose()?;

    let display = match getter.as_deref().or(setter.as_deref()) {
        Some(value_type) => member_display(&item.name, value_type),
        None => item.name.clone(),
    };

    let comment = item
        .comment
        .clone()
        .or_else(|| get.and_then(|signature| signature.comment.clone()))
        .or_else(|| set.and_then(|signature| signature.comment.clone()));

    Ok(Entry {
        module: module.name.clone(),
        name: item.name.clone(),
        id: item.id,
        kind: item.kind_string.clone(),
        display,
        inherited,
        comment,
        sources: item.sources.clone(),
        detail: EntryDetail::Accessor { getter, setter },
    })
}
