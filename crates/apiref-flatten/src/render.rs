//! Pure display rendering for types and signatures.
//!
//! Rendering turns type nodes into the strings the reference pages
//! print: `number[]`, `keyof Entity`, `project(point: Vector3): Vector3`.
//! Every function here is pure and total over the closed discriminant
//! vocabulary; an unknown discriminant fails rather than rendering a
//! placeholder.

use apiref_schemas::{Parameter, Signature, Type};

use crate::classify::TypeKind;
use crate::error::FlattenError;

/// Renders a type node for display.
///
/// Array/indexed forms render their nested element type followed by the
/// form's suffix (`number[]`); operator-wrapped forms prefix the
/// operator (`keyof Entity`, `readonly number[]`); everything else
/// renders its display name directly.
pub(crate) fn type_display(ty: &Type) -> Result<String, FlattenError> {
    let kind = TypeKind::parse(&ty.kind)
        .ok_or_else(|| FlattenError::unknown_type_kind(ty))?;

    let rendered = match &ty.target {
        Some(target) => {
            format!("{}{}", type_display(&target.element_type)?, kind.suffix())
        }
        None => ty.name.clone(),
    };

    Ok(match &ty.operator {
        Some(operator) => format!("{operator} {rendered}"),
        None => rendered,
    })
}

/// Renders one callable signature as `name(params): Return`.
///
/// The owning item's name is used rather than the signature's so
/// overloads all render under the member they document. Optional
/// signatures render with `?` after the name.
pub(crate) fn call_display(
    name: &str,
    signature: &Signature,
) -> Result<String, FlattenError> {
    let parameters = signature
        .parameters
        .iter()
        .map(parameter_display)
        .collect::<Result<Vec<_>, _>>()?
        .join(", ");

    let optional = if signature.flags.is_optional { "?" } else { "" };
    let returns = type_display(&signature.return_type)?;

    Ok(format!("{name}{optional}({parameters}): {returns}"))
}

/// Renders one parameter as `name: Type`, with `?` when optional.
pub(crate) fn parameter_display(
    parameter: &Parameter,
) -> Result<String, FlattenError> {
    let optional = if parameter.flags.is_optional { "?" } else { "" };
    let ty = type_display(&parameter.ty)?;
    Ok(format!("{}{optional}: {ty}", parameter.name))
}

/// Renders a property or accessor as `name: Type`.
pub(crate) fn member_display(name: &str, ty: &str) -> String {
    format!("{name}: {ty}")
}
