use crate::block::{ParameterBlock, SignatureBlock, TypeBlock};
use crate::model::{ParameterDescriptor, SignatureDescriptor};
use crate::render::render_optional;

/// `(a: A, b: B)`, or `()` when the signature carries no parameter list.
pub(crate) fn parameter_list(signature: &SignatureDescriptor) -> String {
    let parameters = signature
        .parameters
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|parameter| {
            format!(
                "{}: {}",
                parameter.name,
                render_optional(parameter.type_.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("({parameters})")
}

/// Method-style signature block: full descriptor, return-typed `as_string`, parameter
/// detail and `return_type`. Shared by methods, functions and accessors.
pub(crate) fn callable_block(signature: &SignatureDescriptor) -> SignatureBlock {
    let returns = TypeBlock::describe(signature.type_.as_ref());
    let as_string = format!(
        "{}{}: {}",
        signature.name,
        parameter_list(signature),
        returns.value
    );

    SignatureBlock {
        type_: returns.clone(),
        as_string,
        params: signature
            .parameters
            .as_ref()
            .map(|parameters| parameters.iter().map(parameter_block).collect()),
        return_type: Some(returns),
        comment: signature.comment.clone(),
    }
}

fn parameter_block(parameter: &ParameterDescriptor) -> ParameterBlock {
    ParameterBlock {
        name: parameter.name.clone(),
        type_: TypeBlock::describe(parameter.type_.as_ref()),
        default_value: parameter.default_value.clone(),
        comment: parameter.comment.clone(),
    }
}
