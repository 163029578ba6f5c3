use super::DeclarationSerializer;
use crate::block::{Fragment, TypeAliasFragment, TypeBlock, TypeParamBlock};
use crate::model::DeclarationNode;

/// `type Name<T, U> = Target`
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeAliasSerializer;

impl DeclarationSerializer for TypeAliasSerializer {
    fn serialize(&self, declaration: &DeclarationNode) -> Fragment {
        let type_params: Option<Vec<TypeParamBlock>> =
            declaration.generics().map(|parameters| {
                parameters
                    .iter()
                    .map(|parameter| TypeParamBlock {
                        name: parameter.name.clone(),
                    })
                    .collect()
            });

        let generics = match &type_params {
            Some(params) => format!(
                "<{}>",
                params
                    .iter()
                    .map(|param| param.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            None => String::new(),
        };

        let target = TypeBlock::describe(declaration.type_.as_ref());
        let as_string = format!("type {}{generics} = {}", declaration.name, target.value);

        Fragment::TypeAlias(TypeAliasFragment {
            type_params,
            type_: target,
            as_string,
        })
    }
}
