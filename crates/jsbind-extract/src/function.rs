//! Member function extraction.
//!
//! A function is accepted whole or not at all. Checks run in order and the
//! first failure decides the [`Rejection`]:
//!
//! 1. Variadic functions
//! 2. Operator overloads (name starts with the operator prefix)
//! 3. A non-void return type that cannot be mapped
//! 4. An argument that cannot be mapped, or a non-argument symbol in the
//!    argument list

use jsbind_ast::FunctionDecl;
use jsbind_core::{BindingOptions, ClassEntry, FunctionEntry, FunctionRole, Rejection};
use jsbind_registry::BindingRegistry;

use crate::names::NameResolver;
use crate::slot::SlotExtractor;
use crate::type_mapper::TypeMapper;

/// Builds [`FunctionEntry`] values from function declarations.
#[derive(Clone, Copy)]
pub struct FunctionExtractor<'r> {
    slots: SlotExtractor<'r>,
    options: &'r BindingOptions,
}

impl<'r> FunctionExtractor<'r> {
    pub fn new(registry: &'r BindingRegistry, options: &'r BindingOptions) -> Self {
        Self {
            slots: SlotExtractor::new(TypeMapper::new(registry, options)),
            options,
        }
    }

    /// Extract a member function of `owner`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn extract(
        &self,
        function: &FunctionDecl<'_>,
        owner: &ClassEntry,
    ) -> Result<FunctionEntry, Rejection> {
        let name = NameResolver::resolve(function.name);

        if function.is_variadic {
            return Err(Rejection::Variadic { function: name });
        }
        if self.options.is_operator_name(&name) {
            return Err(Rejection::Operator { function: name });
        }

        let role = Self::role_of(&name, owner);

        let return_slot = match function.return_type {
            Some(ty) if !ty.ty.is_void() => match self.slots.extract_slot(&ty) {
                Ok(slot) => Some(slot),
                Err(cause) => {
                    return Err(Rejection::UnsupportedReturn {
                        function: name,
                        cause,
                    });
                }
            },
            _ => None,
        };

        let mut params = Vec::with_capacity(function.arguments.len());
        for (index, symbol) in function.arguments.iter().enumerate() {
            let Some(argument) = symbol.as_argument() else {
                return Err(Rejection::MalformedSignature {
                    function: name,
                    index,
                });
            };
            match self.slots.extract_argument(argument) {
                Ok(param) => params.push(param),
                Err(cause) => {
                    return Err(Rejection::UnsupportedParameter {
                        function: name,
                        index,
                        cause,
                    });
                }
            }
        }

        let mut entry = FunctionEntry::new(name, owner.type_hash).with_role(role);
        entry.return_type = return_slot;
        entry.params = params;
        Ok(entry)
    }

    fn role_of(name: &str, owner: &ClassEntry) -> FunctionRole {
        if name == owner.name {
            FunctionRole::Constructor
        } else if name.starts_with('~') {
            FunctionRole::Destructor
        } else {
            FunctionRole::Normal
        }
    }
}
