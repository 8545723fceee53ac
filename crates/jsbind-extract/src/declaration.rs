//! Declaration visitor.
//!
//! Free declarations of a plain integer or floating type are registered as
//! module constants. Everything else is ignored; the walk always continues.

use jsbind_ast::{Declaration, NativeType};

use crate::context::ExtractionContext;
use crate::names::NameResolver;
use crate::traversal::Traversal;

/// Visits namespace-scope declarations.
pub struct DeclarationVisitor<'c, 'a> {
    ctx: &'c mut ExtractionContext<'a>,
}

impl<'c, 'a> DeclarationVisitor<'c, 'a> {
    pub fn new(ctx: &'c mut ExtractionContext<'a>) -> Self {
        Self { ctx }
    }

    /// Register the declaration as a constant if it is a scalar. Always
    /// returns [`Traversal::Descend`].
    pub fn visit(&mut self, decl: &Declaration<'_>) -> Traversal {
        if Self::is_constant(decl) {
            let name = NameResolver::resolve(decl.name);
            tracing::trace!(constant = %name, "registering constant");
            if self.ctx.module_mut().register_constant(name) {
                self.ctx.stats_mut().constants_registered += 1;
            }
        }
        Traversal::Descend
    }

    /// Check if a declaration is a plain scalar.
    pub fn is_constant(decl: &Declaration<'_>) -> bool {
        match decl.ty.ty {
            NativeType::Integer(_) | NativeType::Float(_) => true,
            NativeType::Pointer(_)
            | NativeType::Reference { .. }
            | NativeType::Enum(_)
            | NativeType::Void
            | NativeType::Undefined
            | NativeType::Array { .. }
            | NativeType::Named(_)
            | NativeType::Function(_) => false,
        }
    }
}
