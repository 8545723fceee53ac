//! C++ symbol tree for jsbind.
//!
//! This crate models the part of a parsed C++ header that binding
//! extraction needs. It includes:
//! - Structured names (identifiers, destructors, operators, qualified names)
//! - Type categories with their specifiers
//! - Symbols: namespaces, classes, functions, declarations, arguments,
//!   templates and enums
//! - An arena-backed builder for assembling trees
//!
//! All nodes are `Copy` and borrow from a `bumpalo::Bump` arena for the
//! `'ast` lifetime. The tree is read-only once built.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use jsbind_ast::{AstBuilder, Symbol};
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//!
//! let unit = b.translation_unit(
//!     "Scene/Node.h",
//!     &[b.namespace("Atomic", &[Symbol::Class(b.class("Node"))])],
//! );
//! assert_eq!(unit.file_name, "Scene/Node.h");
//! ```

mod builder;
mod name;
mod symbol;
mod types;

pub use builder::AstBuilder;
pub use name::Name;
pub use symbol::{
    Argument, BaseClass, ClassDecl, Declaration, EnumDecl, FunctionDecl, NamespaceDecl, Symbol,
    TemplateDecl, Visibility,
};
pub use types::{FloatKind, FullySpecifiedType, IntegerKind, NativeType, Specifiers};

/// One parsed header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslationUnit<'ast> {
    /// Header path as reported by the front end.
    pub file_name: &'ast str,
    /// The anonymous global namespace.
    pub global: NamespaceDecl<'ast>,
}

impl<'ast> TranslationUnit<'ast> {
    /// Top-level symbols of the global namespace.
    pub fn symbols(&self) -> &'ast [Symbol<'ast>] {
        self.global.members
    }
}
