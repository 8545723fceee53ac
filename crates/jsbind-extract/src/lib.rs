//! Binding extraction for jsbind.
//!
//! Walks a parsed C++ header ([`jsbind_ast::TranslationUnit`]) and fills in
//! the binding model: registered classes get their header, module, base
//! classes and bindable member functions; free scalar declarations become
//! module constants.
//!
//! ## Components
//!
//! - [`NameResolver`] - renders structured names to text
//! - [`TypeMapper`] - maps a type category onto a binding type
//! - [`SlotExtractor`] - maps a return or argument slot, with qualifiers
//! - [`FunctionExtractor`] - accepts or rejects a member function as a whole
//! - [`ClassVisitor`] / [`DeclarationVisitor`] - per-symbol binding
//! - [`HeaderPass`] - dispatch over a translation unit
//!
//! Nothing that cannot be bound is an error: it is left out of the model and
//! reported through [`ExtractionOutput`].
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use jsbind_ast::{AstBuilder, Symbol};
//! use jsbind_core::{BindingModule, BindingOptions, ClassEntry};
//! use jsbind_extract::{ExtractionContext, HeaderPass};
//! use jsbind_registry::BindingRegistry;
//!
//! let mut registry = BindingRegistry::new();
//! registry.register_class(ClassEntry::new("Node")).unwrap();
//! let mut module = BindingModule::new("Scene");
//! let options = BindingOptions::default();
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let get_name = b.method("GetName").returning(b.named("String"));
//! let node = b.class("Node").with_members(b.slice(&[Symbol::Function(get_name)]));
//! let unit = b.translation_unit("Scene/Node.h", &[Symbol::Class(node)]);
//!
//! let mut ctx = ExtractionContext::new(&mut registry, &mut module, &options);
//! let output = HeaderPass::new(&mut ctx).run(&unit);
//!
//! assert_eq!(output.stats.functions_bound, 1);
//! assert_eq!(registry.get_class("Node").unwrap().functions.len(), 1);
//! ```

mod class;
mod context;
mod declaration;
mod function;
mod header;
mod names;
mod output;
mod slot;
mod traversal;
mod type_mapper;

pub use class::ClassVisitor;
pub use context::ExtractionContext;
pub use declaration::DeclarationVisitor;
pub use function::FunctionExtractor;
pub use header::HeaderPass;
pub use names::NameResolver;
pub use output::{ExtractionOutput, ExtractionStats};
pub use slot::SlotExtractor;
pub use traversal::Traversal;
pub use type_mapper::TypeMapper;
