//! jsbind - binding model extraction from parsed C++ headers.
//!
//! Given a parsed header and a registry of classes and enums declared for
//! binding, jsbind builds the model a script binding generator consumes:
//! which classes belong to a module, their resolved base classes, their
//! bindable member functions with mapped signatures, and the free scalar
//! constants the header defines.
//!
//! The work is split across crates:
//!
//! - [`ast`] - the arena-allocated C++ symbol tree
//! - [`model`] - the binding model, errors, diagnostics and options
//! - [`registry`] - the class and enum registry
//! - [`extract`] - the extraction pass
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use jsbind::prelude::*;
//!
//! let mut registry = BindingRegistry::new();
//! jsbind::declare_classes(&mut registry, ["Node", "Component"]).unwrap();
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let node = b
//!     .class("Node")
//!     .with_bases(b.slice(&[b.base("Animatable")]))
//!     .with_members(b.slice(&[Symbol::Function(
//!         b.method("GetComponent").returning(b.pointer(b.named("Component"))),
//!     )]));
//! let unit = b.translation_unit("Scene/Node.h", &[Symbol::Class(node)]);
//!
//! let mut module = BindingModule::new("Scene");
//! let output = jsbind::bind_translation_unit(
//!     &unit,
//!     &mut registry,
//!     &mut module,
//!     &BindingOptions::default(),
//! );
//!
//! assert_eq!(output.stats.functions_bound, 1);
//! assert_eq!(output.diagnostics.len(), 1);
//! ```

mod error;

pub use error::{Error, Result};

pub use jsbind_ast as ast;
pub use jsbind_core as model;
pub use jsbind_extract as extract;
pub use jsbind_registry as registry;

use jsbind_ast::TranslationUnit;
use jsbind_core::{BindingModule, BindingOptions, ClassEntry, EnumEntry, TypeHash};
use jsbind_extract::{ExtractionContext, ExtractionOutput, HeaderPass};
use jsbind_registry::BindingRegistry;

pub mod prelude {
    pub use jsbind_ast::{
        AstBuilder, ClassDecl, Declaration, FullySpecifiedType, FunctionDecl, Name, NativeType,
        Symbol, TranslationUnit, Visibility,
    };
    pub use jsbind_core::{
        BindingModule, BindingOptions, BindingType, ClassEntry, Diagnostics, EnumEntry,
        FunctionEntry, FunctionRole, Parameter, PrimitiveKind, Rejection, SlotType, TypeHash,
        Unsupported,
    };
    pub use jsbind_extract::{ExtractionContext, ExtractionOutput, HeaderPass, Traversal};
    pub use jsbind_registry::{BindingRegistry, TypeRef};

    pub use crate::{Error, Result};
}

/// Bind one parsed header into `module`, enriching the registered classes.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn bind_translation_unit(
    unit: &TranslationUnit<'_>,
    registry: &mut BindingRegistry,
    module: &mut BindingModule,
    options: &BindingOptions,
) -> ExtractionOutput {
    let mut ctx = ExtractionContext::new(registry, module, options);
    HeaderPass::new(&mut ctx).run(unit)
}

/// Bind several headers of the same module in order.
pub fn bind_headers<'u, 'ast: 'u>(
    units: impl IntoIterator<Item = &'u TranslationUnit<'ast>>,
    registry: &mut BindingRegistry,
    module: &mut BindingModule,
    options: &BindingOptions,
) -> Vec<ExtractionOutput> {
    let mut ctx = ExtractionContext::new(registry, module, options);
    let outputs: Vec<_> = units
        .into_iter()
        .map(|unit| HeaderPass::new(&mut ctx).run(unit))
        .collect();

    tracing::debug!(
        module = %ctx.module().name,
        headers = outputs.len(),
        classes = ctx.module().classes().len(),
        constants = ctx.module().constants().len(),
        "module bound"
    );
    outputs
}

/// Register classes declared for binding by name.
pub fn declare_classes<I, S>(registry: &mut BindingRegistry, names: I) -> Result<Vec<TypeHash>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(|name| Ok(registry.register_class(ClassEntry::new(name))?))
        .collect()
}

/// Register an enum declared for binding, owned by `module`.
pub fn declare_enum<I, S>(
    registry: &mut BindingRegistry,
    module: &mut BindingModule,
    name: &str,
    values: I,
) -> Result<TypeHash>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let entry = EnumEntry::new(name)
        .in_module(module.name.clone())
        .with_values(values);
    let hash = registry.register_enum(entry)?;
    module.add_enum(hash);
    Ok(hash)
}

/// Load binding options from TOML.
pub fn load_options(source: &str) -> Result<BindingOptions> {
    Ok(BindingOptions::from_toml_str(source)?)
}
