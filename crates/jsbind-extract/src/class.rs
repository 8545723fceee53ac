//! Class visitor.
//!
//! Binds a class declaration onto its pre-registered [`ClassEntry`]:
//!
//! 1. Unregistered classes are skipped without looking at their members
//! 2. The entry is tagged with its module and header and added to the module
//! 3. Base classes are resolved; unregistered bases are dropped with a warning
//! 4. Public member functions go through the [`FunctionExtractor`]
//!
//! Members are walked here, so the visitor never asks the walker to descend.
//!
//! [`ClassEntry`]: jsbind_core::ClassEntry

use jsbind_ast::{ClassDecl, FunctionDecl, Symbol};
use jsbind_core::{Diagnostic, TypeHash};

use crate::context::ExtractionContext;
use crate::function::FunctionExtractor;
use crate::names::NameResolver;
use crate::traversal::Traversal;

/// Visits class declarations.
pub struct ClassVisitor<'c, 'a> {
    ctx: &'c mut ExtractionContext<'a>,
}

impl<'c, 'a> ClassVisitor<'c, 'a> {
    pub fn new(ctx: &'c mut ExtractionContext<'a>) -> Self {
        Self { ctx }
    }

    /// Bind a class. Always returns [`Traversal::SkipChildren`].
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn visit(&mut self, class: &ClassDecl<'_>) -> Traversal {
        let name = NameResolver::resolve_unqualified(class.name);

        let Some(hash) = self.ctx.registry().get_class(&name).map(|c| c.type_hash) else {
            tracing::trace!(class = %name, "class not in bindings, skipping");
            self.ctx.stats_mut().classes_skipped += 1;
            return Traversal::SkipChildren;
        };

        tracing::trace!(class = %name, header = %self.ctx.header(), "binding class");
        self.attach(hash);
        self.resolve_bases(&name, hash, class);
        self.visit_members(hash, class.members);

        Traversal::SkipChildren
    }

    fn attach(&mut self, hash: TypeHash) {
        let module = self.ctx.module().name.clone();
        let header = self.ctx.header().to_string();
        if let Some(entry) = self.ctx.registry_mut().get_class_by_hash_mut(hash) {
            entry.set_origin(module, header);
        }
        if self.ctx.module_mut().add_class(hash) {
            self.ctx.stats_mut().classes_bound += 1;
        }
    }

    fn resolve_bases(&mut self, derived: &str, hash: TypeHash, class: &ClassDecl<'_>) {
        for base in class.base_classes {
            let base_name = NameResolver::resolve_unqualified(base.name);
            let resolved = self
                .ctx
                .registry()
                .get_class(&base_name)
                .map(|entry| entry.type_hash);

            match resolved {
                Some(base_hash) => {
                    if let Some(entry) = self.ctx.registry_mut().get_class_by_hash_mut(hash) {
                        entry.add_base_class(base_hash);
                    }
                }
                None => {
                    let written = NameResolver::resolve(base.name);
                    self.ctx.warn(Diagnostic::unresolved_base(derived, written));
                    self.ctx.stats_mut().bases_unresolved += 1;
                }
            }
        }
    }

    fn visit_members(&mut self, hash: TypeHash, members: &[Symbol<'_>]) {
        for member in members {
            if let Some(function) = member.as_function() {
                self.visit_function(hash, member, function);
            }
        }
    }

    fn visit_function(&mut self, hash: TypeHash, member: &Symbol<'_>, function: &FunctionDecl<'_>) {
        if function.is_pure_virtual {
            if let Some(entry) = self.ctx.registry_mut().get_class_by_hash_mut(hash) {
                entry.mark_abstract();
            }
        }

        if !member.is_public() {
            return;
        }

        let result = {
            let registry = self.ctx.registry();
            let Some(owner) = registry.get_class_by_hash(hash) else {
                return;
            };
            FunctionExtractor::new(registry, self.ctx.options()).extract(function, owner)
        };

        match result {
            Ok(entry) => {
                if let Some(owner) = self.ctx.registry_mut().get_class_by_hash_mut(hash) {
                    owner.add_function(entry);
                    self.ctx.stats_mut().functions_bound += 1;
                }
            }
            Err(rejection) => self.ctx.record_rejection(rejection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;
    use jsbind_ast::{AstBuilder, Declaration, IntegerKind, Visibility};
    use jsbind_core::{
        BindingModule, BindingOptions, BindingType, ClassEntry, FunctionRole, Parameter,
        PrimitiveKind, SlotType,
    };
    use jsbind_registry::BindingRegistry;
    use pretty_assertions::assert_eq;

    fn setup_registry(names: &[&str]) -> BindingRegistry {
        let mut registry = BindingRegistry::new();
        for name in names {
            registry.register_class(ClassEntry::new(*name)).unwrap();
        }
        registry
    }

    #[test]
    fn unregistered_class_is_skipped() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut registry = setup_registry(&[]);
        let mut module = BindingModule::new("Scene");
        let options = BindingOptions::default();
        let mut ctx = ExtractionContext::new(&mut registry, &mut module, &options);
        ctx.begin_header("Scene/Hidden.h");

        let class = b
            .class("Hidden")
            .with_bases(b.slice(&[b.base("Missing")]))
            .with_members(b.slice(&[Symbol::Function(b.method("Run"))]));

        let traversal = ClassVisitor::new(&mut ctx).visit(&class);
        assert_eq!(traversal, Traversal::SkipChildren);

        let output = ctx.finish();
        assert_eq!(output.stats.classes_skipped, 1);
        assert!(output.diagnostics.is_empty());
        assert!(module.classes().is_empty());
    }

    #[test]
    fn registered_class_gets_origin() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut registry = setup_registry(&["Node"]);
        let mut module = BindingModule::new("Scene");
        let options = BindingOptions::default();

        {
            let mut ctx = ExtractionContext::new(&mut registry, &mut module, &options);
            ctx.begin_header("Scene/Node.h");
            ClassVisitor::new(&mut ctx).visit(&b.class("Node"));
        }

        let node = registry.get_class("Node").unwrap();
        assert_eq!(node.module.as_deref(), Some("Scene"));
        assert_eq!(node.header.as_deref(), Some("Scene/Node.h"));
        assert_eq!(module.classes(), [node.type_hash]);
    }

    #[test]
    fn unresolved_base_is_dropped_with_one_warning() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut registry = setup_registry(&["C", "B1"]);
        let mut module = BindingModule::new("Scene");
        let options = BindingOptions::default();

        let class = b
            .class("C")
            .with_bases(b.slice(&[b.base("B1"), b.base("B2")]));

        let output = {
            let mut ctx = ExtractionContext::new(&mut registry, &mut module, &options);
            ctx.begin_header("C.h");
            ClassVisitor::new(&mut ctx).visit(&class);
            ctx.finish()
        };

        let c = registry.get_class("C").unwrap();
        assert_eq!(c.base_classes, vec![TypeHash::from_name("B1")]);
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(
            output.diagnostics.iter().next(),
            Some(&Diagnostic::unresolved_base("C", "B2"))
        );
        assert!(module.has_class(c.type_hash));
    }

    #[test]
    fn vector3_scenario() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut registry = setup_registry(&["Vector3"]);
        let mut module = BindingModule::new("Math");
        let options = BindingOptions::default();

        let ctor = b.method("Vector3").with_arguments(b.slice(&[
            b.argument("x", b.float()),
            b.argument("y", b.float()),
            b.argument("z", b.float()),
        ]));
        let internal = b
            .method("Internal")
            .returning(b.void())
            .with_visibility(Visibility::Private);
        let class = b.class("Vector3").with_members(b.slice(&[
            Symbol::Declaration(b.variable("x_", b.float())),
            Symbol::Function(ctor),
            Symbol::Function(internal),
        ]));

        let output = {
            let mut ctx = ExtractionContext::new(&mut registry, &mut module, &options);
            ctx.begin_header("Math/Vector3.h");
            ClassVisitor::new(&mut ctx).visit(&class);
            ctx.finish()
        };

        let float = SlotType::value(BindingType::primitive(PrimitiveKind::Float));
        let vector3 = registry.get_class("Vector3").unwrap();
        assert_eq!(vector3.functions.len(), 1);
        assert_eq!(vector3.functions[0].role, FunctionRole::Constructor);
        assert_eq!(
            vector3.functions[0].params,
            vec![
                Parameter::new("x", float),
                Parameter::new("y", float),
                Parameter::new("z", float),
            ]
        );
        assert!(vector3.find_function("Internal").is_none());
        assert_eq!(output.stats.functions_bound, 1);
        assert_eq!(output.stats.functions_rejected, 0);
    }

    #[test]
    fn declared_methods_are_members() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut registry = setup_registry(&["Node"]);
        let mut module = BindingModule::new("Scene");
        let options = BindingOptions::default();

        let get_parent = b.method("GetParent").returning(b.pointer(b.named("Node")));
        let get_raw = b.method("GetRaw").returning(b.pointer(b.int()));
        let class = b.class("Node").with_members(b.slice(&[
            b.declared_method(get_parent),
            b.declared_method(get_raw),
        ]));

        let output = {
            let mut ctx = ExtractionContext::new(&mut registry, &mut module, &options);
            ctx.begin_header("Scene/Node.h");
            ClassVisitor::new(&mut ctx).visit(&class);
            ctx.finish()
        };

        let node = registry.get_class("Node").unwrap();
        let parent = node.find_function("GetParent").unwrap();
        assert_eq!(
            parent.return_type,
            Some(SlotType::pointer(BindingType::Class(node.type_hash)))
        );
        assert!(node.find_function("GetRaw").is_none());
        assert!(output.rejection_for("GetRaw").is_some());
    }

    #[test]
    fn pure_virtual_marks_abstract_even_when_private() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut registry = setup_registry(&["Drawable"]);
        let mut module = BindingModule::new("Graphics");
        let options = BindingOptions::default();

        let draw = b
            .method("Draw")
            .pure_virtual()
            .with_visibility(Visibility::Private);
        let class = b
            .class("Drawable")
            .with_members(b.slice(&[Symbol::Function(draw)]));

        {
            let mut ctx = ExtractionContext::new(&mut registry, &mut module, &options);
            ctx.begin_header("Graphics/Drawable.h");
            ClassVisitor::new(&mut ctx).visit(&class);
        }

        let drawable = registry.get_class("Drawable").unwrap();
        assert!(drawable.is_abstract);
        assert!(drawable.functions.is_empty());
    }

    #[test]
    fn abstract_flag_is_sticky() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut registry = setup_registry(&["Shape"]);
        let mut module = BindingModule::new("Graphics");
        let options = BindingOptions::default();

        let area = b.method("Area").returning(b.float()).pure_virtual();
        let name = b.method("GetName").returning(b.named("String"));
        let class = b.class("Shape").with_members(b.slice(&[
            Symbol::Function(area),
            Symbol::Function(name),
        ]));

        {
            let mut ctx = ExtractionContext::new(&mut registry, &mut module, &options);
            ctx.begin_header("Graphics/Shape.h");
            ClassVisitor::new(&mut ctx).visit(&class);
        }

        let shape = registry.get_class("Shape").unwrap();
        assert!(shape.is_abstract);
        assert_eq!(shape.functions.len(), 2);
    }

    #[test]
    fn rejected_function_does_not_stop_siblings() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut registry = setup_registry(&["Node"]);
        let mut module = BindingModule::new("Scene");
        let options = BindingOptions::default();

        let log = b.method("Log").variadic();
        let plus = jsbind_ast::FunctionDecl::new(b.operator_name("+")).returning(b.named("Node"));
        let get_id = b.method("GetID").returning(b.unsigned(IntegerKind::Int));
        let class = b.class("Node").with_members(b.slice(&[
            Symbol::Function(log),
            Symbol::Function(plus),
            Symbol::Declaration(Declaration::new(b.name("id_"), b.int())),
            Symbol::Function(get_id),
        ]));

        let output = {
            let mut ctx = ExtractionContext::new(&mut registry, &mut module, &options);
            ctx.begin_header("Scene/Node.h");
            ClassVisitor::new(&mut ctx).visit(&class);
            ctx.finish()
        };

        let node = registry.get_class("Node").unwrap();
        let names: Vec<_> = node.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["GetID"]);
        assert_eq!(output.stats.functions_rejected, 2);
        assert_eq!(output.rejections.len(), 2);
    }
}
