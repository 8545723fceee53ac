//! Arena-backed construction helpers.
//!
//! [`AstBuilder`] allocates names, types and symbol slices into a
//! `bumpalo::Bump` so a front-end adapter (or a test) can assemble a
//! [`TranslationUnit`] without managing lifetimes by hand.
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
//! // class Vector3 { public: Vector3(float x, float y, float z); };
//! let ctor = b.method("Vector3").with_arguments(b.slice(&[
//!     b.argument("x", b.float()),
//!     b.argument("y", b.float()),
//!     b.argument("z", b.float()),
//! ]));
//! let class = b.class("Vector3").with_members(b.slice(&[Symbol::Function(ctor)]));
//! let unit = b.translation_unit("Math/Vector3.h", &[Symbol::Class(class)]);
//!
//! assert_eq!(unit.global.members.len(), 1);
//! ```

use bumpalo::Bump;

use crate::{
    Argument, BaseClass, ClassDecl, Declaration, EnumDecl, FloatKind, FullySpecifiedType,
    FunctionDecl, IntegerKind, Name, NamespaceDecl, NativeType, Specifiers, Symbol, TemplateDecl,
    TranslationUnit, Visibility,
};

/// Allocates AST nodes into an arena.
#[derive(Clone, Copy)]
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
}

impl<'ast> AstBuilder<'ast> {
    pub fn new(arena: &'ast Bump) -> Self {
        Self { arena }
    }

    pub fn arena(&self) -> &'ast Bump {
        self.arena
    }

    /// Copy a string into the arena.
    pub fn str(&self, s: &str) -> &'ast str {
        self.arena.alloc_str(s)
    }

    /// Copy a slice into the arena.
    pub fn slice<T: Copy>(&self, items: &[T]) -> &'ast [T] {
        self.arena.alloc_slice_copy(items)
    }

    // ==========================================================================
    // Names
    // ==========================================================================

    /// Build an identifier, splitting `A::B` into a qualified name.
    pub fn name(&self, id: &str) -> &'ast Name<'ast> {
        let mut parts = id.split("::").filter(|p| !p.is_empty());
        let mut current: &'ast Name<'ast> = match parts.next() {
            Some(first) => self.arena.alloc(Name::Identifier(self.str(first))),
            None => self.arena.alloc(Name::Anonymous),
        };
        for part in parts {
            let name: &'ast Name<'ast> = self.arena.alloc(Name::Identifier(self.str(part)));
            current = self.arena.alloc(Name::Qualified {
                base: current,
                name,
            });
        }
        current
    }

    pub fn destructor_name(&self, class: &str) -> &'ast Name<'ast> {
        self.arena.alloc(Name::Destructor(self.str(class)))
    }

    pub fn operator_name(&self, op: &str) -> &'ast Name<'ast> {
        self.arena.alloc(Name::Operator(self.str(op)))
    }

    pub fn conversion_name(&self, ty: &str) -> &'ast Name<'ast> {
        self.arena.alloc(Name::Conversion(self.str(ty)))
    }

    pub fn template_name(&self, name: &str, args: &[&str]) -> &'ast Name<'ast> {
        let args: Vec<&'ast str> = args.iter().map(|a| self.str(a)).collect();
        self.arena.alloc(Name::TemplateId {
            name: self.str(name),
            args: self.slice(&args),
        })
    }

    // ==========================================================================
    // Types
    // ==========================================================================

    /// Allocate a type category and wrap it without specifiers.
    pub fn ty(&self, native: NativeType<'ast>) -> FullySpecifiedType<'ast> {
        FullySpecifiedType::new(self.arena.alloc(native))
    }

    pub fn void(&self) -> FullySpecifiedType<'ast> {
        self.ty(NativeType::Void)
    }

    pub fn integer(&self, kind: IntegerKind) -> FullySpecifiedType<'ast> {
        self.ty(NativeType::Integer(kind))
    }

    pub fn int(&self) -> FullySpecifiedType<'ast> {
        self.integer(IntegerKind::Int)
    }

    pub fn bool(&self) -> FullySpecifiedType<'ast> {
        self.integer(IntegerKind::Bool)
    }

    /// `unsigned <kind>`
    pub fn unsigned(&self, kind: IntegerKind) -> FullySpecifiedType<'ast> {
        self.integer(kind).with(Specifiers::UNSIGNED)
    }

    pub fn float(&self) -> FullySpecifiedType<'ast> {
        self.ty(NativeType::Float(FloatKind::Float))
    }

    pub fn double(&self) -> FullySpecifiedType<'ast> {
        self.ty(NativeType::Float(FloatKind::Double))
    }

    /// A bare `unsigned` with no base type.
    pub fn bare_unsigned(&self) -> FullySpecifiedType<'ast> {
        self.ty(NativeType::Undefined).with(Specifiers::UNSIGNED)
    }

    /// A bare `signed` with no base type.
    pub fn bare_signed(&self) -> FullySpecifiedType<'ast> {
        self.ty(NativeType::Undefined).with(Specifiers::SIGNED)
    }

    pub fn undefined(&self) -> FullySpecifiedType<'ast> {
        self.ty(NativeType::Undefined)
    }

    pub fn named(&self, name: &str) -> FullySpecifiedType<'ast> {
        self.ty(NativeType::Named(self.name(name)))
    }

    pub fn enum_type(&self, name: &str) -> FullySpecifiedType<'ast> {
        self.ty(NativeType::Enum(self.name(name)))
    }

    pub fn pointer(&self, element: FullySpecifiedType<'ast>) -> FullySpecifiedType<'ast> {
        self.ty(NativeType::Pointer(element))
    }

    pub fn reference(&self, element: FullySpecifiedType<'ast>) -> FullySpecifiedType<'ast> {
        self.ty(NativeType::Reference {
            element,
            is_rvalue: false,
        })
    }

    pub fn array(
        &self,
        element: FullySpecifiedType<'ast>,
        size: Option<u32>,
    ) -> FullySpecifiedType<'ast> {
        self.ty(NativeType::Array { element, size })
    }

    pub fn function_type(&self, function: FunctionDecl<'ast>) -> FullySpecifiedType<'ast> {
        self.ty(NativeType::Function(self.arena.alloc(function)))
    }

    // ==========================================================================
    // Symbols
    // ==========================================================================

    pub fn argument(&self, name: &str, ty: FullySpecifiedType<'ast>) -> Symbol<'ast> {
        Symbol::Argument(Argument::new(Some(self.name(name)), ty))
    }

    pub fn argument_with_default(
        &self,
        name: &str,
        ty: FullySpecifiedType<'ast>,
        default: &str,
    ) -> Symbol<'ast> {
        let argument = Argument::new(Some(self.name(name)), ty);
        Symbol::Argument(argument.with_initializer(self.str(default)))
    }

    pub fn unnamed_argument(&self, ty: FullySpecifiedType<'ast>) -> Symbol<'ast> {
        Symbol::Argument(Argument::new(None, ty))
    }

    /// A public function with no return type and no arguments.
    pub fn method(&self, name: &str) -> FunctionDecl<'ast> {
        FunctionDecl::new(self.name(name))
    }

    pub fn destructor(&self, class: &str) -> FunctionDecl<'ast> {
        FunctionDecl::new(self.destructor_name(class))
    }

    /// A member function declared without a body, as a function-typed declaration.
    pub fn declared_method(&self, function: FunctionDecl<'ast>) -> Symbol<'ast> {
        Symbol::Declaration(Declaration {
            name: function.name,
            visibility: function.visibility,
            ty: self.function_type(function),
            initializer: None,
        })
    }

    /// A public variable declaration.
    pub fn variable(&self, name: &str, ty: FullySpecifiedType<'ast>) -> Declaration<'ast> {
        Declaration::new(self.name(name), ty)
    }

    pub fn base(&self, name: &str) -> BaseClass<'ast> {
        BaseClass::new(self.name(name))
    }

    pub fn class(&self, name: &str) -> ClassDecl<'ast> {
        ClassDecl::new(self.name(name))
    }

    pub fn namespace(&self, name: &str, members: &[Symbol<'ast>]) -> Symbol<'ast> {
        let namespace = NamespaceDecl::new(Some(self.name(name)));
        Symbol::Namespace(namespace.with_members(self.slice(members)))
    }

    pub fn template(&self, parameters: &[&str], declaration: Symbol<'ast>) -> Symbol<'ast> {
        let parameters: Vec<&'ast str> = parameters.iter().map(|p| self.str(p)).collect();
        Symbol::Template(TemplateDecl {
            parameters: self.slice(&parameters),
            declaration: self.arena.alloc(declaration),
        })
    }

    pub fn enum_decl(&self, name: &str, enumerators: &[&str]) -> Symbol<'ast> {
        let enumerators: Vec<&'ast str> = enumerators.iter().map(|e| self.str(e)).collect();
        Symbol::Enum(EnumDecl {
            name: self.name(name),
            visibility: Visibility::Public,
            enumerators: self.slice(&enumerators),
        })
    }

    pub fn translation_unit(
        &self,
        file_name: &str,
        members: &[Symbol<'ast>],
    ) -> TranslationUnit<'ast> {
        TranslationUnit {
            file_name: self.str(file_name),
            global: NamespaceDecl::new(None).with_members(self.slice(members)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_names_nest_left() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let name = b.name("Atomic::Scene::Node");

        match name {
            Name::Qualified { base, name } => {
                assert_eq!(name.identifier(), Some("Node"));
                assert!(base.is_qualified());
            }
            other => panic!("expected qualified name, got {other:?}"),
        }
        assert!(b.name("").is_anonymous());
    }

    #[test]
    fn bare_specifiers() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let unsigned = b.bare_unsigned();
        assert!(unsigned.ty.is_undefined());
        assert!(unsigned.is_unsigned());

        let signed = b.bare_signed();
        assert!(signed.ty.is_undefined());
        assert!(signed.is_signed());
    }

    #[test]
    fn declared_method_carries_function() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let function = b.method("GetWidth").returning(b.float());
        let symbol = b.declared_method(function);

        assert!(matches!(symbol, Symbol::Declaration(_)));
        assert_eq!(symbol.as_function(), Some(&function));
    }

    #[test]
    fn template_wraps_declaration() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let inner = Symbol::Class(b.class("Vector"));
        let template = b.template(&["T"], inner);

        match template {
            Symbol::Template(t) => {
                assert_eq!(t.parameters, &["T"]);
                assert_eq!(*t.declaration, inner);
            }
            other => panic!("expected template, got {other:?}"),
        }
    }
}
