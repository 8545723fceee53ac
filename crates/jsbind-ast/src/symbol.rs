//! Symbol nodes.
//!
//! Provides the declaration-level nodes of a translation unit:
//! - Namespaces
//! - Classes with their base classes and members
//! - Functions and their arguments
//! - Plain declarations (variables, and member functions declared without a body)
//! - Templates and enums

use crate::{FullySpecifiedType, Name};

/// Member or base-class access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// A symbol in a scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol<'ast> {
    Namespace(NamespaceDecl<'ast>),
    Class(ClassDecl<'ast>),
    Function(FunctionDecl<'ast>),
    Declaration(Declaration<'ast>),
    Argument(Argument<'ast>),
    Template(TemplateDecl<'ast>),
    Enum(EnumDecl<'ast>),
}

impl<'ast> Symbol<'ast> {
    /// Get the symbol's name, if it has one.
    pub fn name(&self) -> Option<&'ast Name<'ast>> {
        match self {
            Symbol::Namespace(ns) => ns.name,
            Symbol::Class(class) => Some(class.name),
            Symbol::Function(func) => Some(func.name),
            Symbol::Declaration(decl) => Some(decl.name),
            Symbol::Argument(arg) => arg.name,
            Symbol::Template(template) => template.declaration.name(),
            Symbol::Enum(e) => Some(e.name),
        }
    }

    /// Get the symbol's access.
    pub fn visibility(&self) -> Visibility {
        match self {
            Symbol::Namespace(_) | Symbol::Argument(_) => Visibility::Public,
            Symbol::Class(class) => class.visibility,
            Symbol::Function(func) => func.visibility,
            Symbol::Declaration(decl) => decl.visibility,
            Symbol::Template(template) => template.declaration.visibility(),
            Symbol::Enum(e) => e.visibility,
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility() == Visibility::Public
    }

    /// Get the function this symbol declares, either directly or through a
    /// function-typed declaration.
    pub fn as_function(&self) -> Option<&FunctionDecl<'ast>> {
        match self {
            Symbol::Function(func) => Some(func),
            Symbol::Declaration(decl) => decl.as_function(),
            _ => None,
        }
    }

    pub fn as_argument(&self) -> Option<&Argument<'ast>> {
        match self {
            Symbol::Argument(arg) => Some(arg),
            _ => None,
        }
    }
}

/// A namespace. The global namespace is anonymous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamespaceDecl<'ast> {
    pub name: Option<&'ast Name<'ast>>,
    pub members: &'ast [Symbol<'ast>],
}

impl<'ast> NamespaceDecl<'ast> {
    pub fn new(name: Option<&'ast Name<'ast>>) -> Self {
        Self { name, members: &[] }
    }

    pub fn with_members(mut self, members: &'ast [Symbol<'ast>]) -> Self {
        self.members = members;
        self
    }
}

/// A class, struct or union definition.
///
/// Example:
/// ```cpp
/// class Node : public Animatable, public Serializable {
/// public:
///     Node();
///     Node* GetParent() const;
/// private:
///     void Internal();
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassDecl<'ast> {
    pub name: &'ast Name<'ast>,
    /// Access of the class itself within its enclosing scope.
    pub visibility: Visibility,
    pub base_classes: &'ast [BaseClass<'ast>],
    pub members: &'ast [Symbol<'ast>],
}

impl<'ast> ClassDecl<'ast> {
    pub fn new(name: &'ast Name<'ast>) -> Self {
        Self {
            name,
            visibility: Visibility::Public,
            base_classes: &[],
            members: &[],
        }
    }

    pub fn with_bases(mut self, bases: &'ast [BaseClass<'ast>]) -> Self {
        self.base_classes = bases;
        self
    }

    pub fn with_members(mut self, members: &'ast [Symbol<'ast>]) -> Self {
        self.members = members;
        self
    }
}

/// One entry of a class's base-specifier list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseClass<'ast> {
    pub name: &'ast Name<'ast>,
}

impl<'ast> BaseClass<'ast> {
    pub fn new(name: &'ast Name<'ast>) -> Self {
        Self { name }
    }
}

/// A function, either defined inline or declared.
///
/// Constructors and destructors have no return type; every other function
/// has one, possibly `void`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionDecl<'ast> {
    pub name: &'ast Name<'ast>,
    pub visibility: Visibility,
    pub return_type: Option<FullySpecifiedType<'ast>>,
    /// Arguments. Well-formed functions hold only [`Symbol::Argument`]s here.
    pub arguments: &'ast [Symbol<'ast>],
    pub is_variadic: bool,
    pub is_pure_virtual: bool,
}

impl<'ast> FunctionDecl<'ast> {
    pub fn new(name: &'ast Name<'ast>) -> Self {
        Self {
            name,
            visibility: Visibility::Public,
            return_type: None,
            arguments: &[],
            is_variadic: false,
            is_pure_virtual: false,
        }
    }

    // === Builder Methods ===

    pub fn returning(mut self, ty: FullySpecifiedType<'ast>) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn with_arguments(mut self, arguments: &'ast [Symbol<'ast>]) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.is_variadic = true;
        self
    }

    /// Mark as `virtual ... = 0`.
    pub fn pure_virtual(mut self) -> Self {
        self.is_pure_virtual = true;
        self
    }

    // === Query Methods ===

    /// Check if the function returns nothing: no return type, or `void`.
    pub fn returns_void(&self) -> bool {
        self.return_type.is_none_or(|ty| ty.ty.is_void())
    }
}

/// A declaration: a variable, or a member function declared without a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Declaration<'ast> {
    pub name: &'ast Name<'ast>,
    pub visibility: Visibility,
    pub ty: FullySpecifiedType<'ast>,
    /// Initializer expression, verbatim.
    pub initializer: Option<&'ast str>,
}

impl<'ast> Declaration<'ast> {
    pub fn new(name: &'ast Name<'ast>, ty: FullySpecifiedType<'ast>) -> Self {
        Self {
            name,
            visibility: Visibility::Public,
            ty,
            initializer: None,
        }
    }

    pub fn with_initializer(mut self, initializer: &'ast str) -> Self {
        self.initializer = Some(initializer);
        self
    }

    /// Get the function declared, if this declaration has a function type.
    pub fn as_function(&self) -> Option<&'ast FunctionDecl<'ast>> {
        self.ty.ty.as_function()
    }
}

/// A function argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Argument<'ast> {
    pub name: Option<&'ast Name<'ast>>,
    pub ty: FullySpecifiedType<'ast>,
    /// Default value expression, verbatim.
    pub initializer: Option<&'ast str>,
}

impl<'ast> Argument<'ast> {
    pub fn new(name: Option<&'ast Name<'ast>>, ty: FullySpecifiedType<'ast>) -> Self {
        Self {
            name,
            ty,
            initializer: None,
        }
    }

    pub fn with_initializer(mut self, initializer: &'ast str) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

/// A template declaration wrapping a class or function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateDecl<'ast> {
    pub parameters: &'ast [&'ast str],
    pub declaration: &'ast Symbol<'ast>,
}

/// An enum definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnumDecl<'ast> {
    pub name: &'ast Name<'ast>,
    pub visibility: Visibility,
    pub enumerators: &'ast [&'ast str],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FloatKind, IntegerKind, NativeType};

    #[test]
    fn returns_void() {
        let name = Name::Identifier("Update");
        let void = NativeType::Void;
        let int = NativeType::Integer(IntegerKind::Int);

        let declared_void = FunctionDecl::new(&name).returning(FullySpecifiedType::new(&void));
        let returns_int = FunctionDecl::new(&name).returning(FullySpecifiedType::new(&int));

        assert!(FunctionDecl::new(&name).returns_void());
        assert!(declared_void.returns_void());
        assert!(!returns_int.returns_void());
    }

    #[test]
    fn declaration_with_function_type() {
        let name = Name::Identifier("GetWidth");
        let float = NativeType::Float(FloatKind::Float);
        let function = FunctionDecl::new(&name).returning(FullySpecifiedType::new(&float));
        let function_type = NativeType::Function(&function);
        let decl = Declaration::new(&name, FullySpecifiedType::new(&function_type));
        let symbol = Symbol::Declaration(decl);

        assert_eq!(decl.as_function(), Some(&function));
        assert_eq!(symbol.as_function(), Some(&function));
        assert_eq!(symbol.name(), Some(&name));
    }

    #[test]
    fn variable_declaration_is_not_function() {
        let name = Name::Identifier("x_");
        let float = NativeType::Float(FloatKind::Float);
        let decl = Declaration::new(&name, FullySpecifiedType::new(&float));
        let symbol = Symbol::Declaration(decl);

        assert!(symbol.as_function().is_none());
        assert!(symbol.as_argument().is_none());
    }

    #[test]
    fn symbol_visibility() {
        let name = Name::Identifier("Internal");
        let internal = FunctionDecl::new(&name).with_visibility(Visibility::Private);
        let private = Symbol::Function(internal);
        let public = Symbol::Function(FunctionDecl::new(&name));

        assert!(!private.is_public());
        assert!(public.is_public());
    }

    #[test]
    fn pure_virtual_marker() {
        let name = Name::Identifier("Draw");
        assert!(FunctionDecl::new(&name).pure_virtual().is_pure_virtual);
        assert!(!FunctionDecl::new(&name).is_pure_virtual);
    }
}
