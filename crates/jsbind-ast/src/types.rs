//! Native type nodes.
//!
//! A [`NativeType`] is one type category as determined by the front end's
//! semantic analysis; a [`FullySpecifiedType`] pairs it with the specifiers
//! written alongside it (`const`, `unsigned`, ...). Pointer, reference and
//! array element types are themselves fully specified.

use bitflags::bitflags;

use crate::{FunctionDecl, Name};

bitflags! {
    /// Declaration specifiers attached to a type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Specifiers: u16 {
        const CONST = 1 << 0;
        const VOLATILE = 1 << 1;
        const SIGNED = 1 << 2;
        const UNSIGNED = 1 << 3;
        const STATIC = 1 << 4;
        const CONSTEXPR = 1 << 5;
    }
}

/// Integer categories, including `bool` and the character types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerKind {
    Char,
    Char16,
    Char32,
    WideChar,
    Bool,
    Short,
    Int,
    Long,
    LongLong,
}

/// Floating-point categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKind {
    Float,
    Double,
    LongDouble,
}

/// A type category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeType<'ast> {
    /// `void`
    Void,
    /// No base type could be determined; a bare `unsigned` or `signed`
    /// produces this with the matching specifier set.
    Undefined,
    /// Integer category.
    Integer(IntegerKind),
    /// Floating-point category.
    Float(FloatKind),
    /// `T*`
    Pointer(FullySpecifiedType<'ast>),
    /// `T&` or `T&&`
    Reference {
        element: FullySpecifiedType<'ast>,
        is_rvalue: bool,
    },
    /// `T[N]`
    Array {
        element: FullySpecifiedType<'ast>,
        size: Option<u32>,
    },
    /// A user-defined or typedef'd name.
    Named(&'ast Name<'ast>),
    /// An enum type the front end resolved directly.
    Enum(&'ast Name<'ast>),
    /// A function type, as carried by member declarations without a body.
    Function(&'ast FunctionDecl<'ast>),
}

impl<'ast> NativeType<'ast> {
    /// Short category name used in diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            NativeType::Void => "void",
            NativeType::Undefined => "undefined",
            NativeType::Integer(_) => "integer",
            NativeType::Float(_) => "float",
            NativeType::Pointer(_) => "pointer",
            NativeType::Reference { .. } => "reference",
            NativeType::Array { .. } => "array",
            NativeType::Named(_) => "named",
            NativeType::Enum(_) => "enum",
            NativeType::Function(_) => "function",
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, NativeType::Void)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, NativeType::Undefined)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, NativeType::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, NativeType::Float(_))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, NativeType::Pointer(_))
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, NativeType::Reference { .. })
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, NativeType::Enum(_))
    }

    /// Get the pointee type of a pointer.
    pub fn pointee(&self) -> Option<FullySpecifiedType<'ast>> {
        match self {
            NativeType::Pointer(element) => Some(*element),
            _ => None,
        }
    }

    /// Get the referenced type of a reference.
    pub fn referent(&self) -> Option<FullySpecifiedType<'ast>> {
        match self {
            NativeType::Reference { element, .. } => Some(*element),
            _ => None,
        }
    }

    /// Get the function declaration behind a function type.
    pub fn as_function(&self) -> Option<&'ast FunctionDecl<'ast>> {
        match self {
            NativeType::Function(function) => Some(*function),
            _ => None,
        }
    }
}

/// A type together with its specifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullySpecifiedType<'ast> {
    pub ty: &'ast NativeType<'ast>,
    pub specifiers: Specifiers,
}

impl<'ast> FullySpecifiedType<'ast> {
    /// Create a type without specifiers.
    pub fn new(ty: &'ast NativeType<'ast>) -> Self {
        Self {
            ty,
            specifiers: Specifiers::empty(),
        }
    }

    /// Add specifiers.
    pub fn with(mut self, specifiers: Specifiers) -> Self {
        self.specifiers |= specifiers;
        self
    }

    pub fn is_const(&self) -> bool {
        self.specifiers.contains(Specifiers::CONST)
    }

    pub fn is_signed(&self) -> bool {
        self.specifiers.contains(Specifiers::SIGNED)
    }

    pub fn is_unsigned(&self) -> bool {
        self.specifiers.contains(Specifiers::UNSIGNED)
    }

    pub fn is_static(&self) -> bool {
        self.specifiers.contains(Specifiers::STATIC)
    }
}
