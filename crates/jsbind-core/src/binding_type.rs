//! Binding types and slot descriptors.
//!
//! [`BindingType`] is the closed set of types that can cross the binding
//! boundary. [`SlotType`] layers pointer/reference qualifiers on top of a
//! binding type for a return or argument position, and [`Parameter`] adds the
//! argument's name and default value.

use crate::{PrimitiveKind, TypeHash};

/// A type that can cross the binding boundary.
///
/// `Class` and `Enum` are non-owning references into the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingType {
    /// A scalar passed by value.
    Primitive {
        kind: PrimitiveKind,
        is_unsigned: bool,
    },
    /// The engine string value type.
    String,
    /// The engine string hash value type.
    StringHash,
    /// An engine-managed reference passed without value semantics.
    HeapPtr,
    /// A registered class.
    Class(TypeHash),
    /// A registered enum.
    Enum(TypeHash),
}

impl BindingType {
    /// Create a signed primitive type.
    pub const fn primitive(kind: PrimitiveKind) -> Self {
        BindingType::Primitive {
            kind,
            is_unsigned: false,
        }
    }

    /// Create an unsigned primitive type.
    pub const fn unsigned(kind: PrimitiveKind) -> Self {
        BindingType::Primitive {
            kind,
            is_unsigned: true,
        }
    }

    /// Check if this is a primitive scalar.
    pub const fn is_primitive(&self) -> bool {
        matches!(self, BindingType::Primitive { .. })
    }

    /// Get the primitive kind, if this is a primitive.
    pub const fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            BindingType::Primitive { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Get the referenced class hash, if this is a class type.
    pub const fn as_class(&self) -> Option<TypeHash> {
        match self {
            BindingType::Class(hash) => Some(*hash),
            _ => None,
        }
    }

    /// Get the referenced enum hash, if this is an enum type.
    pub const fn as_enum(&self) -> Option<TypeHash> {
        match self {
            BindingType::Enum(hash) => Some(*hash),
            _ => None,
        }
    }
}

/// A return or argument slot: a binding type plus its qualifiers.
///
/// Pointer and reference are independent; both are set for pointer-to-reference
/// and reference-to-pointer forms. A slot never holds a qualified primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotType {
    pub ty: BindingType,
    pub is_pointer: bool,
    pub is_reference: bool,
}

impl SlotType {
    /// Create an unqualified (by-value) slot.
    pub const fn value(ty: BindingType) -> Self {
        Self {
            ty,
            is_pointer: false,
            is_reference: false,
        }
    }

    /// Create a pointer slot.
    pub const fn pointer(ty: BindingType) -> Self {
        Self {
            ty,
            is_pointer: true,
            is_reference: false,
        }
    }

    /// Create a reference slot.
    pub const fn reference(ty: BindingType) -> Self {
        Self {
            ty,
            is_pointer: false,
            is_reference: true,
        }
    }

    /// Check if the slot carries no qualifier.
    pub const fn is_by_value(&self) -> bool {
        !self.is_pointer && !self.is_reference
    }
}

/// A function argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// Argument name as written (empty for unnamed arguments).
    pub name: String,
    /// Mapped type and qualifiers.
    pub slot: SlotType,
    /// Default value expression, verbatim source text.
    pub default_value: Option<String>,
}

impl Parameter {
    /// Create a parameter without a default value.
    pub fn new(name: impl Into<String>, slot: SlotType) -> Self {
        Self {
            name: name.into(),
            slot,
            default_value: None,
        }
    }

    /// Set the default value expression.
    pub fn with_default(mut self, expr: impl Into<String>) -> Self {
        self.default_value = Some(expr.into());
        self
    }

    /// Check if this parameter has a default value.
    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }
}
