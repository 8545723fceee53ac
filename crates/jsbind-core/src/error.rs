//! Error types for binding extraction.
//!
//! ## Error Hierarchy
//!
//! ```text
//! Unsupported        - a slot's type cannot cross the binding boundary
//! Rejection          - a function was dropped (wraps Unsupported where relevant)
//! RegistrationError  - the discovery pre-pass misused the registry
//! ConfigError        - invalid binding options
//! ```
//!
//! `Unsupported` and `Rejection` are not failures of the pass. They are the
//! normal "leave it unbound" outcomes and are returned as values so callers
//! can log or count them; the entity in question is simply omitted.

use thiserror::Error;

use crate::PrimitiveKind;

// ============================================================================
// Type Mapping
// ============================================================================

/// Why a type slot could not be mapped onto a binding type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unsupported {
    /// A named type that is neither builtin nor registered.
    #[error("type '{name}' not in bindings")]
    UnresolvedName { name: String },

    /// The front end could not determine the type.
    #[error("undefined type")]
    Undefined,

    /// A type category that never crosses the boundary (arrays, function
    /// types, void, nested pointers, ...).
    #[error("unsupported type category: {category}")]
    Category { category: &'static str },

    /// A pointer or reference to a scalar.
    #[error("pointer or reference to primitive '{kind}'")]
    PointerToPrimitive { kind: PrimitiveKind },
}

// ============================================================================
// Function Acceptance
// ============================================================================

/// Why a member function was left unbound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{function}: variadic functions are not bound")]
    Variadic { function: String },

    #[error("{function}: operator overloads are not bound")]
    Operator { function: String },

    #[error("{function}: unsupported return type")]
    UnsupportedReturn {
        function: String,
        #[source]
        cause: Unsupported,
    },

    #[error("{function}: unsupported parameter {index}")]
    UnsupportedParameter {
        function: String,
        index: usize,
        #[source]
        cause: Unsupported,
    },

    #[error("{function}: malformed signature, symbol {index} is not an argument")]
    MalformedSignature { function: String, index: usize },
}

impl Rejection {
    /// Name of the rejected function.
    pub fn function(&self) -> &str {
        match self {
            Rejection::Variadic { function }
            | Rejection::Operator { function }
            | Rejection::UnsupportedReturn { function, .. }
            | Rejection::UnsupportedParameter { function, .. }
            | Rejection::MalformedSignature { function, .. } => function,
        }
    }

    /// The type mapping failure behind this rejection, if any.
    pub fn cause(&self) -> Option<&Unsupported> {
        match self {
            Rejection::UnsupportedReturn { cause, .. }
            | Rejection::UnsupportedParameter { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Errors raised while pre-populating the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("class '{name}' is already registered")]
    DuplicateClass { name: String },

    #[error("enum '{name}' is already registered")]
    DuplicateEnum { name: String },

    #[error("'{name}' is already registered as a different kind of type")]
    NameConflict { name: String },
}

// ============================================================================
// Configuration
// ============================================================================

/// Errors raised while loading or validating binding options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse binding options: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("binding option '{field}' must not be empty")]
    EmptyName { field: &'static str },

    #[error("reserved type name '{name}' is used by more than one option")]
    DuplicateName { name: String },
}
