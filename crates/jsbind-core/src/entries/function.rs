//! Function entries.
//!
//! A [`FunctionEntry`] is a fully mapped member function signature. Entries
//! are only ever built complete: a function with any unmappable slot never
//! produces an entry.

use std::fmt;

use crate::{Parameter, SlotType, TypeHash};

/// The role a member function plays in its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FunctionRole {
    #[default]
    Normal,
    Constructor,
    Destructor,
}

impl fmt::Display for FunctionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionRole::Normal => write!(f, "normal"),
            FunctionRole::Constructor => write!(f, "constructor"),
            FunctionRole::Destructor => write!(f, "destructor"),
        }
    }
}

/// A bound member function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionEntry {
    /// Function name as resolved (`~Name` for destructors).
    pub name: String,
    /// Owning class.
    pub owner: TypeHash,
    /// Constructor, destructor or normal member.
    pub role: FunctionRole,
    /// Return slot; `None` means void.
    pub return_type: Option<SlotType>,
    /// Parameters in declaration order.
    pub params: Vec<Parameter>,
}

impl FunctionEntry {
    /// Create a normal void function with no parameters.
    pub fn new(name: impl Into<String>, owner: TypeHash) -> Self {
        Self {
            name: name.into(),
            owner,
            role: FunctionRole::Normal,
            return_type: None,
            params: Vec::new(),
        }
    }

    // === Builder Methods ===

    /// Set the role.
    pub fn with_role(mut self, role: FunctionRole) -> Self {
        self.role = role;
        self
    }

    /// Set the return slot.
    pub fn with_return(mut self, slot: SlotType) -> Self {
        self.return_type = Some(slot);
        self
    }

    /// Append a parameter.
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    // === Query Methods ===

    pub fn is_constructor(&self) -> bool {
        self.role == FunctionRole::Constructor
    }

    pub fn is_destructor(&self) -> bool {
        self.role == FunctionRole::Destructor
    }

    pub fn returns_void(&self) -> bool {
        self.return_type.is_none()
    }

    /// Number of trailing parameters that carry a default value.
    pub fn optional_param_count(&self) -> usize {
        self.params
            .iter()
            .rev()
            .take_while(|p| p.has_default())
            .count()
    }

    /// Minimum number of arguments a caller must supply.
    pub fn required_param_count(&self) -> usize {
        self.params.len() - self.optional_param_count()
    }
}
