//! Class entry.
//!
//! This module provides `ClassEntry`, a class declared for binding ahead of
//! the extraction pass and enriched by it.

use crate::TypeHash;

use super::FunctionEntry;

/// Registry entry for a bindable class.
///
/// Entries are created by the discovery pre-pass with only a name. The
/// extraction pass attaches the header and module, appends resolved base
/// classes and bound functions, and may mark the class abstract.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassEntry {
    /// Unqualified name.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,

    // === Ownership ===
    /// Module the class was bound into.
    pub module: Option<String>,
    /// Header the class declaration was found in.
    pub header: Option<String>,

    // === Inheritance ===
    /// Resolved base classes, in declaration order.
    pub base_classes: Vec<TypeHash>,

    // === Members ===
    /// Bound functions, in declaration order.
    pub functions: Vec<FunctionEntry>,

    // === Modifiers ===
    /// Class declares at least one pure virtual function.
    pub is_abstract: bool,
}

impl ClassEntry {
    /// Create a new class entry.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            module: None,
            header: None,
            base_classes: Vec::new(),
            functions: Vec::new(),
            is_abstract: false,
        }
    }

    // === Builder Methods ===

    /// Add a base class.
    pub fn with_base(mut self, base: TypeHash) -> Self {
        self.base_classes.push(base);
        self
    }

    /// Add a function.
    pub fn with_function(mut self, function: FunctionEntry) -> Self {
        self.functions.push(function);
        self
    }

    /// Mark as abstract.
    pub fn as_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    // === Mutation ===

    /// Attach the module and header this class was found in.
    pub fn set_origin(&mut self, module: impl Into<String>, header: impl Into<String>) {
        self.module = Some(module.into());
        self.header = Some(header.into());
    }

    /// Mark the class abstract. Never cleared once set.
    pub fn mark_abstract(&mut self) {
        self.is_abstract = true;
    }

    pub fn add_base_class(&mut self, base: TypeHash) {
        self.base_classes.push(base);
    }

    pub fn add_function(&mut self, function: FunctionEntry) {
        self.functions.push(function);
    }

    // === Query Methods ===

    /// Check if the class was bound into a module.
    pub fn is_bound(&self) -> bool {
        self.module.is_some()
    }

    /// Check if `base` is a direct base class.
    pub fn derives_from(&self, base: TypeHash) -> bool {
        self.base_classes.contains(&base)
    }

    /// Find the first function with the given name.
    pub fn find_function(&self, name: &str) -> Option<&FunctionEntry> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Iterate over constructors.
    pub fn constructors(&self) -> impl Iterator<Item = &FunctionEntry> {
        self.functions.iter().filter(|f| f.is_constructor())
    }

    /// Iterate over normal member functions.
    pub fn methods(&self) -> impl Iterator<Item = &FunctionEntry> {
        self.functions
            .iter()
            .filter(|f| !f.is_constructor() && !f.is_destructor())
    }

    pub fn has_destructor(&self) -> bool {
        self.functions.iter().any(|f| f.is_destructor())
    }
}
