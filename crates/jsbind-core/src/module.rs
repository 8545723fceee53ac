//! Binding module.
//!
//! A [`BindingModule`] is the unit handed to the code generator: the classes
//! bound from its headers, the free scalar constants found there, and the
//! enums the discovery pass attributed to it. Classes and enums are held by
//! hash; the entries themselves stay in the registry.

use crate::TypeHash;

/// Output container for one module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingModule {
    /// Module name.
    pub name: String,
    headers: Vec<String>,
    classes: Vec<TypeHash>,
    constants: Vec<String>,
    enums: Vec<TypeHash>,
}

impl BindingModule {
    /// Create an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Record a processed header.
    pub fn add_header(&mut self, header: impl Into<String>) {
        let header = header.into();
        if !self.headers.contains(&header) {
            self.headers.push(header);
        }
    }

    /// Append a class. Returns `false` if it was already present.
    pub fn add_class(&mut self, class: TypeHash) -> bool {
        if self.classes.contains(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Register a constant by name. Returns `false` if it was already present.
    pub fn register_constant(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.constants.contains(&name) {
            return false;
        }
        self.constants.push(name);
        true
    }

    /// Append an enum. Returns `false` if it was already present.
    pub fn add_enum(&mut self, enum_hash: TypeHash) -> bool {
        if self.enums.contains(&enum_hash) {
            return false;
        }
        self.enums.push(enum_hash);
        true
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Classes in the order they were bound.
    pub fn classes(&self) -> &[TypeHash] {
        &self.classes
    }

    /// Constant names in registration order.
    pub fn constants(&self) -> &[String] {
        &self.constants
    }

    pub fn enums(&self) -> &[TypeHash] {
        &self.enums
    }

    pub fn has_class(&self, class: TypeHash) -> bool {
        self.classes.contains(&class)
    }

    pub fn has_constant(&self, name: &str) -> bool {
        self.constants.iter().any(|c| c == name)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.constants.is_empty() && self.enums.is_empty()
    }
}
