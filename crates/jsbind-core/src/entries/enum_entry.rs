//! Enum type entry.
//!
//! Enums are discovered and registered by a separate pass; the extraction
//! pass only resolves references to them.

use crate::TypeHash;

/// Registry entry for an enumeration type.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumEntry {
    /// Unqualified name.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    /// Module the enum belongs to.
    pub module: Option<String>,
    /// Enumerator names in declaration order.
    pub values: Vec<String>,
}

impl EnumEntry {
    /// Create a new enum entry.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            module: None,
            values: Vec::new(),
        }
    }

    /// Set the owning module.
    pub fn in_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Add an enumerator.
    pub fn with_value(mut self, name: impl Into<String>) -> Self {
        self.values.push(name.into());
        self
    }

    /// Add multiple enumerators.
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Check if the enum declares the given enumerator.
    pub fn has_value(&self, name: &str) -> bool {
        self.values.iter().any(|v| v == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_entry_values() {
        let entry = EnumEntry::new("BlendMode")
            .in_module("Graphics")
            .with_value("BLEND_REPLACE")
            .with_values(["BLEND_ADD", "BLEND_ALPHA"]);

        assert_eq!(entry.type_hash, TypeHash::from_name("BlendMode"));
        assert_eq!(entry.module.as_deref(), Some("Graphics"));
        assert_eq!(entry.values.len(), 3);
        assert!(entry.has_value("BLEND_ADD"));
        assert!(!entry.has_value("BLEND_MULTIPLY"));
    }
}
