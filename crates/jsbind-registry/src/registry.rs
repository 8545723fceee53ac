//! BindingRegistry - class and enum storage.
//!
//! This module provides [`BindingRegistry`], the lookup table the extraction
//! pass consults for every named type it meets.
//!
//! # Storage Model
//!
//! - **Classes**: `ClassEntry` values stored by `TypeHash`, plus the
//!   registration order so iteration is deterministic.
//! - **Enums**: `EnumEntry` values stored the same way.
//!
//! Class and enum names share one namespace: a name registered as a class
//! cannot also be registered as an enum.
//!
//! # Thread Safety
//!
//! `BindingRegistry` is not thread-safe. It is populated single-threaded by
//! the discovery pre-pass and then mutated by one extraction pass at a time.
//!
//! # Example
//!
//! ```
//! use jsbind_core::{ClassEntry, EnumEntry};
//! use jsbind_registry::{BindingRegistry, TypeRef};
//!
//! let mut registry = BindingRegistry::new();
//! registry.register_class(ClassEntry::new("Node")).unwrap();
//! registry.register_enum(EnumEntry::new("BlendMode")).unwrap();
//!
//! assert!(matches!(registry.lookup("Node"), Some(TypeRef::Class(_))));
//! assert!(matches!(registry.lookup("BlendMode"), Some(TypeRef::Enum(_))));
//! assert!(registry.lookup("Widget").is_none());
//! ```

use rustc_hash::FxHashMap;

use jsbind_core::{ClassEntry, EnumEntry, RegistrationError, TypeHash};

/// What a registered name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Class(TypeHash),
    Enum(TypeHash),
}

impl TypeRef {
    pub fn type_hash(&self) -> TypeHash {
        match self {
            TypeRef::Class(hash) | TypeRef::Enum(hash) => *hash,
        }
    }
}

/// Registry of classes and enums declared for binding.
#[derive(Debug, Default)]
pub struct BindingRegistry {
    // === Classes ===
    classes: FxHashMap<TypeHash, ClassEntry>,
    /// Registration order.
    class_order: Vec<TypeHash>,

    // === Enums ===
    enums: FxHashMap<TypeHash, EnumEntry>,
    enum_order: Vec<TypeHash>,
}

impl BindingRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a class declared for binding.
    pub fn register_class(&mut self, entry: ClassEntry) -> Result<TypeHash, RegistrationError> {
        let hash = entry.type_hash;
        if self.classes.contains_key(&hash) {
            return Err(RegistrationError::DuplicateClass { name: entry.name });
        }
        if self.enums.contains_key(&hash) {
            return Err(RegistrationError::NameConflict { name: entry.name });
        }

        tracing::trace!(class = %entry.name, hash = %hash, "registered class");
        self.classes.insert(hash, entry);
        self.class_order.push(hash);
        Ok(hash)
    }

    /// Register an enum declared for binding.
    pub fn register_enum(&mut self, entry: EnumEntry) -> Result<TypeHash, RegistrationError> {
        let hash = entry.type_hash;
        if self.enums.contains_key(&hash) {
            return Err(RegistrationError::DuplicateEnum { name: entry.name });
        }
        if self.classes.contains_key(&hash) {
            return Err(RegistrationError::NameConflict { name: entry.name });
        }

        tracing::trace!(enum_name = %entry.name, hash = %hash, "registered enum");
        self.enums.insert(hash, entry);
        self.enum_order.push(hash);
        Ok(hash)
    }

    // ==========================================================================
    // Class Lookup
    // ==========================================================================

    /// Get a class by unqualified name.
    pub fn get_class(&self, name: &str) -> Option<&ClassEntry> {
        self.classes
            .get(&TypeHash::from_name(name))
            .filter(|entry| entry.name == name)
    }

    /// Get a class by hash.
    pub fn get_class_by_hash(&self, hash: TypeHash) -> Option<&ClassEntry> {
        self.classes.get(&hash)
    }

    /// Get a mutable class by hash.
    pub fn get_class_by_hash_mut(&mut self, hash: TypeHash) -> Option<&mut ClassEntry> {
        self.classes.get_mut(&hash)
    }

    /// Iterate classes in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntry> {
        self.class_order
            .iter()
            .filter_map(|hash| self.classes.get(hash))
    }

    // ==========================================================================
    // Enum Lookup
    // ==========================================================================

    /// Get an enum by unqualified name.
    pub fn get_enum(&self, name: &str) -> Option<&EnumEntry> {
        self.enums
            .get(&TypeHash::from_name(name))
            .filter(|entry| entry.name == name)
    }

    /// Iterate enums in registration order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumEntry> {
        self.enum_order
            .iter()
            .filter_map(|hash| self.enums.get(hash))
    }

    // ==========================================================================
    // Unified Lookup
    // ==========================================================================

    /// Resolve an unqualified name to a registered class or enum.
    ///
    /// Classes take precedence; registration keeps the two disjoint anyway.
    pub fn lookup(&self, name: &str) -> Option<TypeRef> {
        if let Some(class) = self.get_class(name) {
            return Some(TypeRef::Class(class.type_hash));
        }
        self.get_enum(name).map(|e| TypeRef::Enum(e.type_hash))
    }
}
