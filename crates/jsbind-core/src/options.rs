//! Binding options.
//!
//! The reserved type names the type mapper treats as builtin value types,
//! and the prefix that marks operator overloads. Options can be loaded from
//! TOML; every field is optional and falls back to its default.
//!
//! ```toml
//! string_type = "String"
//! string_hash_type = "StringHash"
//! heap_ptr_type = "JS_HEAP_PTR"
//! operator_prefix = "operator "
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Options controlling type mapping and function acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingOptions {
    /// Named type mapped to the string value type.
    pub string_type: String,
    /// Named type mapped to the string hash value type.
    pub string_hash_type: String,
    /// Marker type name mapped to the opaque heap pointer type.
    pub heap_ptr_type: String,
    /// Functions whose resolved name starts with this are operator overloads.
    pub operator_prefix: String,
}

impl Default for BindingOptions {
    fn default() -> Self {
        Self {
            string_type: "String".to_string(),
            string_hash_type: "StringHash".to_string(),
            heap_ptr_type: "JS_HEAP_PTR".to_string(),
            operator_prefix: "operator ".to_string(),
        }
    }
}

impl BindingOptions {
    /// Parse and validate options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let options: BindingOptions = toml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that every name is non-empty and reserved type names are distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("string_type", &self.string_type),
            ("string_hash_type", &self.string_hash_type),
            ("heap_ptr_type", &self.heap_ptr_type),
            ("operator_prefix", &self.operator_prefix),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyName { field });
            }
        }

        let reserved = self.reserved_names();
        for (i, name) in reserved.iter().enumerate() {
            if reserved[i + 1..].contains(name) {
                return Err(ConfigError::DuplicateName {
                    name: (*name).to_string(),
                });
            }
        }
        Ok(())
    }

    /// Type names that never go through a registry lookup.
    pub fn reserved_names(&self) -> [&str; 3] {
        [
            self.string_type.as_str(),
            self.string_hash_type.as_str(),
            self.heap_ptr_type.as_str(),
        ]
    }

    /// Check if a resolved function name denotes an operator overload.
    pub fn is_operator_name(&self, name: &str) -> bool {
        name.starts_with(&self.operator_prefix)
    }
}
