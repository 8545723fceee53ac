//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] is a 64-bit hash computed from a type name. Classes and enums
//! in the binding model reference each other through their hashes, so a
//! reference can be formed from a name alone, before or after the referenced
//! entry is enriched by the extraction pass.
//!
//! # Examples
//!
//! ```
//! use jsbind_core::TypeHash;
//!
//! let node = TypeHash::from_name("Node");
//! assert_eq!(node, TypeHash::from_name("Node"));
//! assert_ne!(node, TypeHash::from_name("Scene"));
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Domain marker for type hashes
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;
}

/// A deterministic 64-bit hash identifying a bindable type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from an unqualified type name.
    ///
    /// The same name always produces the same hash.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_deterministic() {
        assert_eq!(
            TypeHash::from_name("Vector3"),
            TypeHash::from_name("Vector3")
        );
        assert_ne!(
            TypeHash::from_name("Vector3"),
            TypeHash::from_name("Vector2")
        );
    }

    #[test]
    fn empty_hash() {
        assert!(TypeHash::EMPTY.is_empty());
        assert!(!TypeHash::from_name("Node").is_empty());
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(TypeHash(0x1f).to_string(), "0x000000000000001f");
        assert_eq!(
            format!("{:?}", TypeHash(0x1f)),
            "TypeHash(0x000000000000001f)"
        );
    }
}
