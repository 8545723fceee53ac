//! Binding model entry types.
//!
//! - [`ClassEntry`] - Classes declared for binding
//! - [`EnumEntry`] - Enumeration types
//! - [`FunctionEntry`] - Bound member functions

mod class;
mod enum_entry;
mod function;

pub use class::ClassEntry;
pub use enum_entry::EnumEntry;
pub use function::{FunctionEntry, FunctionRole};
