//! jsbind registry crate.
//!
//! Holds the classes and enums declared for binding. A discovery pre-pass
//! registers them by name; the extraction pass resolves type references
//! against the registry and enriches class entries in place.

mod registry;

pub use registry::{BindingRegistry, TypeRef};
