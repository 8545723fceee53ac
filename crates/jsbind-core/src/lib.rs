//! Core binding model types for jsbind.
//!
//! This crate defines the model the extraction pass produces and the code
//! generator consumes:
//!
//! - [`BindingType`], [`SlotType`], [`Parameter`] - Types that cross the binding boundary
//! - [`ClassEntry`], [`EnumEntry`], [`FunctionEntry`] - Registry entries
//! - [`BindingModule`] - Per-module output container
//! - [`TypeHash`] - Name-derived identity used for references between entries
//!
//! plus the error types, diagnostics and options shared by the other crates.

mod binding_type;
mod diagnostics;
pub mod entries;
mod error;
mod module;
mod options;
mod primitive_kind;
mod type_hash;

pub use binding_type::{BindingType, Parameter, SlotType};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use entries::{ClassEntry, EnumEntry, FunctionEntry, FunctionRole};
pub use error::{ConfigError, Rejection, RegistrationError, Unsupported};
pub use module::BindingModule;
pub use options::BindingOptions;
pub use primitive_kind::PrimitiveKind;
pub use type_hash::{TypeHash, hash_constants};
