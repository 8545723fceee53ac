//! Slot extraction for return types and arguments.

use jsbind_ast::{Argument, FullySpecifiedType};
use jsbind_core::{BindingType, Parameter, PrimitiveKind, SlotType, Unsupported};

use crate::names::NameResolver;
use crate::type_mapper::TypeMapper;

/// Converts a return or argument position into a [`SlotType`].
///
/// One pointer level is unwrapped, then one reference level; the core type
/// goes through the [`TypeMapper`]. Pointers and references to primitives
/// are rejected.
#[derive(Clone, Copy)]
pub struct SlotExtractor<'r> {
    mapper: TypeMapper<'r>,
}

impl<'r> SlotExtractor<'r> {
    pub fn new(mapper: TypeMapper<'r>) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> TypeMapper<'r> {
        self.mapper
    }

    /// Extract a slot from a type.
    pub fn extract_slot(&self, slot: &FullySpecifiedType<'_>) -> Result<SlotType, Unsupported> {
        let mut core = *slot;
        let mut is_pointer = false;
        let mut is_reference = false;

        if let Some(pointee) = core.ty.pointee() {
            is_pointer = true;
            core = pointee;
        }
        if let Some(referent) = core.ty.referent() {
            is_reference = true;
            core = referent;
        }

        // A bare `unsigned` has no base type. `signed` alone is left to the mapper.
        let ty = if core.ty.is_undefined() && (slot.is_unsigned() || core.is_unsigned()) {
            BindingType::unsigned(PrimitiveKind::Int)
        } else {
            self.mapper.convert(&core)?
        };

        if let (true, Some(kind)) = (is_pointer || is_reference, ty.primitive_kind()) {
            return Err(Unsupported::PointerToPrimitive { kind });
        }

        Ok(SlotType {
            ty,
            is_pointer,
            is_reference,
        })
    }

    /// Extract a parameter from an argument, keeping its name and default
    /// value text.
    pub fn extract_argument(&self, argument: &Argument<'_>) -> Result<Parameter, Unsupported> {
        let slot = self.extract_slot(&argument.ty)?;
        let mut param = Parameter::new(NameResolver::resolve_opt(argument.name), slot);
        if let Some(default) = argument.initializer {
            param = param.with_default(default);
        }
        Ok(param)
    }
}
