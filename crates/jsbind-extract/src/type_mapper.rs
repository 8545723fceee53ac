//! Type mapping from native type categories onto binding types.
//!
//! Rules are applied in priority order:
//!
//! 1. Integer categories map to primitives, keeping the `unsigned` specifier
//! 2. Floating categories map to [`PrimitiveKind::Float`]
//! 3. Named types map to the reserved value types, then registered classes,
//!    then registered enums
//! 4. Undefined categories are unsupported
//!
//! Every other category is unsupported.

use jsbind_ast::{FullySpecifiedType, IntegerKind, NativeType};
use jsbind_core::{BindingOptions, BindingType, PrimitiveKind, Unsupported};
use jsbind_registry::{BindingRegistry, TypeRef};

use crate::names::NameResolver;

/// Maps a single type category onto a [`BindingType`].
///
/// Holds only shared borrows, so it is cheap to copy into each extractor.
#[derive(Clone, Copy)]
pub struct TypeMapper<'r> {
    registry: &'r BindingRegistry,
    options: &'r BindingOptions,
}

impl<'r> TypeMapper<'r> {
    pub fn new(registry: &'r BindingRegistry, options: &'r BindingOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'r BindingRegistry {
        self.registry
    }

    pub fn options(&self) -> &'r BindingOptions {
        self.options
    }

    /// Convert a type to a binding type.
    pub fn convert(&self, ty: &FullySpecifiedType<'_>) -> Result<BindingType, Unsupported> {
        match ty.ty {
            NativeType::Integer(kind) => Ok(BindingType::Primitive {
                kind: Self::integer_kind(*kind),
                is_unsigned: ty.is_unsigned(),
            }),
            NativeType::Float(_) => Ok(BindingType::primitive(PrimitiveKind::Float)),
            NativeType::Named(name) => self.convert_named(&NameResolver::resolve_unqualified(name)),
            NativeType::Undefined => {
                tracing::debug!("undefined type in binding slot");
                Err(Unsupported::Undefined)
            }
            other @ (NativeType::Void
            | NativeType::Pointer(_)
            | NativeType::Reference { .. }
            | NativeType::Array { .. }
            | NativeType::Enum(_)
            | NativeType::Function(_)) => Err(Unsupported::Category {
                category: other.category(),
            }),
        }
    }

    /// Resolve an unqualified type name.
    pub fn convert_named(&self, name: &str) -> Result<BindingType, Unsupported> {
        if name == self.options.string_type {
            return Ok(BindingType::String);
        }
        if name == self.options.string_hash_type {
            return Ok(BindingType::StringHash);
        }
        if name == self.options.heap_ptr_type {
            return Ok(BindingType::HeapPtr);
        }

        match self.registry.lookup(name) {
            Some(TypeRef::Class(hash)) => Ok(BindingType::Class(hash)),
            Some(TypeRef::Enum(hash)) => Ok(BindingType::Enum(hash)),
            None => {
                tracing::debug!(type_name = %name, "type not in bindings");
                Err(Unsupported::UnresolvedName {
                    name: name.to_string(),
                })
            }
        }
    }

    fn integer_kind(kind: IntegerKind) -> PrimitiveKind {
        match kind {
            IntegerKind::Bool => PrimitiveKind::Bool,
            IntegerKind::Char => PrimitiveKind::Char,
            IntegerKind::Char16 => PrimitiveKind::Char16,
            IntegerKind::Char32 => PrimitiveKind::Char32,
            IntegerKind::WideChar => PrimitiveKind::WideChar,
            IntegerKind::Short => PrimitiveKind::Short,
            IntegerKind::Int => PrimitiveKind::Int,
            IntegerKind::Long => PrimitiveKind::Long,
            IntegerKind::LongLong => PrimitiveKind::LongLong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;
    use jsbind_ast::AstBuilder;
    use jsbind_core::{ClassEntry, EnumEntry, TypeHash};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn setup_registry() -> BindingRegistry {
        let mut registry = BindingRegistry::new();
        registry.register_class(ClassEntry::new("Node")).unwrap();
        registry.register_enum(EnumEntry::new("BlendMode")).unwrap();
        registry
    }

    #[rstest]
    #[case(IntegerKind::Bool, PrimitiveKind::Bool)]
    #[case(IntegerKind::Char, PrimitiveKind::Char)]
    #[case(IntegerKind::Char16, PrimitiveKind::Char16)]
    #[case(IntegerKind::Char32, PrimitiveKind::Char32)]
    #[case(IntegerKind::WideChar, PrimitiveKind::WideChar)]
    #[case(IntegerKind::Short, PrimitiveKind::Short)]
    #[case(IntegerKind::Int, PrimitiveKind::Int)]
    #[case(IntegerKind::Long, PrimitiveKind::Long)]
    #[case(IntegerKind::LongLong, PrimitiveKind::LongLong)]
    fn integers_preserve_signedness(
        #[case] kind: IntegerKind,
        #[case] expected: PrimitiveKind,
        #[values(false, true)] unsigned: bool,
    ) {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let registry = BindingRegistry::new();
        let options = BindingOptions::default();
        let mapper = TypeMapper::new(&registry, &options);

        let ty = if unsigned { b.unsigned(kind) } else { b.integer(kind) };

        assert_eq!(
            mapper.convert(&ty),
            Ok(BindingType::Primitive {
                kind: expected,
                is_unsigned: unsigned,
            })
        );
    }

    #[test]
    fn floats_collapse() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let registry = BindingRegistry::new();
        let options = BindingOptions::default();
        let mapper = TypeMapper::new(&registry, &options);

        let float = BindingType::primitive(PrimitiveKind::Float);
        assert_eq!(mapper.convert(&b.float()), Ok(float));
        assert_eq!(mapper.convert(&b.double()), Ok(float));
    }

    #[rstest]
    #[case("String", BindingType::String)]
    #[case("StringHash", BindingType::StringHash)]
    #[case("JS_HEAP_PTR", BindingType::HeapPtr)]
    #[case("Node", BindingType::Class(TypeHash::from_name("Node")))]
    #[case("Atomic::Node", BindingType::Class(TypeHash::from_name("Node")))]
    #[case("BlendMode", BindingType::Enum(TypeHash::from_name("BlendMode")))]
    fn named_types(#[case] name: &str, #[case] expected: BindingType) {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let registry = setup_registry();
        let options = BindingOptions::default();
        let mapper = TypeMapper::new(&registry, &options);

        assert_eq!(mapper.convert(&b.named(name)), Ok(expected));
    }

    #[test]
    fn reserved_names_shadow_registry() {
        let mut registry = BindingRegistry::new();
        registry.register_class(ClassEntry::new("String")).unwrap();
        let options = BindingOptions::default();
        let mapper = TypeMapper::new(&registry, &options);

        assert_eq!(mapper.convert_named("String"), Ok(BindingType::String));
    }

    #[test]
    fn configured_names() {
        let registry = BindingRegistry::new();
        let options = BindingOptions {
            string_type: "QString".into(),
            ..BindingOptions::default()
        };
        let mapper = TypeMapper::new(&registry, &options);

        assert_eq!(mapper.convert_named("QString"), Ok(BindingType::String));
        assert_eq!(
            mapper.convert_named("String"),
            Err(Unsupported::UnresolvedName {
                name: "String".into()
            })
        );
    }

    #[test]
    fn unresolved_name() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let registry = setup_registry();
        let options = BindingOptions::default();
        let mapper = TypeMapper::new(&registry, &options);

        assert_eq!(
            mapper.convert(&b.named("Widget")),
            Err(Unsupported::UnresolvedName {
                name: "Widget".into()
            })
        );
    }

    #[test]
    fn unsupported_categories() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let registry = setup_registry();
        let options = BindingOptions::default();
        let mapper = TypeMapper::new(&registry, &options);

        assert_eq!(mapper.convert(&b.undefined()), Err(Unsupported::Undefined));
        assert_eq!(
            mapper.convert(&b.void()),
            Err(Unsupported::Category { category: "void" })
        );
        assert_eq!(
            mapper.convert(&b.pointer(b.named("Node"))),
            Err(Unsupported::Category {
                category: "pointer"
            })
        );
        assert_eq!(
            mapper.convert(&b.array(b.int(), Some(4))),
            Err(Unsupported::Category { category: "array" })
        );
        assert_eq!(
            mapper.convert(&b.enum_type("BlendMode")),
            Err(Unsupported::Category { category: "enum" })
        );
        assert_eq!(
            mapper.convert(&b.function_type(b.method("Callback"))),
            Err(Unsupported::Category {
                category: "function"
            })
        );
    }
}
