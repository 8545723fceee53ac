//! Primitive kinds for scalars that cross the binding boundary by value.

use std::fmt;

/// Primitive type kinds.
///
/// Integer kinds follow the front end's integer categories one to one.
/// Every floating category (`float`, `double`, `long double`) collapses
/// to [`PrimitiveKind::Float`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Char,
    Char16,
    Char32,
    WideChar,
    Short,
    Int,
    Long,
    LongLong,
    Float,
}

impl PrimitiveKind {
    /// Get the C++ spelling of this primitive kind.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Char16 => "char16_t",
            PrimitiveKind::Char32 => "char32_t",
            PrimitiveKind::WideChar => "wchar_t",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::LongLong => "long long",
            PrimitiveKind::Float => "float",
        }
    }

    /// Check if this is one of the integer kinds (including `bool`).
    pub const fn is_integer(self) -> bool {
        !matches!(self, PrimitiveKind::Float)
    }

    /// Check if this is the floating kind.
    pub const fn is_float(self) -> bool {
        matches!(self, PrimitiveKind::Float)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
