use core::fmt;

use crate::info::EnumInfo;

// -----------------------------------------------------------------------------
// ScalarType

/// The underlying type of a scalar field.
///
/// Enumerations are carried as their `i32` encoding, together with the
/// [`EnumInfo`] that names their members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Enum(&'static EnumInfo),
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.pad("bool"),
            Self::I8 => f.pad("i8"),
            Self::I16 => f.pad("i16"),
            Self::I32 => f.pad("i32"),
            Self::I64 => f.pad("i64"),
            Self::U8 => f.pad("u8"),
            Self::U16 => f.pad("u16"),
            Self::U32 => f.pad("u32"),
            Self::U64 => f.pad("u64"),
            Self::F32 => f.pad("f32"),
            Self::F64 => f.pad("f64"),
            Self::String => f.pad("string"),
            Self::Enum(info) => write!(f, "enum {}", info.name()),
        }
    }
}

// -----------------------------------------------------------------------------
// FieldKind

/// The closed set of field shapes a message can declare.
///
/// The kind is resolved once per type, when the [`MessageInfo`](crate::info::MessageInfo)
/// is built, and drives both default filling and serialization.
///
/// `Map` fields can be declared and serialized, but carry no defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ScalarType),
    Message,
    RepeatedScalar(ScalarType),
    RepeatedMessage,
    Map,
}

impl FieldKind {
    /// Returns `true` for `RepeatedScalar` and `RepeatedMessage`.
    #[inline]
    pub const fn is_repeated(&self) -> bool {
        matches!(self, Self::RepeatedScalar(_) | Self::RepeatedMessage)
    }

    /// Returns the [`ScalarType`] of a `Scalar` field.
    #[inline]
    pub const fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            Self::Scalar(ty) => Some(*ty),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(ty) => write!(f, "scalar ({ty})"),
            Self::Message => f.pad("message"),
            Self::RepeatedScalar(ty) => write!(f, "repeated scalar ({ty})"),
            Self::RepeatedMessage => f.pad("repeated message"),
            Self::Map => f.pad("map"),
        }
    }
}
