use alloc::string::{String, ToString};
use core::str::FromStr;

use crate::info::ScalarType;

// -----------------------------------------------------------------------------
// ScalarValue

/// An owned scalar, the parsed form of a declared default.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    Enum(i32),
}

/// Parse a decimal literal into the exact integer width, `None` on overflow or junk.
macro_rules! parse_int {
    ($literal:ident, $variant:ident) => {
        $literal.parse().ok().map(ScalarValue::$variant)
    };
}

impl ScalarValue {
    /// Parses a default literal according to `ty`.
    ///
    /// - integers are base-10 and must fit the declared width.
    /// - `bool` is `true` for `"1"` or `"true"`, anything else is `false`.
    /// - floats accept decimal notation, `inf`, `-inf` and `nan`; a decimal that
    ///   overflows the declared width is rejected.
    /// - strings are copied verbatim.
    /// - enums accept a decimal `i32`; membership is checked by the caller.
    ///
    /// Returns `None` if the literal is not representable.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbj_reflect::info::{ScalarType, ScalarValue};
    ///
    /// assert_eq!(ScalarValue::parse(ScalarType::I32, "10"), Some(ScalarValue::I32(10)));
    /// assert_eq!(ScalarValue::parse(ScalarType::U8, "256"), None);
    /// assert_eq!(ScalarValue::parse(ScalarType::Bool, "1"), Some(ScalarValue::Bool(true)));
    /// ```
    pub fn parse(ty: ScalarType, literal: &str) -> Option<Self> {
        match ty {
            ScalarType::Bool => Some(Self::Bool(matches!(literal, "1" | "true"))),
            ScalarType::I8 => parse_int!(literal, I8),
            ScalarType::I16 => parse_int!(literal, I16),
            ScalarType::I32 => parse_int!(literal, I32),
            ScalarType::I64 => parse_int!(literal, I64),
            ScalarType::U8 => parse_int!(literal, U8),
            ScalarType::U16 => parse_int!(literal, U16),
            ScalarType::U32 => parse_int!(literal, U32),
            ScalarType::U64 => parse_int!(literal, U64),
            ScalarType::F32 => parse_float(literal).map(Self::F32),
            ScalarType::F64 => parse_float(literal).map(Self::F64),
            ScalarType::String => Some(Self::String(literal.to_string())),
            ScalarType::Enum(_) => parse_int!(literal, Enum),
        }
    }

    /// Returns the variant name, used in diagnostics.
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::U8(_) => "U8",
            Self::U16(_) => "U16",
            Self::U32(_) => "U32",
            Self::U64(_) => "U64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Enum(_) => "Enum",
        }
    }
}

fn parse_float<F: FromStr + Float>(literal: &str) -> Option<F> {
    match literal {
        "inf" => Some(F::INFINITY),
        "-inf" => Some(F::NEG_INFINITY),
        "nan" => Some(F::NAN),
        // `str::parse` saturates to infinity on overflow.
        _ => literal.parse::<F>().ok().filter(|v| v.is_finite()),
    }
}

trait Float: Copy {
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    const NAN: Self;

    fn is_finite(self) -> bool;
}

macro_rules! impl_float {
    ($($ty:ident),*) => {
        $(
            impl Float for $ty {
                const INFINITY: Self = $ty::INFINITY;
                const NEG_INFINITY: Self = $ty::NEG_INFINITY;
                const NAN: Self = $ty::NAN;

                #[inline]
                fn is_finite(self) -> bool {
                    $ty::is_finite(self)
                }
            }
        )*
    };
}

impl_float!(f32, f64);

// -----------------------------------------------------------------------------
// ScalarRef

/// A borrowed scalar, as read from a message field.
///
/// Serializes as the plain JSON scalar; enumerations serialize as their integer encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(&'a str),
    Enum(i32),
}
