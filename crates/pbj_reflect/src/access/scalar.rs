use alloc::string::String;

use thiserror::Error;

use crate::access::ProtoEnum;
use crate::info::{ScalarRef, ScalarValue};

// -----------------------------------------------------------------------------
// Scalar

/// A value type that can back a scalar field.
///
/// Implemented for all integer widths, `f32`, `f64`, `bool`, `String`
/// and every [`ProtoEnum`].
pub trait Scalar: Sized + 'static {
    /// Returns a borrowed view of the value.
    fn as_scalar_ref(&self) -> ScalarRef<'_>;

    /// Converts a parsed default into `Self`, `None` if the variant does not match.
    fn from_scalar_value(value: &ScalarValue) -> Option<Self>;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                #[inline]
                fn as_scalar_ref(&self) -> ScalarRef<'_> {
                    ScalarRef::$variant(*self)
                }

                #[inline]
                fn from_scalar_value(value: &ScalarValue) -> Option<Self> {
                    match value {
                        ScalarValue::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl Scalar for String {
    #[inline]
    fn as_scalar_ref(&self) -> ScalarRef<'_> {
        ScalarRef::Str(self)
    }

    fn from_scalar_value(value: &ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::String(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl<E: ProtoEnum> Scalar for E {
    #[inline]
    fn as_scalar_ref(&self) -> ScalarRef<'_> {
        ScalarRef::Enum(self.to_i32())
    }

    fn from_scalar_value(value: &ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Enum(v) => E::from_i32(*v),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// ScalarField

/// A value that cannot be stored in the targeted scalar field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot store a {value} scalar in a field of type `{target}`")]
pub struct MismatchedScalar {
    pub value: &'static str,
    pub target: &'static str,
}

/// An optional scalar slot, present/absent independent of its value.
pub trait ScalarField {
    /// Returns the value, `None` when the field is unset.
    fn get(&self) -> Option<ScalarRef<'_>>;

    /// Stores `value`, marking the field as set.
    fn set(&mut self, value: &ScalarValue) -> Result<(), MismatchedScalar>;

    /// Returns `true` when the field is set, even to a zero value.
    #[inline]
    fn is_set(&self) -> bool {
        self.get().is_some()
    }
}

impl<T: Scalar> ScalarField for Option<T> {
    #[inline]
    fn get(&self) -> Option<ScalarRef<'_>> {
        self.as_ref().map(Scalar::as_scalar_ref)
    }

    fn set(&mut self, value: &ScalarValue) -> Result<(), MismatchedScalar> {
        match T::from_scalar_value(value) {
            Some(v) => {
                *self = Some(v);
                Ok(())
            }
            None => Err(MismatchedScalar {
                value: value.variant_name(),
                target: core::any::type_name::<T>(),
            }),
        }
    }

    #[inline]
    fn is_set(&self) -> bool {
        self.is_some()
    }
}
