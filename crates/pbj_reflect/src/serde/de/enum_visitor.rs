use core::fmt::{self, Formatter};
use core::marker::PhantomData;

use serde_core::Deserializer;
use serde_core::de::{Error, Expected, Unexpected, Visitor};

use crate::access::ProtoEnum;

// -----------------------------------------------------------------------------
// Enum Visitor

/// A [`Visitor`] accepting the integer encoding or the member name of `E`.
struct EnumVisitor<T>(PhantomData<T>);

impl<T: ProtoEnum> EnumVisitor<T> {
    fn from_i64<E: Error>(value: i64) -> Result<T, E> {
        i32::try_from(value)
            .ok()
            .and_then(T::from_i32)
            .ok_or_else(|| E::invalid_value(Unexpected::Signed(value), &ExpectedMember::<T>::new()))
    }
}

impl<'de, T: ProtoEnum> Visitor<'de> for EnumVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        Expected::fmt(&ExpectedMember::<T>::new(), formatter)
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<T, E> {
        Self::from_i64(value)
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<T, E> {
        match i64::try_from(value) {
            Ok(value) => Self::from_i64(value),
            Err(_) => Err(E::invalid_value(
                Unexpected::Unsigned(value),
                &ExpectedMember::<T>::new(),
            )),
        }
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<T, E> {
        T::enum_info()
            .value_of(value)
            .and_then(T::from_i32)
            .ok_or_else(|| E::invalid_value(Unexpected::Str(value), &ExpectedMember::<T>::new()))
    }
}

struct ExpectedMember<T>(PhantomData<T>);

impl<T> ExpectedMember<T> {
    const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ProtoEnum> Expected for ExpectedMember<T> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "a member of enum `{}`", T::enum_info().name())
    }
}

/// Deserializes a [`ProtoEnum`] from its integer encoding or its member name.
///
/// Values that encode no declared member are rejected.
///
/// # Examples
///
/// ```
/// use pbj_reflect::proto_enum;
///
/// proto_enum! {
///     pub enum Color {
///         RED = 0,
///         GREEN = 1,
///     }
/// }
///
/// let by_value: Color = serde_json::from_str("1").unwrap();
/// let by_name: Color = serde_json::from_str("\"GREEN\"").unwrap();
/// assert_eq!(by_value, Color::GREEN);
/// assert_eq!(by_name, Color::GREEN);
///
/// assert!(serde_json::from_str::<Color>("7").is_err());
/// ```
pub fn deserialize_enum<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: ProtoEnum,
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(EnumVisitor(PhantomData))
}
