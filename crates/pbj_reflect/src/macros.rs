/// Declares a generated enumeration.
///
/// The enum is `#[repr(i32)]` with the given encodings, and implements
/// [`ProtoEnum`](crate::ProtoEnum), `Display` (the member name), `Serialize`
/// (the integer encoding) and `Deserialize` (the integer encoding or the member name).
///
/// Member names are kept verbatim, so the usual `SCREAMING_CASE` names of
/// generated code do not trigger naming lints.
///
/// # Examples
///
/// ```
/// use pbj_reflect::{ProtoEnum, proto_enum};
///
/// proto_enum! {
///     /// Membership state.
///     pub enum MockPbEnum {
///         PS_MNG = 0,
///         PS_MEMBER = 1,
///         PS_MM = 2,
///     }
/// }
///
/// assert_eq!(MockPbEnum::PS_MEMBER.to_i32(), 1);
/// assert_eq!(MockPbEnum::from_i32(2), Some(MockPbEnum::PS_MM));
/// assert_eq!(MockPbEnum::PS_MNG.to_string(), "PS_MNG");
/// assert_eq!(serde_json::to_string(&MockPbEnum::PS_MM).unwrap(), "2");
/// ```
#[macro_export]
macro_rules! proto_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $($variant = $value),+
        }

        impl $crate::ProtoEnum for $name {
            fn enum_info() -> &'static $crate::info::EnumInfo {
                static INFO: $crate::info::EnumInfo = $crate::info::EnumInfo::new(
                    ::core::stringify!($name),
                    &[$((::core::stringify!($variant), $value)),+],
                );
                &INFO
            }

            fn from_i32(value: i32) -> ::core::option::Option<Self> {
                match value {
                    $($value => ::core::option::Option::Some(Self::$variant),)+
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn to_i32(self) -> i32 {
                self as i32
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad($crate::ProtoEnum::name(*self))
            }
        }

        impl $crate::__macro_exports::serde_core::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__macro_exports::serde_core::Serializer,
            {
                serializer.serialize_i32(*self as i32)
            }
        }

        impl<'de> $crate::__macro_exports::serde_core::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__macro_exports::serde_core::Deserializer<'de>,
            {
                $crate::serde::deserialize_enum(deserializer)
            }
        }
    };
}
