// -----------------------------------------------------------------------------
// EnumFallback

/// How an enum field that declares no default is filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnumFallback {
    /// Leave the field unset.
    #[default]
    Unset,
    /// Use the zero-valued member, if the enumeration declares one.
    Zero,
    /// Use the first declared member.
    FirstDeclared,
}

// -----------------------------------------------------------------------------
// FillOptions

/// Options of a [`DefaultFiller`](super::DefaultFiller).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillOptions {
    pub enum_fallback: EnumFallback,
}

impl FillOptions {
    /// Enum fields without a declared default stay unset.
    #[inline]
    pub const fn new() -> Self {
        Self {
            enum_fallback: EnumFallback::Unset,
        }
    }
}
