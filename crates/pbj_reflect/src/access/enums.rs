use crate::info::EnumInfo;

/// A generated enumeration, encoded as an `i32`.
///
/// Usually implemented through [`proto_enum!`](crate::proto_enum), which also
/// provides `Display`, `Serialize` (as the integer) and `Deserialize`
/// (from the integer or the member name).
pub trait ProtoEnum: Copy + 'static {
    /// Returns the name table of the enumeration.
    fn enum_info() -> &'static EnumInfo;

    /// Converts an encoded value, `None` if no member is encoded as `value`.
    fn from_i32(value: i32) -> Option<Self>;

    /// Returns the encoded value.
    fn to_i32(self) -> i32;

    /// Returns the member name.
    #[inline]
    fn name(self) -> &'static str {
        Self::enum_info().name_of(self.to_i32()).unwrap_or("")
    }
}
