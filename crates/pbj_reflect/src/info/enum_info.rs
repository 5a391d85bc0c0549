// -----------------------------------------------------------------------------
// EnumInfo

/// The name table of a generated enumeration.
///
/// Built in a `const` context by [`proto_enum!`](crate::proto_enum), so every
/// enumeration owns exactly one `static` `EnumInfo`.
///
/// # Examples
///
/// ```
/// use pbj_reflect::info::EnumInfo;
///
/// static INFO: EnumInfo = EnumInfo::new("MockPbEnum", &[
///     ("PS_MNG", 0),
///     ("PS_MEMBER", 1),
///     ("PS_MM", 2),
/// ]);
///
/// assert_eq!(INFO.name_of(1), Some("PS_MEMBER"));
/// assert_eq!(INFO.value_of("PS_MM"), Some(2));
/// assert!(!INFO.contains(7));
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct EnumInfo {
    name: &'static str,
    members: &'static [(&'static str, i32)],
}

impl EnumInfo {
    /// Creates a new [`EnumInfo`], `members` are kept in declaration order.
    #[inline]
    pub const fn new(name: &'static str, members: &'static [(&'static str, i32)]) -> Self {
        Self { name, members }
    }

    /// Returns the enumeration's name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the name of the member encoded as `value`.
    pub fn name_of(&self, value: i32) -> Option<&'static str> {
        self.members
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(name, _)| *name)
    }

    /// Returns the encoding of the member called `name`.
    pub fn value_of(&self, name: &str) -> Option<i32> {
        self.members
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| *value)
    }

    /// Returns `true` if some member is encoded as `value`.
    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.name_of(value).is_some()
    }

    /// Returns the encoding of the first declared member.
    #[inline]
    pub fn first_member(&self) -> Option<i32> {
        self.members.first().map(|(_, value)| *value)
    }

    /// Returns `Some(0)` if the enumeration declares a zero-valued member.
    #[inline]
    pub fn zero_member(&self) -> Option<i32> {
        self.contains(0).then_some(0)
    }

    /// Returns an iterator over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, i32)> + '_ {
        self.members.iter().copied()
    }

    /// Returns the number of members.
    #[inline]
    pub const fn len(&self) -> usize {
        self.members.len()
    }
}
