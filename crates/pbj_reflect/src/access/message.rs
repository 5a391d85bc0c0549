use crate::access::{FieldMut, FieldRef};
use crate::info::DynamicDescribed;

/// A generated message type.
///
/// `field(i)` and `field_mut(i)` must return the field described by
/// `reflect_message_info().field_at(i)`, with the matching [`FieldRef`] variant.
/// Indices past the last field return `None`.
///
/// # Examples
///
/// ```
/// use pbj_reflect::Message;
/// use pbj_reflect::access::{FieldMut, FieldRef};
/// use pbj_reflect::info::{Described, FieldDecl, MessageInfo, MessageInfoCell, ScalarType};
///
/// #[derive(Default)]
/// struct Inner {
///     key: Option<String>,
///     def: Option<String>,
/// }
///
/// impl Described for Inner {
///     fn message_info() -> &'static MessageInfo {
///         static CELL: MessageInfoCell = MessageInfoCell::new();
///         CELL.get_or_init(|| MessageInfo::new::<Self>("Inner", &[
///             FieldDecl::scalar("key", ScalarType::String),
///             FieldDecl::scalar("def", ScalarType::String).with_default("def-str"),
///         ]))
///     }
/// }
///
/// impl Message for Inner {
///     fn field(&self, index: usize) -> Option<FieldRef<'_>> {
///         match index {
///             0 => Some(FieldRef::Scalar(&self.key)),
///             1 => Some(FieldRef::Scalar(&self.def)),
///             _ => None,
///         }
///     }
///
///     fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
///         match index {
///             0 => Some(FieldMut::Scalar(&mut self.key)),
///             1 => Some(FieldMut::Scalar(&mut self.def)),
///             _ => None,
///         }
///     }
/// }
///
/// let mut inner = Inner::default();
/// pbj_reflect::fill_defaults(&mut inner);
/// assert_eq!(inner.def.as_deref(), Some("def-str"));
/// assert_eq!(inner.key, None);
/// ```
pub trait Message: DynamicDescribed + 'static {
    /// Returns the field at `index`.
    fn field(&self, index: usize) -> Option<FieldRef<'_>>;

    /// Returns the field at `index` mutably.
    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;
}
