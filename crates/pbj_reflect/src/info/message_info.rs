use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::TypeId;

use pbj_os::sync::OnceLock;
use pbj_utils::hash::HashMap;

use crate::info::{DescriptorError, FieldDecl, FieldInfo};

// -----------------------------------------------------------------------------
// MessageInfo

/// The resolved descriptor of a message type.
///
/// Built once per type from its [`FieldDecl`] table and never modified afterwards.
/// Unrepresentable defaults are logged, recorded in [`diagnostics`](Self::diagnostics)
/// and dropped from their field.
///
/// # Examples
///
/// ```
/// use pbj_reflect::info::{FieldDecl, MessageInfo, ScalarType};
///
/// struct Inner;
///
/// let info = MessageInfo::new::<Inner>("Inner", &[
///     FieldDecl::scalar("key", ScalarType::String),
///     FieldDecl::scalar("def", ScalarType::String).with_default("def-str"),
/// ]);
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("def"), Some(1));
/// assert!(info.field("def").unwrap().has_default());
/// ```
#[derive(Debug)]
pub struct MessageInfo {
    type_id: TypeId,
    type_path: &'static str,
    type_ident: &'static str,
    fields: Box<[FieldInfo]>,
    field_indices: HashMap<&'static str, usize>,
    diagnostics: Box<[DescriptorError]>,
}

impl MessageInfo {
    /// Create a new [`MessageInfo`] for `T`.
    ///
    /// The order of fields is fixed and follows `decls`.
    pub fn new<T: 'static>(type_ident: &'static str, decls: &[FieldDecl]) -> Self {
        let type_path = core::any::type_name::<T>();

        let mut fields = Vec::with_capacity(decls.len());
        let mut field_indices = HashMap::default();
        let mut diagnostics = Vec::new();

        for (index, decl) in decls.iter().enumerate() {
            let (field, err) = FieldInfo::resolve(index, decl);
            if let Some(err) = err {
                log::warn!("{type_ident}: {err}; the field is treated as having no default");
                diagnostics.push(err);
            }
            if field_indices.insert(field.name(), index).is_some() {
                log::warn!("{type_ident}: duplicate field name `{}`", field.name());
            }
            fields.push(field);
        }

        Self {
            type_id: TypeId::of::<T>(),
            type_path,
            type_ident,
            fields: fields.into_boxed_slice(),
            field_indices,
            diagnostics: diagnostics.into_boxed_slice(),
        }
    }

    /// Returns the `TypeId` of the described type.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the full type path, used in diagnostics.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the message name, without module path.
    #[inline]
    pub const fn type_ident(&self) -> &'static str {
        self.type_ident
    }

    /// Returns the [`FieldInfo`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.field_indices.get(name).map(|&index| &self.fields[index])
    }

    /// Returns the [`FieldInfo`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the index for the given field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, FieldInfo> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the errors reported while resolving default literals.
    #[inline]
    pub fn diagnostics(&self) -> &[DescriptorError] {
        &self.diagnostics
    }
}

// -----------------------------------------------------------------------------
// MessageInfoCell

/// Container for static storage of a [`MessageInfo`].
///
/// This is usually used to implement [`Described`](crate::info::Described).
/// Internally, there is an [`OnceLock`], so concurrent first lookups build the
/// descriptor once and every caller observes the same value.
///
/// ## Example
///
/// ```
/// use pbj_reflect::info::{Described, FieldDecl, MessageInfo, MessageInfoCell, ScalarType};
///
/// struct Inner;
///
/// impl Described for Inner {
///     fn message_info() -> &'static MessageInfo {
///         static CELL: MessageInfoCell = MessageInfoCell::new();
///         CELL.get_or_init(|| MessageInfo::new::<Self>("Inner", &[
///             FieldDecl::scalar("key", ScalarType::String),
///         ]))
///     }
/// }
///
/// assert!(core::ptr::eq(Inner::message_info(), Inner::message_info()));
/// ```
pub struct MessageInfoCell(OnceLock<MessageInfo>);

impl MessageInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the `MessageInfo` stored in the cell.
    ///
    /// If the cell is empty, it is filled with the result of `f`.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &MessageInfo
    where
        F: FnOnce() -> MessageInfo,
    {
        self.0.get_or_init(f)
    }
}
