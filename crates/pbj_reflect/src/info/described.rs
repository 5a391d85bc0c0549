use crate::info::MessageInfo;

// -----------------------------------------------------------------------------
// Described

/// A static accessor to a message type's descriptor.
///
/// Generated code implements it with a [`MessageInfoCell`](crate::info::MessageInfoCell),
/// so the descriptor is computed on first access and cached for the life of the process.
///
/// Note: Use [`DynamicDescribed`] for dynamic dispatch.
pub trait Described: 'static {
    /// Returns the cached descriptor of `Self`.
    fn message_info() -> &'static MessageInfo;
}

// -----------------------------------------------------------------------------
// DynamicDescribed

/// Provide dynamic dispatch for types that implement [`Described`].
///
/// Auto impl for all types that implemented [`Described`].
pub trait DynamicDescribed {
    /// Returns the descriptor of the value's concrete type.
    fn reflect_message_info(&self) -> &'static MessageInfo;
}

impl<T: Described> DynamicDescribed for T {
    #[inline]
    fn reflect_message_info(&self) -> &'static MessageInfo {
        T::message_info()
    }
}

/// Returns the descriptor of `T`.
///
/// This is a pure function of `T`'s field declarations; the result is cached
/// per type and safe to look up from any thread.
#[inline]
pub fn describe_type<T: Described>() -> &'static MessageInfo {
    T::message_info()
}
