use core::fmt::Display;
use serde_core::ser::Error;

#[cfg(all(debug_assertions, feature = "debug"))]
std::thread_local! {
    pub(super) static MESSAGE_INFO_STACK: core::cell::RefCell<crate::serde::MessageInfoStack> =
        const { core::cell::RefCell::new(crate::serde::MessageInfoStack::new()) };
}

/// Builds a custom serialization error.
///
/// Prefer this over [`Error::custom`], debug builds append the message path.
#[inline]
pub(super) fn make_custom_error<E: Error>(msg: impl Display) -> E {
    #[cfg(all(debug_assertions, feature = "debug"))]
    {
        MESSAGE_INFO_STACK.with_borrow(|stack| E::custom(format_args!("{msg} (stack:\n{stack:?})")))
    }
    #[cfg(not(all(debug_assertions, feature = "debug")))]
    {
        E::custom(msg)
    }
}
