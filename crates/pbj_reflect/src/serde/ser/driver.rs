use serde_core::{Serialize, Serializer};

use super::message_serializer::MessageSerializer;

#[cfg(all(debug_assertions, feature = "debug"))]
use super::error_utils::MESSAGE_INFO_STACK;

use crate::Message;

// -----------------------------------------------------------------------------
// SerializeOptions

/// Per-call serialization options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Write present-but-empty repeated fields as `[]`, even when they are
    /// declared omit-when-empty.
    ///
    /// Absent repeated fields are omitted either way. Maps and non-repeated
    /// fields are unaffected.
    pub emit_empty_collections: bool,
}

impl SerializeOptions {
    /// The standard omission rules.
    #[inline]
    pub const fn new() -> Self {
        Self {
            emit_empty_collections: false,
        }
    }

    /// The standard rules plus the safe-collection rule.
    #[inline]
    pub const fn safe_collections() -> Self {
        Self {
            emit_empty_collections: true,
        }
    }
}

// -----------------------------------------------------------------------------
// SerializeDriver

/// Serializer for [`Message`] values, driven by their descriptor.
///
/// Each message is written as a struct named after
/// [`type_ident`](crate::info::MessageInfo::type_ident), with its fields in
/// declaration order. Nested and repeated messages are serialized with the same options.
///
/// A message whose [`field`](Message::field) does not match its descriptor (a missing
/// index or the wrong [`FieldRef`](crate::access::FieldRef) variant) is a serialization error.
///
/// # Examples
///
/// ```
/// # use pbj_reflect::Message;
/// use pbj_reflect::serde::{SerializeDriver, SerializeOptions};
///
/// # fn demo(message: &dyn Message) -> serde_json::Result<()> {
/// let standard = serde_json::to_string(&SerializeDriver::new(message))?;
///
/// let safe = SerializeDriver::with_options(message, SerializeOptions::safe_collections());
/// let safe = serde_json::to_string(&safe)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct SerializeDriver<'a> {
    value: &'a dyn Message,
    options: SerializeOptions,
}

impl<'a> SerializeDriver<'a> {
    /// Creates a serializer using the standard omission rules.
    #[inline]
    pub const fn new(value: &'a dyn Message) -> Self {
        Self {
            value,
            options: SerializeOptions::new(),
        }
    }

    /// Creates a serializer with the given options.
    #[inline]
    pub const fn with_options(value: &'a dyn Message, options: SerializeOptions) -> Self {
        Self { value, options }
    }

    /// Returns the options in use.
    #[inline]
    pub const fn options(&self) -> SerializeOptions {
        self.options
    }
}

impl Serialize for SerializeDriver<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[cfg(all(debug_assertions, feature = "debug"))]
        MESSAGE_INFO_STACK.with_borrow_mut(|stack| stack.push(self.value.reflect_message_info()));

        let output = MessageSerializer {
            message: self.value,
            options: self.options,
        }
        .serialize(serializer);

        #[cfg(all(debug_assertions, feature = "debug"))]
        MESSAGE_INFO_STACK.with_borrow_mut(|stack| stack.pop());

        output
    }
}
