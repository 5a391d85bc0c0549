//! Serialization support for [`Message`](crate::Message) values.
//!
//! # Overview
//!
//! - [`SerializeDriver`]: Serializes any `&dyn Message` through `serde`, driven by its
//!   [`MessageInfo`](crate::info::MessageInfo) instead of a derived `Serialize` implementation.
//!     - Field names, order and omission follow the descriptor table.
//!     - [`SerializeOptions`] selects the standard rules or the safe-collection rule.
//! - [`is_unset_or_empty`]: A `skip_serializing_if` predicate for collection fields
//!   of serde-derived message types.
//! - [`deserialize_enum`]: Deserializes a [`ProtoEnum`](crate::ProtoEnum) from its integer
//!   encoding or its member name.
//!
//! ## Omission rules
//!
//! A field declared with `omit_empty` (the default) is left out when:
//!
//! | Kind | Omitted when |
//! |---|---|
//! | scalar | unset |
//! | message | absent |
//! | repeated | absent, or empty unless `emit_empty_collections` |
//! | map | absent or empty |
//!
//! A field declared with [`keep_empty`](crate::info::FieldDecl::keep_empty) is always written,
//! absent values as `null`.
//!
//! With `emit_empty_collections == false` the output is identical to what a `serde`-derived
//! type with `skip_serializing_if` on every omit-when-empty field produces.

// -----------------------------------------------------------------------------
// Debug utils

#[cfg(all(debug_assertions, feature = "debug"))]
mod info_stack;
#[cfg(all(debug_assertions, feature = "debug"))]
use info_stack::MessageInfoStack;

// -----------------------------------------------------------------------------
// Modules

mod de;
mod ser;
mod skip;

// -----------------------------------------------------------------------------
// Exports

pub use de::deserialize_enum;
pub use ser::{SerializeDriver, SerializeOptions};
pub use skip::{Collection, is_unset_or_empty};
