//! Static descriptors of generated message types.
//!
//! ## Menu
//!
//! - [`FieldDecl`]: A const field declaration emitted by generated code
//!   (name, [`FieldKind`], omit-when-empty flag and optional default literal).
//!
//! - [`MessageInfo`]: The resolved descriptor of one message type, an ordered list of [`FieldInfo`].
//!   Default literals are parsed once, when the descriptor is built.
//!     - [`FieldInfo`]: One resolved field, including its parsed [`ScalarValue`] default.
//!     - [`MessageInfoCell`]: Static storage used by [`Described`] implementations.
//!
//! - [`FieldKind`]: `Scalar`, `Message`, `RepeatedScalar`, `RepeatedMessage` or `Map`.
//!     - [`ScalarType`]: The underlying type of a scalar (integer widths, floats, bool, string, enum).
//!
//! - [`EnumInfo`]: Name table of a generated enumeration.
//!
//! - [`ScalarValue`] / [`ScalarRef`]: Owned and borrowed scalar values.
//!
//! - [`Described`]: A trait for obtaining `MessageInfo` without an instance,
//!   [`DynamicDescribed`] for dynamic dispatch.
//!
//! - [`DescriptorError`]: A declared default that cannot be represented by its field.

// -----------------------------------------------------------------------------
// Modules

mod described;
mod enum_info;
mod error;
mod field_info;
mod kind;
mod message_info;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use described::{Described, DynamicDescribed, describe_type};
pub use enum_info::EnumInfo;
pub use error::DescriptorError;
pub use field_info::{FieldDecl, FieldInfo};
pub use kind::{FieldKind, ScalarType};
pub use message_info::{MessageInfo, MessageInfoCell};
pub use value::{ScalarRef, ScalarValue};
