//! Field access on message instances.
//!
//! Generated types implement [`Message`], exposing every declared field by its
//! ordinal position as a [`FieldRef`] or [`FieldMut`]. The field slots themselves
//! are type-erased through a small set of traits:
//!
//! - [`ScalarField`]: an optional scalar (`Option<T>` where `T: Scalar`).
//! - [`RepeatedScalarField`] / [`RepeatedMessageField`]: `Option<Vec<T>>`, where
//!   `None` and `Some(vec![])` stay distinguishable, or a plain `Vec<T>` that is
//!   always present.
//! - [`MapField`]: maps, serialized through their own `serde` implementation.
//!
//! Enumerations implement [`ProtoEnum`], usually through [`proto_enum!`](crate::proto_enum).

// -----------------------------------------------------------------------------
// Modules

mod enums;
mod field;
mod map;
mod message;
mod repeated;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use enums::ProtoEnum;
pub use field::{FieldMut, FieldRef};
pub use map::MapField;
pub use message::Message;
pub use repeated::{RepeatedMessageField, RepeatedScalarField};
pub use scalar::{MismatchedScalar, Scalar, ScalarField};
