use thiserror::Error;

use crate::info::{FieldKind, ScalarType};

// -----------------------------------------------------------------------------
// DescriptorError

/// A declared default that cannot be represented by its field.
///
/// These errors never abort descriptor construction: the field is kept with
/// no default, the error is logged and stored in
/// [`MessageInfo::diagnostics`](crate::info::MessageInfo::diagnostics).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DescriptorError {
    #[error("default `{literal}` of field `{field}` is not a valid {ty}")]
    InvalidLiteral {
        field: &'static str,
        literal: &'static str,
        ty: ScalarType,
    },

    #[error("default `{literal}` of field `{field}` is not a member of enum `{enum_name}`")]
    UnknownEnumValue {
        field: &'static str,
        literal: &'static str,
        enum_name: &'static str,
    },

    #[error("field `{field}` of kind {kind} cannot declare a default (`{literal}`)")]
    NotScalar {
        field: &'static str,
        literal: &'static str,
        kind: FieldKind,
    },
}
