use crate::access::{MapField, Message, RepeatedMessageField, RepeatedScalarField, ScalarField};
use crate::info::FieldKind;

// -----------------------------------------------------------------------------
// FieldRef

/// An immutable reference to one field of a [`Message`].
#[derive(Clone, Copy)]
pub enum FieldRef<'a> {
    Scalar(&'a dyn ScalarField),
    Message(Option<&'a dyn Message>),
    RepeatedScalar(&'a dyn RepeatedScalarField),
    RepeatedMessage(&'a dyn RepeatedMessageField),
    Map(&'a dyn MapField),
}

impl<'a> FieldRef<'a> {
    /// Wraps an optional nested message, e.g. `FieldRef::message(self.inner.as_deref())`.
    #[inline]
    pub fn message<M: Message>(value: Option<&'a M>) -> Self {
        Self::Message(value.map(|m| m as &dyn Message))
    }

    /// Returns `true` if this variant is the one a field of `kind` must expose.
    pub fn matches(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (Self::Scalar(_), FieldKind::Scalar(_))
                | (Self::Message(_), FieldKind::Message)
                | (Self::RepeatedScalar(_), FieldKind::RepeatedScalar(_))
                | (Self::RepeatedMessage(_), FieldKind::RepeatedMessage)
                | (Self::Map(_), FieldKind::Map)
        )
    }

    /// Returns the variant name, used in diagnostics.
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "Scalar",
            Self::Message(_) => "Message",
            Self::RepeatedScalar(_) => "RepeatedScalar",
            Self::RepeatedMessage(_) => "RepeatedMessage",
            Self::Map(_) => "Map",
        }
    }
}

// -----------------------------------------------------------------------------
// FieldMut

/// A mutable reference to one field of a [`Message`].
pub enum FieldMut<'a> {
    Scalar(&'a mut dyn ScalarField),
    Message(Option<&'a mut dyn Message>),
    RepeatedScalar(&'a mut dyn RepeatedScalarField),
    RepeatedMessage(&'a mut dyn RepeatedMessageField),
    Map(&'a mut dyn MapField),
}

impl<'a> FieldMut<'a> {
    /// Wraps an optional nested message, e.g. `FieldMut::message(self.inner.as_deref_mut())`.
    #[inline]
    pub fn message<M: Message>(value: Option<&'a mut M>) -> Self {
        Self::Message(value.map(|m| m as &mut dyn Message))
    }

    /// Returns the variant name, used in diagnostics.
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "Scalar",
            Self::Message(_) => "Message",
            Self::RepeatedScalar(_) => "RepeatedScalar",
            Self::RepeatedMessage(_) => "RepeatedMessage",
            Self::Map(_) => "Map",
        }
    }
}
