//! Filling unset optional scalars with their declared defaults.
//!
//! The walk is depth-first and pre-order over an instance tree:
//!
//! - a scalar that is unset and declares a default is set to the parsed default;
//!   set scalars are never overwritten, even when they hold a zero value.
//! - a present nested message is visited; an absent one is left absent, so no
//!   defaults are ever synthesized for messages that were never constructed.
//! - every element of a repeated message field is visited; the sequence itself
//!   is never created.
//! - repeated scalars carry no defaults.
//! - map fields are skipped with a warning.
//!
//! Filling never fails. Problems are logged and the remaining fields are still filled.
//! Applying it twice yields the same result as applying it once.

// -----------------------------------------------------------------------------
// Modules

mod options;

// -----------------------------------------------------------------------------
// Exports

pub use options::{EnumFallback, FillOptions};

use alloc::borrow::Cow;

use crate::access::{FieldMut, Message, ScalarField};
use crate::info::{FieldInfo, FieldKind, MessageInfo, ScalarType, ScalarValue};

// -----------------------------------------------------------------------------
// DefaultFiller

/// Applies declared defaults to message instances.
///
/// See the [module documentation](self) for the traversal rules.
///
/// # Examples
///
/// ```
/// use pbj_reflect::defaults::{DefaultFiller, EnumFallback};
/// # use pbj_reflect::Message;
/// # fn demo(message: &mut dyn Message) {
/// DefaultFiller::new()
///     .with_enum_fallback(EnumFallback::FirstDeclared)
///     .fill(message);
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFiller {
    options: FillOptions,
}

impl DefaultFiller {
    /// Creates a filler with the default [`FillOptions`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            options: FillOptions::new(),
        }
    }

    /// Creates a filler with the given options.
    #[inline]
    pub const fn with_options(options: FillOptions) -> Self {
        Self { options }
    }

    /// Sets how enum fields without a declared default are treated.
    #[inline]
    pub const fn with_enum_fallback(mut self, fallback: EnumFallback) -> Self {
        self.options.enum_fallback = fallback;
        self
    }

    /// Returns the options in use.
    #[inline]
    pub const fn options(&self) -> &FillOptions {
        &self.options
    }

    /// Fills `message` and every message reachable from it in place.
    pub fn fill(&self, message: &mut dyn Message) {
        let info = message.reflect_message_info();

        for field in info.iter() {
            match field.kind() {
                FieldKind::Scalar(ty) => match message.field_mut(field.index()) {
                    Some(FieldMut::Scalar(slot)) => self.fill_scalar(info, field, ty, slot),
                    other => unexpected_field(info, field, other.as_ref()),
                },
                FieldKind::Message => match message.field_mut(field.index()) {
                    Some(FieldMut::Message(Some(nested))) => self.fill(nested),
                    Some(FieldMut::Message(None)) => {}
                    other => unexpected_field(info, field, other.as_ref()),
                },
                FieldKind::RepeatedMessage => match message.field_mut(field.index()) {
                    Some(FieldMut::RepeatedMessage(list)) => {
                        for i in 0..list.len() {
                            if let Some(element) = list.get_mut(i) {
                                self.fill(element);
                            }
                        }
                    }
                    other => unexpected_field(info, field, other.as_ref()),
                },
                FieldKind::RepeatedScalar(_) => {}
                FieldKind::Map => {
                    log::warn!(
                        "{}: skipping field `{}`, {} fields carry no defaults",
                        info.type_ident(),
                        field.name(),
                        field.kind(),
                    );
                }
            }
        }
    }

    fn fill_scalar(
        &self,
        info: &MessageInfo,
        field: &FieldInfo,
        ty: ScalarType,
        slot: &mut dyn ScalarField,
    ) {
        if slot.is_set() {
            return;
        }

        let value = match field.default_value() {
            Some(value) => Cow::Borrowed(value),
            None => match self.enum_fallback(ty) {
                Some(value) => Cow::Owned(value),
                None => return,
            },
        };

        match slot.set(&value) {
            Ok(()) => log::trace!(
                "{}: field `{}` set to its default {:?}",
                info.type_ident(),
                field.name(),
                value,
            ),
            Err(err) => log::warn!(
                "{}: cannot apply the default of field `{}`: {err}",
                info.type_ident(),
                field.name(),
            ),
        }
    }

    fn enum_fallback(&self, ty: ScalarType) -> Option<ScalarValue> {
        let ScalarType::Enum(enum_info) = ty else {
            return None;
        };

        let value = match self.options.enum_fallback {
            EnumFallback::Unset => None,
            EnumFallback::Zero => enum_info.zero_member(),
            EnumFallback::FirstDeclared => enum_info.first_member(),
        };
        value.map(ScalarValue::Enum)
    }
}

#[cold]
fn unexpected_field(info: &MessageInfo, field: &FieldInfo, found: Option<&FieldMut<'_>>) {
    match found {
        Some(found) => log::warn!(
            "{}: skipping field `{}`, declared as {} but exposed as {}",
            info.type_ident(),
            field.name(),
            field.kind(),
            found.variant_name(),
        ),
        None => log::warn!(
            "{}: skipping field `{}`, no value at index {}",
            info.type_ident(),
            field.name(),
            field.index(),
        ),
    }
}

/// Fills `message` with [`DefaultFiller::new`].
///
/// Enum fields without a declared default are left unset.
#[inline]
pub fn fill_defaults(message: &mut dyn Message) {
    DefaultFiller::new().fill(message);
}
