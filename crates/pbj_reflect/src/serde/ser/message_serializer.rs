use alloc::format;
use alloc::vec::Vec;

use serde_core::ser::SerializeStruct;
use serde_core::{Serialize, Serializer};

use super::SerializeOptions;
use super::error_utils::make_custom_error;
use super::field_serializer::FieldSerializer;

use crate::Message;
use crate::access::FieldRef;
use crate::info::FieldInfo;

/// A serializer for the fields of one [`Message`].
pub(super) struct MessageSerializer<'a> {
    pub message: &'a dyn Message,
    pub options: SerializeOptions,
}

impl Serialize for MessageSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let info = self.message.reflect_message_info();

        // The struct length must be known up front, so omission is decided first.
        let mut fields = Vec::with_capacity(info.field_len());
        for field in info.iter() {
            let Some(value) = self.message.field(field.index()) else {
                return Err(make_custom_error(format!(
                    "field `{}` was missing while serializing type {}",
                    field.name(),
                    info.type_path(),
                )));
            };

            if !value.matches(field.kind()) {
                return Err(make_custom_error(format!(
                    "field `{}` of type {} is declared as {} but exposed as {}",
                    field.name(),
                    info.type_path(),
                    field.kind(),
                    value.variant_name(),
                )));
            }

            if is_emitted(field, value, self.options) {
                fields.push((field.name(), value));
            }
        }

        let mut state = serializer.serialize_struct(info.type_ident(), fields.len())?;

        for (name, value) in fields {
            state.serialize_field(
                name,
                &FieldSerializer {
                    value,
                    options: self.options,
                },
            )?;
        }

        state.end()
    }
}

fn is_emitted(field: &FieldInfo, value: FieldRef<'_>, options: SerializeOptions) -> bool {
    if !field.omit_empty() {
        return true;
    }

    match value {
        FieldRef::Scalar(scalar) => scalar.is_set(),
        FieldRef::Message(message) => message.is_some(),
        FieldRef::RepeatedScalar(list) => {
            list.is_present() && (list.len() > 0 || options.emit_empty_collections)
        }
        FieldRef::RepeatedMessage(list) => {
            list.is_present() && (list.len() > 0 || options.emit_empty_collections)
        }
        FieldRef::Map(map) => map.len() > 0,
    }
}
