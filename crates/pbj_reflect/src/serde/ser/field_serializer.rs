use alloc::format;

use serde_core::ser::SerializeSeq;
use serde_core::{Serialize, Serializer};

use super::error_utils::make_custom_error;
use super::{SerializeDriver, SerializeOptions};

use crate::access::FieldRef;

/// A serializer for a single field value.
///
/// Absent values are written as `null`; they only reach this point for
/// fields that are not omitted when empty.
pub(super) struct FieldSerializer<'a> {
    pub value: FieldRef<'a>,
    pub options: SerializeOptions,
}

impl Serialize for FieldSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            FieldRef::Scalar(scalar) => match scalar.get() {
                Some(value) => value.serialize(serializer),
                None => serializer.serialize_none(),
            },
            FieldRef::Message(Some(message)) => {
                SerializeDriver::with_options(message, self.options).serialize(serializer)
            }
            FieldRef::Message(None) => serializer.serialize_none(),
            FieldRef::RepeatedScalar(list) => {
                if !list.is_present() {
                    return serializer.serialize_none();
                }

                let len = list.len();
                let mut state = serializer.serialize_seq(Some(len))?;
                for index in 0..len {
                    let Some(value) = list.get(index) else {
                        return Err(make_custom_error(format!(
                            "element {index} of {len} was missing while serializing a repeated field",
                        )));
                    };
                    state.serialize_element(&value)?;
                }
                state.end()
            }
            FieldRef::RepeatedMessage(list) => {
                if !list.is_present() {
                    return serializer.serialize_none();
                }

                let len = list.len();
                let mut state = serializer.serialize_seq(Some(len))?;
                for index in 0..len {
                    let Some(message) = list.get(index) else {
                        return Err(make_custom_error(format!(
                            "element {index} of {len} was missing while serializing a repeated field",
                        )));
                    };
                    state.serialize_element(&SerializeDriver::with_options(message, self.options))?;
                }
                state.end()
            }
            FieldRef::Map(map) => match map.as_serialize() {
                Some(value) => value.serialize(serializer),
                None => serializer.serialize_none(),
            },
        }
    }
}
