#![doc = include_str!("../README.md")]

// -----------------------------------------------------------------------------
// Modules

mod error;
mod mode;

// -----------------------------------------------------------------------------
// Exports

pub use error::EncodeError;
pub use mode::{configure, emit_empty_collections, is_configured};

use std::io;

use pbj_reflect::Message;
use pbj_reflect::serde::{SerializeDriver, SerializeOptions};

// -----------------------------------------------------------------------------
// Marshal

/// Encodes `message` with the standard omission rules.
///
/// The process-wide mode is not consulted.
///
/// # Errors
///
/// Returns [`EncodeError`] if the encoder rejects the message.
pub fn marshal(message: &dyn Message) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(&SerializeDriver::new(message))?)
}

/// Encodes `message`, writing empty repeated fields as `[]` if the process-wide
/// mode was switched on with [`configure`].
///
/// Absent repeated fields are always left out. With the mode off the output is
/// byte-for-byte that of [`marshal`].
///
/// # Errors
///
/// Returns [`EncodeError`] if the encoder rejects the message.
pub fn marshal_safe_collections(message: &dyn Message) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(&safe_driver(message))?)
}

/// Like [`marshal_safe_collections`], pretty-printed.
///
/// # Errors
///
/// Returns [`EncodeError`] if the encoder rejects the message.
pub fn marshal_safe_collections_pretty(message: &dyn Message) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec_pretty(&safe_driver(message))?)
}

/// Like [`marshal_safe_collections`], writing into `writer`.
///
/// # Errors
///
/// Returns [`EncodeError`] if the encoder rejects the message or `writer` fails.
pub fn marshal_safe_collections_to_writer<W: io::Write>(
    writer: W,
    message: &dyn Message,
) -> Result<(), EncodeError> {
    Ok(serde_json::to_writer(writer, &safe_driver(message))?)
}

#[inline]
fn safe_driver(message: &dyn Message) -> SerializeDriver<'_> {
    let options = SerializeOptions {
        emit_empty_collections: emit_empty_collections(),
    };
    SerializeDriver::with_options(message, options)
}
