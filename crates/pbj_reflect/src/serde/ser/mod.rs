// -----------------------------------------------------------------------------
// Modules

mod driver;
mod error_utils;
mod field_serializer;
mod message_serializer;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use driver::{SerializeDriver, SerializeOptions};
