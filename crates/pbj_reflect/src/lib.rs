#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern crates

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod macros;

pub mod access;
pub mod defaults;
pub mod info;
pub mod serde;

#[cfg(test)]
pub(crate) mod fixtures;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports {
    pub use serde_core;
}

pub use access::{Message, ProtoEnum};
pub use defaults::fill_defaults;
pub use info::{Described, describe_type};
