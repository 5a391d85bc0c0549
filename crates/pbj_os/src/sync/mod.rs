//! Useful synchronization primitives.
//!
//! The standard library's primitives are re-exported as-is so that the rest of
//! the workspace has a single import path for them.
//!
//! ## atomic
//!
//! We detect whether byte-sized atomic operations are available on the target platform.
//! If supported, we use `core::sync::atomic`; otherwise, we fall back to `portable_atomic`.
//!
//! See the [standard library] for further details.
//!
//! [standard library]: https://doc.rust-lang.org/std/sync/index.html

// -----------------------------------------------------------------------------
// Modules

pub mod atomic;

// -----------------------------------------------------------------------------
// Exports

pub use std::sync::OnceLock;
