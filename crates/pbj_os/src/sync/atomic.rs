//! Provide atomic types
//!
//! If the target platform does not have byte-sized atomics,
//! this will switch to `portable_atomic`.
//!
//! See the [standard library] for further details.
//!
//! [standard library]: https://doc.rust-lang.org/core/sync/atomic

pub use atomic_8::AtomicU8;
pub use core::sync::atomic::{AtomicUsize, Ordering};

#[cfg(target_has_atomic = "8")]
use core::sync::atomic as atomic_8;

#[cfg(not(target_has_atomic = "8"))]
use portable_atomic as atomic_8;

#[cfg(not(target_has_atomic = "ptr"))]
compile_error!("Platforms without atomic pointers are currently not supported.");
