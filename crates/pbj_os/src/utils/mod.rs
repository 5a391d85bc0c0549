//! Small lock-free helpers.

// -----------------------------------------------------------------------------
// Modules

mod latch;

// -----------------------------------------------------------------------------
// Exports

pub use latch::BoolLatch;
