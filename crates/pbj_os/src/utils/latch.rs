use crate::sync::atomic::{AtomicU8, Ordering};

const UNSET: u8 = 0;
const LATCHED_FALSE: u8 = 1;
const LATCHED_TRUE: u8 = 2;

// -----------------------------------------------------------------------------
// BoolLatch

/// A boolean that can be written at most once.
///
/// The value and the "already set" marker live in the same [`AtomicU8`], so claiming
/// the latch and publishing the value is a single compare-and-set. A reader either
/// sees the latch unset (and reads `false`) or sees the fully settled value; there is
/// no intermediate state.
///
/// Under concurrent first writes exactly one caller wins, whichever reaches the
/// compare-and-set first. Every later [`set`](Self::set) is a no-op.
///
/// # Example
///
/// ```
/// # use pbj_os::utils::BoolLatch;
///
/// let latch = BoolLatch::new();
/// assert!(!latch.get());
///
/// assert!(latch.set(true));
/// assert!(!latch.set(false));
///
/// assert!(latch.get());
/// assert!(latch.is_set());
/// ```
#[repr(transparent)]
pub struct BoolLatch(AtomicU8);

impl BoolLatch {
    /// Create an unset latch, [`get`](Self::get) returns `false` until it is set.
    #[inline]
    pub const fn new() -> Self {
        Self(AtomicU8::new(UNSET))
    }

    /// Try to latch `value`.
    ///
    /// Returns `true` if this call set the latch, `false` if it was already set
    /// (in which case `value` is discarded).
    #[inline]
    pub fn set(&self, value: bool) -> bool {
        let state = if value { LATCHED_TRUE } else { LATCHED_FALSE };
        self.0
            .compare_exchange(UNSET, state, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Returns the latched value, or `false` if nothing has been latched yet.
    #[inline]
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Acquire) == LATCHED_TRUE
    }

    /// Returns `true` once any call to [`set`](Self::set) has succeeded.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire) != UNSET
    }
}

impl Default for BoolLatch {
    /// Call `new`, the latch starts unset.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for BoolLatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0.load(Ordering::Acquire) {
            UNSET => f.write_str("BoolLatch(<unset>)"),
            LATCHED_TRUE => f.write_str("BoolLatch(true)"),
            _ => f.write_str("BoolLatch(false)"),
        }
    }
}
