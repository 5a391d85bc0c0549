use pbj_os::utils::BoolLatch;

static EMIT_EMPTY_COLLECTIONS: BoolLatch = BoolLatch::new();

/// Sets the process-wide marshal mode, once.
///
/// The first call latches `emit_empty_collections`; every later call is ignored,
/// whatever its argument. Under concurrent first calls exactly one of them wins.
///
/// With the mode on, [`marshal_safe_collections`](crate::marshal_safe_collections)
/// writes present-but-empty repeated fields as `[]`.
///
/// # Examples
///
/// ```
/// pbj_json::configure(true);
/// pbj_json::configure(false); // ignored
///
/// assert!(pbj_json::emit_empty_collections());
/// assert!(pbj_json::is_configured());
/// ```
pub fn configure(emit_empty_collections: bool) {
    if !EMIT_EMPTY_COLLECTIONS.set(emit_empty_collections) {
        log::debug!(
            "marshal mode is already configured (emit_empty_collections = {}), ignoring {}",
            EMIT_EMPTY_COLLECTIONS.get(),
            emit_empty_collections,
        );
    }
}

/// Returns the latched marshal mode, `false` until [`configure`] is called.
#[inline]
pub fn emit_empty_collections() -> bool {
    EMIT_EMPTY_COLLECTIONS.get()
}

/// Returns `true` once [`configure`] has been called.
#[inline]
pub fn is_configured() -> bool {
    EMIT_EMPTY_COLLECTIONS.is_set()
}
