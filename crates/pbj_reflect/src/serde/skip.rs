use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use std::collections::HashMap;

/// A collection that can report whether it is empty.
///
/// Implemented for `Vec`, `BTreeMap` and `HashMap`, the collection types
/// generated message fields use. See [`is_unset_or_empty`].
pub trait Collection {
    /// Returns `true` if the collection holds no element.
    fn is_empty_collection(&self) -> bool;
}

impl<T> Collection for Vec<T> {
    #[inline]
    fn is_empty_collection(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    #[inline]
    fn is_empty_collection(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    #[inline]
    fn is_empty_collection(&self) -> bool {
        self.is_empty()
    }
}

/// Returns `true` if the collection is absent or holds no element.
///
/// Meant for `#[serde(skip_serializing_if = "...")]` on the collection fields of
/// serde-derived message types, matching what [`SerializeDriver`](super::SerializeDriver)
/// does under the standard rules.
///
/// # Examples
///
/// ```
/// use pbj_reflect::serde::is_unset_or_empty;
///
/// assert!(is_unset_or_empty::<Vec<i64>>(&None));
/// assert!(is_unset_or_empty(&Some(Vec::<i64>::new())));
/// assert!(!is_unset_or_empty(&Some(vec![1_i64])));
/// ```
#[inline]
pub fn is_unset_or_empty<C: Collection>(value: &Option<C>) -> bool {
    value.as_ref().is_none_or(Collection::is_empty_collection)
}
