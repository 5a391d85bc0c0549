use alloc::collections::BTreeMap;
use std::collections::HashMap;

use serde_core::Serialize;

/// A map slot.
///
/// Maps carry no defaults and are not affected by the empty-collection rule;
/// their contents are serialized by their own `serde` implementation.
pub trait MapField {
    /// Returns `false` if the map was never constructed.
    fn is_present(&self) -> bool;

    /// Returns the number of entries, `0` when absent.
    fn len(&self) -> usize;

    /// Returns the map as a type-erased `Serialize`, `None` when absent.
    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize>;
}

macro_rules! impl_map_field {
    ($map:ident, $($bound:tt)*) => {
        impl<K: Serialize $($bound)*, V: Serialize> MapField for $map<K, V> {
            #[inline]
            fn is_present(&self) -> bool {
                true
            }

            #[inline]
            fn len(&self) -> usize {
                $map::len(self)
            }

            #[inline]
            fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
                Some(self as &dyn erased_serde::Serialize)
            }
        }

        impl<K: Serialize $($bound)*, V: Serialize> MapField for Option<$map<K, V>> {
            #[inline]
            fn is_present(&self) -> bool {
                self.is_some()
            }

            #[inline]
            fn len(&self) -> usize {
                self.as_ref().map_or(0, $map::len)
            }

            #[inline]
            fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
                self.as_ref().map(|map| map as &dyn erased_serde::Serialize)
            }
        }
    };
}

impl_map_field!(BTreeMap, + Ord);
impl_map_field!(HashMap, + Eq + core::hash::Hash);
