use alloc::vec::Vec;

use crate::access::{Message, Scalar};
use crate::info::ScalarRef;

// -----------------------------------------------------------------------------
// RepeatedScalarField

/// A repeated scalar slot.
///
/// `Option<Vec<T>>` distinguishes a sequence that was never constructed (`None`)
/// from an empty one; a plain `Vec<T>` is always present.
pub trait RepeatedScalarField {
    /// Returns `false` if the sequence was never constructed.
    fn is_present(&self) -> bool;

    /// Returns the number of elements, `0` when absent.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Option<ScalarRef<'_>>;
}

impl<T: Scalar> RepeatedScalarField for Vec<T> {
    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<ScalarRef<'_>> {
        self.as_slice().get(index).map(Scalar::as_scalar_ref)
    }
}

impl<T: Scalar> RepeatedScalarField for Option<Vec<T>> {
    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().map_or(0, Vec::len)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<ScalarRef<'_>> {
        self.as_ref()?.as_slice().get(index).map(Scalar::as_scalar_ref)
    }
}

// -----------------------------------------------------------------------------
// RepeatedMessageField

/// A repeated message slot, see [`RepeatedScalarField`] for the presence rules.
pub trait RepeatedMessageField {
    /// Returns `false` if the sequence was never constructed.
    fn is_present(&self) -> bool;

    /// Returns the number of elements, `0` when absent.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Option<&dyn Message>;

    /// Returns the element at `index` mutably.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Message>;
}

impl<M: Message> RepeatedMessageField for Vec<M> {
    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Message> {
        self.as_slice().get(index).map(|m| m as &dyn Message)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Message> {
        self.as_mut_slice().get_mut(index).map(|m| m as &mut dyn Message)
    }
}

impl<M: Message> RepeatedMessageField for Option<Vec<M>> {
    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().map_or(0, Vec::len)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Message> {
        self.as_ref()?.as_slice().get(index).map(|m| m as &dyn Message)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Message> {
        self.as_mut()?.as_mut_slice().get_mut(index).map(|m| m as &mut dyn Message)
    }
}
