//! Linear search over the logical elements.
//!
//! Positional lookups return `len()` when nothing matches, so the result can be fed
//! straight back into [`Sequence::insert_at`] or compared against `len()`.

use crate::Sequence;

impl<T: PartialEq> Sequence<T> {
    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    /// Returns the number of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.as_slice().iter().filter(|e| *e == value).count()
    }

    /// Alias for [`find_first`](Self::find_first).
    #[inline]
    pub fn find(&self, value: &T) -> usize {
        self.find_first(value)
    }

    /// Returns the index of the first element equal to `value`, or `len()` if there
    /// is none.
    pub fn find_first(&self, value: &T) -> usize {
        self.as_slice()
            .iter()
            .position(|e| e == value)
            .unwrap_or(self.len())
    }

    /// Returns the index of the last element equal to `value`, or `len()` if there
    /// is none.
    pub fn find_last(&self, value: &T) -> usize {
        self.as_slice()
            .iter()
            .rposition(|e| e == value)
            .unwrap_or(self.len())
    }
}
