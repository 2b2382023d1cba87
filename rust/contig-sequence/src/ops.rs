use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Index, IndexMut};

use crate::Sequence;

/// Exchanges the contents of two sequences; see [`Sequence::swap`].
pub fn swap<T>(a: &mut Sequence<T>, b: &mut Sequence<T>) {
    a.swap(b);
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    /// Panics if `index >= len()`; use [`Sequence::at`] for a checked lookup.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

/// Structural equality: capacity and growth step are not compared.
impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Default + Clone> AddAssign<&Sequence<T>> for Sequence<T> {
    fn add_assign(&mut self, rhs: &Sequence<T>) {
        self.concat(rhs);
    }
}

impl<T: Default + Clone> Add<&Sequence<T>> for &Sequence<T> {
    type Output = Sequence<T>;

    fn add(self, rhs: &Sequence<T>) -> Sequence<T> {
        let mut result = self.clone();
        result.concat(rhs);
        result
    }
}

impl<T: Default + Clone> Add<&Sequence<T>> for Sequence<T> {
    type Output = Sequence<T>;

    fn add(mut self, rhs: &Sequence<T>) -> Sequence<T> {
        self.concat(rhs);
        self
    }
}
