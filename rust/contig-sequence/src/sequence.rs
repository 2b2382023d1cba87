//! The [`Sequence<T>`] container: storage, capacity management, element access and
//! positional mutation.

use std::fmt;

use contig_common::{
    Result,
    result::{verify_index, verify_position},
    verify_arg,
};

use crate::options::{DEFAULT_GROWTH_STEP, SequenceOptions};

/// An owning, contiguous buffer of elements with independent length and capacity.
///
/// The backing store always holds exactly `capacity` slots. Slots in `[0, len)` are
/// the logical elements; the remaining slots hold `T::default()`, so removing an
/// element drops it right away instead of keeping it alive in spare capacity.
///
/// When a single-element insertion finds the sequence full, the capacity grows to
/// exactly `capacity + growth_step`. A bulk append of `k` elements that does not fit
/// grows it to exactly `len + k + growth_step`. Capacity never shrinks unless
/// [`resize`](Sequence::resize) or [`shrink_to_fit`](Sequence::shrink_to_fit) is
/// called.
///
/// # Examples
///
/// ```
/// use contig_sequence::Sequence;
///
/// let mut seq = Sequence::from_slice(&[3, 2, 8, 1], 5).unwrap();
/// seq.insert_at(1, 7).unwrap().remove_all(&8);
/// assert_eq!(seq.as_slice(), &[3, 7, 2, 1]);
/// assert_eq!(seq.find(&2), 2);
/// assert_eq!(seq.find(&42), seq.len());
/// ```
pub struct Sequence<T> {
    /// Backing store, `elements.len()` is the capacity.
    elements: Box<[T]>,
    /// Number of logically present elements.
    len: usize,
    /// Capacity increment applied on overflow, at least one.
    growth_step: usize,
}

impl<T> Sequence<T> {
    /// Returns the number of elements in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated element slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next single-element insertion has to grow the store.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the increment added to the capacity when an insertion overflows it.
    #[inline]
    pub fn capacity_growth_step(&self) -> usize {
        self.growth_step
    }

    /// Sets the increment used by automatic growth. A step of zero is stored as one.
    pub fn set_capacity_growth_step(&mut self, growth_step: usize) {
        self.growth_step = growth_step.max(1);
    }

    /// Returns the options that would construct an empty sequence with the same
    /// capacity and growth step.
    pub fn options(&self) -> SequenceOptions {
        SequenceOptions {
            initial_capacity: self.capacity(),
            growth_step: self.growth_step,
        }
    }

    /// Returns the logical elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements[..self.len]
    }

    /// Returns the logical elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements[..self.len]
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Fails with an out-of-range error unless `index < len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index("at", index, self.len)?;
        Ok(&self.elements[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Fails with an out-of-range error unless `index < len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index("at", index, self.len)?;
        Ok(&mut self.elements[index])
    }

    /// Returns a reference to the first element; fails if the sequence is empty.
    pub fn front(&self) -> Result<&T> {
        verify_index("front", 0, self.len)?;
        Ok(&self.elements[0])
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        verify_index("front", 0, self.len)?;
        Ok(&mut self.elements[0])
    }

    /// Returns a reference to the last element; fails if the sequence is empty.
    pub fn back(&self) -> Result<&T> {
        verify_index("back", 0, self.len)?;
        Ok(&self.elements[self.len - 1])
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        verify_index("back", 0, self.len)?;
        Ok(&mut self.elements[self.len - 1])
    }

    /// Exchanges the contents, capacity and growth step of two sequences without
    /// copying any element.
    pub fn swap(&mut self, other: &mut Sequence<T>) {
        std::mem::swap(self, other);
    }

    /// Moves the contents out of this sequence.
    ///
    /// The returned sequence owns the original store. `self` is left empty, with zero
    /// capacity (no allocation) and a growth step of one.
    pub fn take(&mut self) -> Sequence<T> {
        std::mem::replace(self, Sequence::moved_from())
    }

    fn moved_from() -> Sequence<T> {
        Sequence {
            elements: Box::default(),
            len: 0,
            growth_step: 1,
        }
    }
}

impl<T: Default> Sequence<T> {
    /// Creates an empty sequence with the default capacity and growth step
    /// (both 100).
    pub fn new() -> Sequence<T> {
        Self::with_options(&SequenceOptions::default())
    }

    /// Creates an empty sequence with `capacity` slots and the default growth step.
    pub fn with_capacity(capacity: usize) -> Sequence<T> {
        Self::with_capacity_and_growth_step(capacity, DEFAULT_GROWTH_STEP)
    }

    /// Creates an empty sequence with `capacity` slots and the given growth step.
    /// A growth step of zero is stored as one.
    pub fn with_capacity_and_growth_step(capacity: usize, growth_step: usize) -> Sequence<T> {
        Sequence {
            elements: default_slots(capacity),
            len: 0,
            growth_step: growth_step.max(1),
        }
    }

    pub fn with_options(options: &SequenceOptions) -> Sequence<T> {
        Self::with_capacity_and_growth_step(options.initial_capacity, options.growth_step)
    }

    /// Grows the store to exactly `capacity` slots if it is currently smaller.
    /// Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.reallocate(capacity);
        }
    }

    /// Reallocates the store to exactly `capacity` slots, truncating the sequence if
    /// it holds more than `capacity` elements. No-op if the capacity is unchanged.
    pub fn resize(&mut self, capacity: usize) {
        self.reallocate(capacity);
    }

    /// Reallocates the store to exactly `len()` slots.
    pub fn shrink_to_fit(&mut self) {
        self.reallocate(self.len);
    }

    /// Appends `value`, growing the store by the growth step if it is full.
    pub fn push_back(&mut self, value: T) -> &mut Self {
        if self.is_full() {
            self.grow_by_step();
        }
        self.elements[self.len] = value;
        self.len += 1;
        self
    }

    /// Inserts `value` before the first element.
    pub fn push_front(&mut self, value: T) -> &mut Self {
        self.insert_unchecked(0, value);
        self
    }

    /// Removes the last element. Does nothing if the sequence is empty.
    pub fn pop_back(&mut self) -> &mut Self {
        if self.len > 0 {
            self.len -= 1;
            self.elements[self.len] = T::default();
        }
        self
    }

    /// Removes the first element.
    ///
    /// Unlike [`pop_back`](Self::pop_back), this is an indexed removal at position 0
    /// and fails with an out-of-range error on an empty sequence.
    pub fn pop_front(&mut self) -> Result<&mut Self> {
        verify_index("pop_front", 0, self.len)?;
        self.remove_unchecked(0);
        Ok(self)
    }

    /// Inserts `value` at `index`, shifting the elements at and after it one slot to
    /// the right.
    ///
    /// `index` may equal `len()`, which appends. Larger indices fail with an
    /// out-of-range error before the store is touched.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<&mut Self> {
        verify_position("insert_at", index, self.len)?;
        self.insert_unchecked(index, value);
        Ok(self)
    }

    /// Replaces the element at `index`; fails unless `index < len()`.
    pub fn change_at(&mut self, index: usize, value: T) -> Result<&mut Self> {
        verify_index("change_at", index, self.len)?;
        self.elements[index] = value;
        Ok(self)
    }

    /// Removes the element at `index`, shifting the trailing elements one slot to the
    /// left. Fails unless `index < len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<&mut Self> {
        verify_index("remove_at", index, self.len)?;
        self.remove_unchecked(index);
        Ok(self)
    }

    /// Removes all elements. The capacity is retained.
    pub fn clear(&mut self) {
        self.elements[..self.len].fill_with(T::default);
        self.len = 0;
    }

    fn insert_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);
        if self.is_full() {
            self.grow_by_step();
        }
        self.elements[self.len] = value;
        self.elements[index..=self.len].rotate_right(1);
        self.len += 1;
    }

    fn remove_unchecked(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.elements[index..self.len].rotate_left(1);
        self.len -= 1;
        self.elements[self.len] = T::default();
    }

    fn grow_by_step(&mut self) {
        self.reallocate(self.capacity().saturating_add(self.growth_step));
    }

    /// Moves the first `min(len, capacity)` elements into a fresh store of exactly
    /// `capacity` slots.
    fn reallocate(&mut self, capacity: usize) {
        if capacity == self.capacity() {
            return;
        }
        log::trace!(
            "reallocating sequence store: capacity {} -> {capacity}, len {}",
            self.capacity(),
            self.len
        );
        let len = self.len.min(capacity);
        let mut slots = Vec::with_capacity(capacity);
        slots.extend(std::mem::take(&mut self.elements).into_vec().into_iter().take(len));
        slots.resize_with(capacity, T::default);
        self.elements = slots.into_boxed_slice();
        self.len = len;
    }
}

impl<T: Default + Clone> Sequence<T> {
    /// Creates a sequence with `capacity` slots holding a copy of `elements`.
    ///
    /// Fails with an invalid-argument error if `elements` does not fit into
    /// `capacity`; the source is never silently truncated.
    pub fn from_slice(elements: &[T], capacity: usize) -> Result<Sequence<T>> {
        Self::from_slice_with_options(
            elements,
            &SequenceOptions::default().with_initial_capacity(capacity),
        )
    }

    pub fn from_slice_with_options(
        elements: &[T],
        options: &SequenceOptions,
    ) -> Result<Sequence<T>> {
        verify_arg!(elements, elements.len() <= options.initial_capacity);
        let mut seq = Self::with_options(options);
        seq.elements[..elements.len()].clone_from_slice(elements);
        seq.len = elements.len();
        Ok(seq)
    }

    /// Appends a copy of every element of `values`.
    ///
    /// Grows the store at most once: if the values do not fit, the new capacity is
    /// `len() + values.len() + growth_step`.
    pub fn extend_from_slice(&mut self, values: &[T]) -> &mut Self {
        let len = self.len + values.len();
        if len > self.capacity() {
            self.reallocate(len.saturating_add(self.growth_step));
        }
        self.elements[self.len..len].clone_from_slice(values);
        self.len = len;
        self
    }

    /// Appends a copy of every element of `other`.
    pub fn concat(&mut self, other: &Sequence<T>) -> &mut Self {
        self.extend_from_slice(other.as_slice())
    }
}

impl<T: Default + PartialEq> Sequence<T> {
    /// Removes every element equal to `value`, preserving the order of the rest.
    pub fn remove_all(&mut self, value: &T) -> &mut Self {
        let mut kept = 0;
        for i in 0..self.len {
            if self.elements[i] != *value {
                self.elements.swap(kept, i);
                kept += 1;
            }
        }
        self.elements[kept..self.len].fill_with(T::default);
        self.len = kept;
        self
    }
}

impl<T: Clone + PartialEq> Sequence<T> {
    /// Replaces every element equal to `from` with a copy of `to`.
    pub fn change_all(&mut self, from: &T, to: T) -> &mut Self {
        for slot in self.as_mut_slice() {
            if *slot == *from {
                *slot = to.clone();
            }
        }
        self
    }
}

impl<T: Default> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::new()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    /// Deep copy into a freshly allocated store of the same capacity.
    fn clone(&self) -> Self {
        Sequence {
            elements: self.elements.clone(),
            len: self.len,
            growth_step: self.growth_step,
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    /// Takes over the vector's elements; the capacity equals their count.
    fn from(elements: Vec<T>) -> Self {
        let len = elements.len();
        Sequence {
            elements: elements.into_boxed_slice(),
            len,
            growth_step: DEFAULT_GROWTH_STEP,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("capacity", &self.capacity())
            .field("growth_step", &self.growth_step)
            .field("elements", &self.as_slice())
            .finish()
    }
}

fn default_slots<T: Default>(capacity: usize) -> Box<[T]> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, T::default);
    slots.into_boxed_slice()
}
