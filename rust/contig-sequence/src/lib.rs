//! A contiguous, index-addressable sequence container with explicit capacity control.
//!
//! [`Sequence<T>`] keeps its logical length (`len`) separate from the number of
//! allocated slots (`capacity`). When an insertion needs more room, the capacity grows
//! by a fixed, configurable increment (the growth step) rather than by a factor, so
//! the resulting capacity is always predictable:
//!
//! ```
//! use contig_sequence::Sequence;
//!
//! let mut seq = Sequence::<i32>::with_capacity(2);
//! seq.push_back(1).push_back(2).push_back(3);
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.capacity(), 102);
//! ```
//!
//! Indexed operations come in two flavours: `seq[i]` panics outside `[0, len)`, while
//! [`Sequence::at`], [`Sequence::insert_at`], [`Sequence::change_at`] and
//! [`Sequence::remove_at`] report an out-of-range [`contig_common::Error`] and leave the
//! sequence unchanged.

pub mod options;
mod ops;
mod search;
pub mod sequence;
pub mod text;

#[cfg(test)]
mod tests;

pub use ops::swap;
pub use options::SequenceOptions;
pub use sequence::Sequence;
pub use text::ReadOutcome;
