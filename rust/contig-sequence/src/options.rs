//! Construction-time configuration of a [`Sequence`](crate::Sequence).

use serde::{Deserialize, Serialize};

/// Number of slots allocated by [`Sequence::new`](crate::Sequence::new).
pub const DEFAULT_CAPACITY: usize = 100;

/// Increment added to the capacity whenever an insertion overflows it.
pub const DEFAULT_GROWTH_STEP: usize = 100;

/// Initial capacity and growth step of a sequence.
///
/// Can be deserialized from a partial document; missing fields take their
/// default values:
///
/// ```
/// use contig_sequence::SequenceOptions;
///
/// let options: SequenceOptions = serde_json::from_str(r#"{ "growth_step": 8 }"#).unwrap();
/// assert_eq!(options.initial_capacity, 100);
/// assert_eq!(options.growth_step, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceOptions {
    /// Number of element slots allocated up front.
    pub initial_capacity: usize,
    /// Capacity increment applied on overflow. Zero is treated as one.
    pub growth_step: usize,
}

impl SequenceOptions {
    pub fn new() -> SequenceOptions {
        Default::default()
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_growth_step(mut self, growth_step: usize) -> Self {
        self.growth_step = growth_step;
        self
    }

    /// Returns a copy with the growth step coerced to at least one.
    pub fn normalized(self) -> Self {
        SequenceOptions {
            growth_step: self.growth_step.max(1),
            ..self
        }
    }
}

impl Default for SequenceOptions {
    fn default() -> Self {
        SequenceOptions {
            initial_capacity: DEFAULT_CAPACITY,
            growth_step: DEFAULT_GROWTH_STEP,
        }
    }
}
