//! Capacity growth policy.
//!
//! A [`DynamicArray`](crate::DynamicArray) never grows by doubling. When a
//! request exceeds the allocated capacity, the new capacity is the requested
//! size rounded up to the next multiple of the growth increment:
//!
//! ```text
//!   increment = 5
//!
//!   requested:  1  2  3  4  5  6  7  8  9 10 11
//!   capacity:   5  5  5  5  5 10 10 10 10 10 15
//! ```
//!
//! A request that is already a multiple of the increment is allocated exactly,
//! so `Add` on a full array of capacity 5 lands on capacity 10, not 15.

use std::num::NonZeroUsize;

/// The step used to round capacity up when an array has to reallocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    increment: NonZeroUsize,
}

impl GrowthPolicy {
    /// Builds a policy from a raw increment. Zero is treated as one.
    pub fn new(increment: usize) -> Self {
        Self {
            increment: NonZeroUsize::new(increment).unwrap_or(NonZeroUsize::MIN),
        }
    }

    pub fn increment(&self) -> usize {
        self.increment.get()
    }

    /// Capacity to allocate so that `required` slots fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carray::GrowthPolicy;
    ///
    /// let policy = GrowthPolicy::new(4);
    /// assert_eq!(policy.capacity_for(1), 4);
    /// assert_eq!(policy.capacity_for(8), 8);
    /// assert_eq!(policy.capacity_for(9), 12);
    /// ```
    pub fn capacity_for(&self, required: usize) -> usize {
        let step = self.increment.get();
        match required % step {
            0 => required,
            rem => required
                .checked_add(step - rem)
                .expect("Capacity overflow"),
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}
