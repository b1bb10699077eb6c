//! # carray - a growable array with an explicit growth increment
//!
//! [`DynamicArray`] keeps its elements in one contiguous, exclusively owned
//! buffer and separates the logical size from the allocated capacity:
//!
//! ```text
//!   size = 4, capacity = 8, grow increment = 4
//!
//!   ┌────┬────┬────┬────┬────┬────┬────┬────┐
//!   │ e0 │ e1 │ e2 │ e3 │    │    │    │    │
//!   └────┴────┴────┴────┴────┴────┴────┴────┘
//!   └──────── live ─────┘└────── slack ─────┘
//! ```
//!
//! When a request does not fit, the capacity is rounded up to the next
//! multiple of the growth increment (see [`GrowthPolicy`]). Index-based
//! operations return [`ArrayError::OutOfRange`] instead of touching storage.

mod array;
mod error;
mod growth;
mod slots;

pub use array::DynamicArray;
pub use error::{ArrayError, Result};
pub use growth::GrowthPolicy;
