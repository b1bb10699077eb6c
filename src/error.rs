use std::fmt;

/// Errors returned by index-based [`DynamicArray`](crate::DynamicArray) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// `index` was outside the valid range for an array holding `size` elements.
    OutOfRange { index: usize, size: usize },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::OutOfRange { index, size } => {
                write!(f, "Index out of range: index {} with size {}", index, size)
            }
        }
    }
}

impl std::error::Error for ArrayError {}

pub type Result<T> = std::result::Result<T, ArrayError>;
