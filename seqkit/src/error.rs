use thiserror::Error;

/// Precondition failures reported by sequence operations.
///
/// Lazy views never fail on construction; a failure surfaces from the
/// operation that traverses them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument was outside the range an operation accepts.
    ///
    /// Raised for a zero partition size, and by `get_only_element` when a
    /// sequence does not hold exactly one element.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The sequence had no element to return.
    #[error("no such element")]
    NoSuchElement,
    /// An index past the end of the sequence.
    #[error("index {index} out of range for sequence of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
