use thiserror::Error;

/// Recoverable errors.
///
/// Calling `front` or `pop_front` on an empty sequence is not an error but a
/// bug, and is caught by debug assertions instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    #[error("Sequence does not fit in a container of capacity {capacity}")]
    CapacityExceeded { capacity: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
