//! Errors surfaced by trace production
//!
//! An unknown algorithm or an empty input is *not* an error: both yield an
//! empty trace. Everything here means no trace could be produced at all.

use crate::algorithms::Algorithm;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// Radix sort only handles non-negative values
    #[error("radix sort requires non-negative values, found {value} at index {index}")]
    NegativeRadixInput { index: usize, value: i64 },

    /// Input longer than the aggregator accepts
    #[error("input has {len} elements, limit is {limit}")]
    InputTooLarge { len: usize, limit: usize },

    /// Retained snapshots would exceed the memory budget
    #[error("trace memory limit exceeded: {used} + {requested} > {limit} bytes")]
    MemoryLimitExceeded {
        used: usize,
        requested: usize,
        limit: usize,
    },

    /// The algorithm panicked; no partial trace is returned
    #[error("{algorithm} sort failed: {message}")]
    Panicked {
        algorithm: Algorithm,
        message: String,
    },
}
