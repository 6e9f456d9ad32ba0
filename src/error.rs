use thiserror::Error;

/// Error types for `GrowVec` storage operations.
///
/// Only resource exhaustion is reported through this enum; positional
/// misuse (out-of-bounds indices, invalid ranges) panics instead.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// Requested capacity exceeds the maximum allocation size
    #[error("capacity overflow: cannot allocate {requested} slots")]
    CapacityOverflow {
        /// Number of slots that was requested
        requested: usize,
    },
    /// The allocator failed to provide the requested block
    #[error("allocation failed: {bytes} bytes requested")]
    AllocationFailed {
        /// Size of the block that could not be allocated
        bytes: usize,
    },
}
