use thiserror::Error;

/// Returned by the `try_*` mutating functions when content did not fit.
///
/// The destination is still in a valid, terminated state: everything that
/// fit was written, the rest was dropped. The error only reports that the
/// drop happened.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("capacity {capacity} exceeded: {dropped} byte(s) dropped")]
pub struct CapacityError {
    /// Capacity of the destination, terminator slot included.
    pub capacity: usize,
    /// Number of bytes that did not fit.
    pub dropped: usize,
}
