use thiserror::Error;

/// Error returned when the secure random number source cannot supply the bytes of a UUID.
///
/// A failing entropy source is a host-level condition, so the operations of this crate never
/// retry and never substitute a weaker identifier. Whether to retry is up to the caller.
#[derive(Debug, Error)]
#[error("could not obtain random bytes: {0}")]
pub struct RandomSourceError(#[from] rand::Error);

impl RandomSourceError {
    /// Returns the OS error code reported by the random source, if any.
    pub fn raw_os_error(&self) -> Option<i32> {
        self.0.raw_os_error()
    }
}
