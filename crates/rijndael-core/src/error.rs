//! Error type for the length-checked entry points.

use thiserror::Error;

/// Errors produced when raw byte slices are turned into cipher inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A block or key slice did not have the required length.
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        /// What was being parsed.
        context: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Checks that `bytes` is exactly `expected` bytes long.
pub(crate) fn validate_length(context: &'static str, bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() != expected {
        log::debug!(
            "rejecting {context}: expected {expected} bytes, got {}",
            bytes.len()
        );
        return Err(Error::InvalidLength {
            context,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}
