//! Error types for the response builder.

use thiserror::Error;

/// Errors produced while mutating an
/// [`AnnotatedResponse`](crate::AnnotatedResponse).
#[derive(Debug, Error)]
pub enum ResponseError {
    /// A result keyword exceeded the
    /// [`MAX_RESULT_LEN`](crate::MAX_RESULT_LEN) cap.
    #[error("the result length may not exceed 30 characters, got {len}")]
    ResultTooLong {
        /// Byte length of the rejected keyword.
        len: usize,
    },
}
