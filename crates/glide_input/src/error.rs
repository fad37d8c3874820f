//! Input error types.

use thiserror::Error;

/// Errors loading or replaying recorded input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid input recording: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Recording out of order: event {index} at {at_ms}ms follows {previous_ms}ms")]
    OutOfOrder {
        index: usize,
        at_ms: u64,
        previous_ms: u64,
    },
}
