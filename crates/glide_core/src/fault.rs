//! Fault types for carousel operations.
//!
//! Faults never reach the user. The silent engine operations absorb them
//! and leave state untouched; the `try_*` forms hand them to callers that
//! want to know why nothing moved.

use thiserror::Error;

/// A recoverable reason an operation did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// Requested panel index does not exist.
    #[error("Panel index {index} out of range (panel count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// The track has no panels.
    #[error("Empty carousel: no panels to navigate")]
    EmptyCarousel,

    /// Already on the last panel.
    #[error("No next panel after {0}")]
    NoNextPanel(usize),

    /// Already on the first panel.
    #[error("No previous panel before {0}")]
    NoPreviousPanel(usize),

    /// Move or end received without a prior start.
    #[error("Gesture not started")]
    GestureNotStarted,

    /// Engine used before `initialize()` or after `teardown()`.
    #[error("Carousel not initialized")]
    NotInitialized,
}

impl Fault {
    /// Boundary faults that a user can trigger by normal interaction.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Fault::NoNextPanel(_)
                | Fault::NoPreviousPanel(_)
                | Fault::GestureNotStarted
                | Fault::EmptyCarousel
        )
    }

    /// Faults that indicate the embedding code called the engine wrongly.
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            Fault::IndexOutOfRange { .. } | Fault::NotInitialized
        )
    }
}
