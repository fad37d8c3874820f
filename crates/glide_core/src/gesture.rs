//! Drag gesture tracking.
//!
//! A gesture is one start → move* → end cycle. The tracker converts pointer
//! x positions into a live track offset and, on end, reports the signed
//! amplified movement for the commit policy to judge.
//!
//! ```text
//!        start(x)            end()
//! Idle ───────────► Dragging ──────► Idle
//!                    │    ▲
//!                    └────┘ move(x)
//! ```
//!
//! Moves and ends received while idle are ignored.

use crate::AMPLIFICATION;
use serde::{Deserialize, Serialize};

/// Where the tracker is in a gesture cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
}

/// Drag-local state. Exists only between start and end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureState {
    /// Pointer x at gesture start.
    pub origin_x: f64,
    /// Resting offset the drag started from.
    pub committed_offset: f64,
    /// Offset currently applied to the track.
    pub live_offset: f64,
    /// Signed amplified pointer travel (positive = dragged leftwards).
    /// This is the tracked pointer offset: `live_offset` is always
    /// `committed_offset - movement`.
    #[doc(alias = "tracked_pointer_offset")]
    pub movement: f64,
}

/// Result of a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEnd {
    pub movement: f64,
    pub live_offset: f64,
}

/// Idle → Dragging → Idle state machine.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    amplification: f64,
    committed_offset: f64,
    drag: Option<GestureState>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(AMPLIFICATION)
    }
}

impl GestureTracker {
    pub fn new(amplification: f64) -> Self {
        Self {
            amplification,
            committed_offset: 0.0,
            drag: None,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        if self.drag.is_some() {
            GesturePhase::Dragging
        } else {
            GesturePhase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Drag-local state, if a gesture is active.
    pub fn state(&self) -> Option<&GestureState> {
        self.drag.as_ref()
    }

    /// Resting offset of the track between gestures.
    pub fn committed_offset(&self) -> f64 {
        self.committed_offset
    }

    /// Record a new resting offset (after a committed navigation).
    pub fn set_committed_offset(&mut self, offset: f64) {
        self.committed_offset = offset;
    }

    /// Begin a drag at `origin_x`. Returns false if a drag is already active.
    pub fn start(&mut self, origin_x: f64) -> bool {
        if self.drag.is_some() || !origin_x.is_finite() {
            return false;
        }
        self.drag = Some(GestureState {
            origin_x,
            committed_offset: self.committed_offset,
            live_offset: self.committed_offset,
            movement: 0.0,
        });
        tracing::trace!(origin_x, "gesture start");
        true
    }

    /// Track the pointer at `current_x`. Returns the new live offset, or
    /// `None` when idle.
    pub fn move_to(&mut self, current_x: f64) -> Option<f64> {
        if !current_x.is_finite() {
            return None;
        }
        let amplification = self.amplification;
        let drag = self.drag.as_mut()?;
        drag.movement = (drag.origin_x - current_x) * amplification;
        drag.live_offset = drag.committed_offset - drag.movement;
        tracing::trace!(movement = drag.movement, offset = drag.live_offset, "gesture move");
        Some(drag.live_offset)
    }

    /// Finish the drag. The live offset becomes the committed offset and the
    /// drag-local state is cleared. Returns `None` when idle.
    pub fn end(&mut self) -> Option<GestureEnd> {
        let drag = self.drag.take()?;
        self.committed_offset = drag.live_offset;
        tracing::trace!(movement = drag.movement, "gesture end");
        Some(GestureEnd {
            movement: drag.movement,
            live_offset: drag.live_offset,
        })
    }
}
