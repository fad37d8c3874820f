//! Raw input events from any source.

use serde::{Deserialize, Serialize};

/// One entry of a touch event's changed-touch list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: i32,
    pub x: f64,
}

impl TouchPoint {
    pub fn new(id: i32, x: f64) -> Self {
        Self { id, x }
    }
}

/// Input device family a gesture came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Mouse,
    Pointer,
    Touch,
}

/// Raw input event from any source.
///
/// Platform events are converted to this type before processing. Only the
/// horizontal client coordinate matters to a carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawInput {
    // =========================================================================
    // MOUSE
    // =========================================================================
    MouseDown { x: f64 },
    MouseMove { x: f64 },
    MouseUp { x: f64 },

    // =========================================================================
    // POINTER
    // =========================================================================
    PointerDown { id: i32, x: f64 },
    PointerMove { id: i32, x: f64 },
    PointerUp { id: i32, x: f64 },
    /// The platform took the pointer away (panning, capture lost).
    PointerCancel { id: i32 },

    // =========================================================================
    // TOUCH
    // =========================================================================
    /// Finger(s) down. Carries the changed-touch list.
    TouchStart { touches: Vec<TouchPoint> },
    TouchMove { touches: Vec<TouchPoint> },
    TouchEnd { touches: Vec<TouchPoint> },
    /// The platform took the touch away (scroll, alert, ...).
    TouchCancel,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    /// Viewport resized.
    Resized { width: f64, height: f64 },
}

impl RawInput {
    /// Single-finger touch start.
    pub fn touch_start(x: f64) -> Self {
        RawInput::TouchStart {
            touches: vec![TouchPoint::new(0, x)],
        }
    }

    /// Single-finger touch move.
    pub fn touch_move(x: f64) -> Self {
        RawInput::TouchMove {
            touches: vec![TouchPoint::new(0, x)],
        }
    }

    /// Single-finger touch end.
    pub fn touch_end(x: f64) -> Self {
        RawInput::TouchEnd {
            touches: vec![TouchPoint::new(0, x)],
        }
    }

    /// Device family, or `None` for non-pointing input.
    pub fn modality(&self) -> Option<Modality> {
        match self {
            RawInput::MouseDown { .. } | RawInput::MouseMove { .. } | RawInput::MouseUp { .. } => {
                Some(Modality::Mouse)
            }
            RawInput::PointerDown { .. }
            | RawInput::PointerMove { .. }
            | RawInput::PointerUp { .. }
            | RawInput::PointerCancel { .. } => Some(Modality::Pointer),
            RawInput::TouchStart { .. }
            | RawInput::TouchMove { .. }
            | RawInput::TouchEnd { .. }
            | RawInput::TouchCancel => Some(Modality::Touch),
            RawInput::Resized { .. } => None,
        }
    }

    /// Horizontal coordinate this event reports.
    ///
    /// Touch events use the first changed touch; an empty list yields
    /// `None`.
    pub fn client_x(&self) -> Option<f64> {
        match self {
            RawInput::MouseDown { x }
            | RawInput::MouseMove { x }
            | RawInput::MouseUp { x }
            | RawInput::PointerDown { x, .. }
            | RawInput::PointerMove { x, .. }
            | RawInput::PointerUp { x, .. } => Some(*x),
            RawInput::TouchStart { touches }
            | RawInput::TouchMove { touches }
            | RawInput::TouchEnd { touches } => touches.first().map(|touch| touch.x),
            RawInput::PointerCancel { .. } | RawInput::TouchCancel | RawInput::Resized { .. } => {
                None
            }
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(
            self,
            RawInput::MouseDown { .. } | RawInput::PointerDown { .. } | RawInput::TouchStart { .. }
        )
    }

    pub fn is_move(&self) -> bool {
        matches!(
            self,
            RawInput::MouseMove { .. } | RawInput::PointerMove { .. } | RawInput::TouchMove { .. }
        )
    }

    pub fn is_end(&self) -> bool {
        matches!(
            self,
            RawInput::MouseUp { .. }
                | RawInput::PointerUp { .. }
                | RawInput::PointerCancel { .. }
                | RawInput::TouchEnd { .. }
                | RawInput::TouchCancel
        )
    }

    /// Pointer id for pointer events.
    pub fn pointer_id(&self) -> Option<i32> {
        match self {
            RawInput::PointerDown { id, .. }
            | RawInput::PointerMove { id, .. }
            | RawInput::PointerUp { id, .. }
            | RawInput::PointerCancel { id } => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_touch_wins() {
        let input = RawInput::TouchMove {
            touches: vec![TouchPoint::new(3, 40.0), TouchPoint::new(4, 900.0)],
        };
        assert_eq!(input.client_x(), Some(40.0));
    }

    #[test]
    fn empty_touch_list_has_no_coordinate() {
        let input = RawInput::TouchStart { touches: vec![] };
        assert_eq!(input.client_x(), None);
        assert_eq!(input.modality(), Some(Modality::Touch));
    }

    #[test]
    fn classification() {
        assert!(RawInput::MouseDown { x: 1.0 }.is_start());
        assert!(RawInput::touch_move(1.0).is_move());
        assert!(RawInput::TouchCancel.is_end());
        assert_eq!(RawInput::PointerUp { id: 7, x: 0.0 }.pointer_id(), Some(7));
        assert_eq!(
            RawInput::Resized {
                width: 800.0,
                height: 600.0
            }
            .modality(),
            None
        );
    }
}
