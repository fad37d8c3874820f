//! Folds raw input into carousel commands.

use crate::raw::{Modality, RawInput};
use glide_core::{Carousel, EffectSet, Surface};
use instant::Instant;
use serde::{Deserialize, Serialize};

/// What the engine should do in response to an input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    GestureStart(f64),
    GestureMove(f64),
    GestureEnd,
    Resize,
}

/// Gesture owner: the modality (and pointer id) that pressed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Owner {
    modality: Modality,
    pointer_id: Option<i32>,
}

/// Stateful input processor.
///
/// A gesture belongs to whichever modality started it. Browsers report a
/// single press through several event families (touch, then pointer, then
/// emulated mouse), so moves and ends from any other family are ignored
/// until the owner releases.
///
/// The one exception: a browser that starts panning fires `pointercancel`
/// while the touch stream for the same finger keeps going. If a touch is
/// down at that moment, the gesture passes to it instead of ending.
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    owner: Option<Owner>,
    touch_down: bool,
}

impl InputProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Modality currently driving a gesture.
    pub fn active_modality(&self) -> Option<Modality> {
        self.owner.map(|owner| owner.modality)
    }

    pub fn is_tracking(&self) -> bool {
        self.owner.is_some()
    }

    /// Forget any gesture in progress.
    pub fn reset(&mut self) {
        self.owner = None;
        self.touch_down = false;
    }

    /// Translate one raw input into a command.
    pub fn process(&mut self, input: &RawInput) -> Option<Command> {
        if let RawInput::Resized { .. } = input {
            return Some(Command::Resize);
        }
        let modality = input.modality()?;
        self.track_touch(input);

        if input.is_start() {
            if self.owner.is_some() {
                tracing::trace!(?modality, "start ignored: gesture already owned");
                return None;
            }
            let x = finite(input.client_x())?;
            self.owner = Some(Owner {
                modality,
                pointer_id: input.pointer_id(),
            });
            return Some(Command::GestureStart(x));
        }

        if !self.owns(input, modality) {
            return None;
        }

        if matches!(input, RawInput::PointerCancel { .. }) && self.touch_down {
            tracing::trace!("pointer cancelled, touch stream takes the gesture");
            self.owner = Some(Owner {
                modality: Modality::Touch,
                pointer_id: None,
            });
            return None;
        }

        if input.is_move() {
            return finite(input.client_x()).map(Command::GestureMove);
        }

        if input.is_end() {
            // An end with an empty touch list still releases the gesture.
            self.owner = None;
            return Some(Command::GestureEnd);
        }

        None
    }

    /// Process `input` and apply the resulting command to `carousel`.
    pub fn dispatch<S: Surface>(
        &mut self,
        input: &RawInput,
        carousel: &mut Carousel<S>,
        now: Instant,
    ) -> EffectSet {
        match self.process(input) {
            Some(command) => apply(command, carousel, now),
            None => EffectSet::NONE,
        }
    }

    fn track_touch(&mut self, input: &RawInput) {
        match input {
            RawInput::TouchStart { touches } if !touches.is_empty() => self.touch_down = true,
            RawInput::TouchEnd { .. } | RawInput::TouchCancel => self.touch_down = false,
            _ => {}
        }
    }

    fn owns(&self, input: &RawInput, modality: Modality) -> bool {
        match self.owner {
            Some(owner) if owner.modality == modality => match owner.pointer_id {
                Some(id) => input.pointer_id() == Some(id),
                None => true,
            },
            _ => false,
        }
    }
}

/// Run a single command against an engine.
pub fn apply<S: Surface>(command: Command, carousel: &mut Carousel<S>, now: Instant) -> EffectSet {
    match command {
        Command::GestureStart(x) => carousel.gesture_start(x),
        Command::GestureMove(x) => carousel.gesture_move(x),
        Command::GestureEnd => carousel.gesture_end(),
        Command::Resize => {
            carousel.on_resize(now);
            EffectSet::NONE
        }
    }
}

fn finite(x: Option<f64>) -> Option<f64> {
    x.filter(|x| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::TouchPoint;

    #[test]
    fn mouse_gesture() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.process(&RawInput::MouseDown { x: 500.0 }),
            Some(Command::GestureStart(500.0))
        );
        assert_eq!(processor.active_modality(), Some(Modality::Mouse));
        assert_eq!(
            processor.process(&RawInput::MouseMove { x: 420.0 }),
            Some(Command::GestureMove(420.0))
        );
        assert_eq!(
            processor.process(&RawInput::MouseUp { x: 420.0 }),
            Some(Command::GestureEnd)
        );
        assert!(!processor.is_tracking());
    }

    #[test]
    fn moves_without_start_are_dropped() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.process(&RawInput::MouseMove { x: 1.0 }), None);
        assert_eq!(processor.process(&RawInput::MouseUp { x: 1.0 }), None);
    }

    #[test]
    fn other_modalities_are_ignored_mid_gesture() {
        let mut processor = InputProcessor::new();
        processor.process(&RawInput::touch_start(300.0));

        assert_eq!(processor.process(&RawInput::PointerDown { id: 1, x: 300.0 }), None);
        assert_eq!(processor.process(&RawInput::MouseMove { x: 10.0 }), None);
        assert_eq!(processor.process(&RawInput::MouseUp { x: 10.0 }), None);
        assert!(processor.is_tracking());

        assert_eq!(
            processor.process(&RawInput::touch_move(250.0)),
            Some(Command::GestureMove(250.0))
        );
    }

    #[test]
    fn pointer_id_must_match() {
        let mut processor = InputProcessor::new();
        processor.process(&RawInput::PointerDown { id: 4, x: 100.0 });

        assert_eq!(processor.process(&RawInput::PointerMove { id: 5, x: 0.0 }), None);
        assert_eq!(processor.process(&RawInput::PointerUp { id: 5, x: 0.0 }), None);
        assert_eq!(
            processor.process(&RawInput::PointerUp { id: 4, x: 0.0 }),
            Some(Command::GestureEnd)
        );
    }

    #[test]
    fn touch_cancel_ends_gesture() {
        let mut processor = InputProcessor::new();
        processor.process(&RawInput::touch_start(10.0));
        assert_eq!(
            processor.process(&RawInput::TouchCancel),
            Some(Command::GestureEnd)
        );
        assert!(!processor.is_tracking());
    }

    #[test]
    fn pointer_cancel_releases_gesture() {
        let mut processor = InputProcessor::new();
        processor.process(&RawInput::PointerDown { id: 2, x: 100.0 });
        assert_eq!(
            processor.process(&RawInput::PointerCancel { id: 2 }),
            Some(Command::GestureEnd)
        );
        assert_eq!(
            processor.process(&RawInput::touch_start(100.0)),
            Some(Command::GestureStart(100.0))
        );
    }

    #[test]
    fn pointer_cancel_hands_gesture_to_live_touch() {
        let mut processor = InputProcessor::new();
        processor.process(&RawInput::PointerDown { id: 1, x: 500.0 });
        assert_eq!(processor.process(&RawInput::touch_start(500.0)), None);

        assert_eq!(processor.process(&RawInput::PointerCancel { id: 1 }), None);
        assert_eq!(processor.active_modality(), Some(Modality::Touch));
        assert_eq!(
            processor.process(&RawInput::touch_move(400.0)),
            Some(Command::GestureMove(400.0))
        );
        assert_eq!(
            processor.process(&RawInput::touch_end(400.0)),
            Some(Command::GestureEnd)
        );
        assert!(!processor.is_tracking());
    }

    #[test]
    fn pointer_cancel_after_touch_lifted_ends_gesture() {
        let mut processor = InputProcessor::new();
        processor.process(&RawInput::PointerDown { id: 1, x: 500.0 });
        processor.process(&RawInput::touch_start(500.0));
        processor.process(&RawInput::touch_end(500.0));

        assert_eq!(
            processor.process(&RawInput::PointerCancel { id: 1 }),
            Some(Command::GestureEnd)
        );
    }

    #[test]
    fn malformed_touch_lists() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.process(&RawInput::TouchStart { touches: vec![] }),
            None
        );
        assert!(!processor.is_tracking());

        processor.process(&RawInput::TouchStart {
            touches: vec![TouchPoint::new(0, 50.0)],
        });
        assert_eq!(processor.process(&RawInput::TouchMove { touches: vec![] }), None);
        assert_eq!(
            processor.process(&RawInput::TouchEnd { touches: vec![] }),
            Some(Command::GestureEnd)
        );
    }

    #[test]
    fn non_finite_start_is_rejected() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.process(&RawInput::MouseDown { x: f64::NAN }), None);
        assert!(!processor.is_tracking());
    }

    #[test]
    fn resize_passes_through() {
        let mut processor = InputProcessor::new();
        processor.process(&RawInput::MouseDown { x: 0.0 });
        assert_eq!(
            processor.process(&RawInput::Resized {
                width: 1024.0,
                height: 768.0
            }),
            Some(Command::Resize)
        );
        assert!(processor.is_tracking());
    }
}
