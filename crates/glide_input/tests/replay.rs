//! Replays recorded input sequences against an in-memory carousel.

use glide_core::{Carousel, CarouselConfig, EffectSet, PanelGeometry, Surface};
use glide_input::{InputProcessor, RawInput, Recording, TouchPoint};
use instant::Instant;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[derive(Debug, Default)]
struct Strip {
    width: f64,
    count: usize,
    offset: f64,
    offsets: Vec<f64>,
    transition: bool,
}

impl Strip {
    fn new(count: usize, width: f64) -> Self {
        Self {
            width,
            count,
            ..Default::default()
        }
    }
}

impl Surface for Strip {
    type Panel = usize;

    fn wrapper_width(&self) -> f64 {
        self.width
    }

    fn panels(&self) -> Vec<usize> {
        (0..self.count).collect()
    }

    fn panel_geometry(&self, panel: &usize) -> PanelGeometry {
        PanelGeometry::new(self.width, *panel as f64 * self.width)
    }

    fn set_track_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.offsets.push(offset);
    }

    fn set_transition(&mut self, enabled: bool) {
        self.transition = enabled;
    }

    fn set_panel_active(&mut self, _panel: &usize, _active: bool) {}
}

fn carousel(count: usize) -> Carousel<Strip> {
    let mut carousel = Carousel::new(Strip::new(count, 300.0), CarouselConfig::default());
    carousel.initialize();
    carousel
}

const SWIPE_LEFT_BY_TOUCH: &str = r#"{
  "events": [
    { "at_ms": 0,  "input": { "TouchStart": { "touches": [ { "id": 0, "x": 500.0 } ] } } },
    { "at_ms": 0,  "input": { "PointerDown": { "id": 1, "x": 500.0 } } },
    { "at_ms": 16, "input": { "TouchMove": { "touches": [ { "id": 0, "x": 460.0 } ] } } },
    { "at_ms": 32, "input": { "TouchMove": { "touches": [ { "id": 0, "x": 400.0 } ] } } },
    { "at_ms": 40, "input": { "PointerUp": { "id": 1, "x": 400.0 } } },
    { "at_ms": 48, "input": { "TouchEnd": { "touches": [ { "id": 0, "x": 400.0 } ] } } }
  ]
}"#;

#[test]
fn recorded_touch_swipe_advances() {
    let recording = Recording::from_json(SWIPE_LEFT_BY_TOUCH).unwrap();
    let mut processor = InputProcessor::new();
    let mut carousel = carousel(3);

    let effects = recording.replay(&mut processor, &mut carousel, Instant::now());

    assert!(effects.navigated());
    assert_eq!(carousel.index().active, 1);
    // Initial snap, two live moves, then the committed snap.
    assert_eq!(carousel.surface().offsets, vec![0.0, -64.0, -160.0, -300.0]);
    assert!(carousel.surface().transition);
    assert!(!processor.is_tracking());
}

/// Browser order for a finger swipe: the pointer stream is cancelled once
/// panning starts and the touch stream carries the rest of the gesture.
const SWIPE_WITH_POINTER_CANCEL: &str = r#"{
  "events": [
    { "at_ms": 0,  "input": { "PointerDown": { "id": 1, "x": 500.0 } } },
    { "at_ms": 0,  "input": { "TouchStart": { "touches": [ { "id": 0, "x": 500.0 } ] } } },
    { "at_ms": 8,  "input": { "PointerMove": { "id": 1, "x": 490.0 } } },
    { "at_ms": 12, "input": { "PointerCancel": { "id": 1 } } },
    { "at_ms": 16, "input": { "TouchMove": { "touches": [ { "id": 0, "x": 460.0 } ] } } },
    { "at_ms": 32, "input": { "TouchMove": { "touches": [ { "id": 0, "x": 400.0 } ] } } },
    { "at_ms": 48, "input": { "TouchEnd": { "touches": [ { "id": 0, "x": 400.0 } ] } } }
  ]
}"#;

#[test]
fn touch_swipe_survives_pointer_cancel() {
    let recording = Recording::from_json(SWIPE_WITH_POINTER_CANCEL).unwrap();
    let mut processor = InputProcessor::new();
    let mut carousel = carousel(3);

    recording.replay(&mut processor, &mut carousel, Instant::now());

    assert_eq!(carousel.index().active, 1);
    // The drag never snapped back at the cancel.
    assert_eq!(
        carousel.surface().offsets,
        vec![0.0, -16.0, -64.0, -160.0, -300.0]
    );
    assert!(!processor.is_tracking());
}

#[test]
fn mouse_drag_below_threshold_snaps_back() {
    let mut recording = Recording::new();
    recording
        .push(0, RawInput::MouseDown { x: 500.0 })
        .push(10, RawInput::MouseMove { x: 450.0 })
        .push(20, RawInput::MouseUp { x: 450.0 });

    let mut processor = InputProcessor::new();
    let mut carousel = carousel(3);
    recording.replay(&mut processor, &mut carousel, Instant::now());

    assert_eq!(carousel.index().active, 0);
    assert_eq!(carousel.surface().offset, 0.0);
}

#[test]
fn resize_burst_is_replayed_with_timers() {
    let mut recording = Recording::new();
    for step in 0..6 {
        recording.push(
            step * 10,
            RawInput::Resized {
                width: 800.0,
                height: 600.0,
            },
        );
    }

    let mut processor = InputProcessor::new();
    let mut carousel = carousel(3);
    carousel.go_to(1);
    carousel.surface_mut().width = 400.0;

    let effects = recording.replay(&mut processor, &mut carousel, Instant::now());

    assert!(effects.contains(EffectSet::LAYOUT_CHANGED));
    assert_eq!(carousel.surface().offset, -400.0);
    assert!(carousel.next_deadline().is_none());
}

#[test]
fn cancelled_touch_does_not_leave_track_mid_drag() {
    let mut recording = Recording::new();
    recording
        .push(0, RawInput::touch_start(500.0))
        .push(10, RawInput::touch_move(200.0))
        .push(20, RawInput::TouchCancel);

    let mut processor = InputProcessor::new();
    let mut carousel = carousel(3);
    recording.replay(&mut processor, &mut carousel, Instant::now());

    assert!(!carousel.is_dragging());
    assert_eq!(carousel.index().active, 1);
    assert_eq!(carousel.surface().offset, -300.0);
}

#[test]
fn only_first_touch_steers() {
    let mut recording = Recording::new();
    recording
        .push(
            0,
            RawInput::TouchStart {
                touches: vec![TouchPoint::new(0, 100.0), TouchPoint::new(1, 900.0)],
            },
        )
        .push(
            10,
            RawInput::TouchMove {
                touches: vec![TouchPoint::new(0, 200.0), TouchPoint::new(1, 0.0)],
            },
        )
        .push(20, RawInput::touch_end(200.0));

    let mut processor = InputProcessor::new();
    let mut carousel = carousel(3);
    carousel.go_to(1);
    recording.replay(&mut processor, &mut carousel, Instant::now());

    // (100 - 200) * 1.6 = -160: retreat.
    assert_eq!(carousel.index().active, 0);
}

proptest! {
    #[test]
    fn json_recordings_replay_identically(xs in prop::collection::vec(0.0f64..1000.0, 2..12)) {
        let mut recording = Recording::new();
        recording.push(0, RawInput::MouseDown { x: xs[0] });
        for (i, x) in xs.iter().enumerate().skip(1) {
            recording.push(i as u64 * 16, RawInput::MouseMove { x: *x });
        }
        recording.push(xs.len() as u64 * 16, RawInput::MouseUp { x: 0.0 });

        let reloaded = Recording::from_json(&recording.to_json().unwrap()).unwrap();

        let start = Instant::now();
        let mut live = carousel(4);
        recording.replay(&mut InputProcessor::new(), &mut live, start);
        let mut replayed = carousel(4);
        reloaded.replay(&mut InputProcessor::new(), &mut replayed, start);

        prop_assert_eq!(live.index(), replayed.index());
        prop_assert_eq!(&live.surface().offsets, &replayed.surface().offsets);
    }
}
