//! Unified input handling for glide carousels.
//!
//! Mouse, pointer and touch events are folded into one gesture stream:
//! start, move, end. Resize signals pass through to the engine's resize
//! schedule.
//!
//! # Architecture
//!
//! ```text
//! Mouse   ─┐
//! Pointer ─┼──► RawInput ──► InputProcessor ──► Command ──► Carousel
//! Touch   ─┤                  (owner modality)
//! Resize  ─┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use glide_input::{InputProcessor, RawInput};
//!
//! let mut processor = InputProcessor::new();
//! processor.dispatch(&RawInput::MouseDown { x: 500.0 }, &mut carousel, now);
//! processor.dispatch(&RawInput::MouseMove { x: 400.0 }, &mut carousel, now);
//! processor.dispatch(&RawInput::MouseUp { x: 400.0 }, &mut carousel, now);
//! ```

mod error;
mod processor;
mod raw;
mod recording;

pub use error::InputError;
pub use processor::{apply, Command, InputProcessor};
pub use raw::{Modality, RawInput, TouchPoint};
pub use recording::{Recording, TimedInput};
