//! Recorded input sequences.
//!
//! A recording is a list of raw inputs stamped with milliseconds since the
//! start of the session. Replaying one drives a carousel exactly as the
//! live event stream did, including resize timers, which makes interaction
//! bugs reproducible as plain JSON fixtures.

use crate::error::InputError;
use crate::processor::InputProcessor;
use crate::raw::RawInput;
use glide_core::{Carousel, EffectSet, Surface};
use instant::Instant;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One recorded input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedInput {
    /// Milliseconds since the recording started.
    pub at_ms: u64,
    pub input: RawInput,
}

/// An ordered input recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub events: Vec<TimedInput>,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `input` at `at_ms`.
    pub fn push(&mut self, at_ms: u64, input: RawInput) -> &mut Self {
        self.events.push(TimedInput { at_ms, input });
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Timestamp of the last event.
    pub fn duration_ms(&self) -> u64 {
        self.events.last().map_or(0, |event| event.at_ms)
    }

    /// Parse and check ordering.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let recording: Recording = serde_json::from_str(json)?;
        recording.validate()?;
        Ok(recording)
    }

    pub fn to_json(&self) -> Result<String, InputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Timestamps must never go backwards.
    pub fn validate(&self) -> Result<(), InputError> {
        for (index, pair) in self.events.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(InputError::OutOfOrder {
                    index: index + 1,
                    at_ms: pair[1].at_ms,
                    previous_ms: pair[0].at_ms,
                });
            }
        }
        Ok(())
    }

    /// Feed every event to `carousel` through `processor`, running timers
    /// that fall due between events, then drain timers still pending
    /// after the last one.
    pub fn replay<S: Surface>(
        &self,
        processor: &mut InputProcessor,
        carousel: &mut Carousel<S>,
        start: Instant,
    ) -> EffectSet {
        let mut effects = EffectSet::NONE;
        for event in &self.events {
            let now = start + Duration::from_millis(event.at_ms);
            effects |= carousel.poll_timers(now);
            effects |= processor.dispatch(&event.input, carousel, now);
        }
        while let Some(deadline) = carousel.next_deadline() {
            effects |= carousel.poll_timers(deadline);
        }
        tracing::debug!(events = self.events.len(), "recording replayed");
        effects
    }
}
