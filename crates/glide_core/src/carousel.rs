//! The carousel engine.
//!
//! Owns the layout, the index state, the gesture tracker and the resize
//! schedule for one wrapper/track pair, and is the only thing that writes to
//! the [`Surface`].
//!
//! Every navigation operation comes in two forms: `try_*` returns the
//! [`Fault`] explaining a no-op, the plain form absorbs it (logged at
//! `trace`) and returns [`EffectSet::NONE`].

use crate::config::CarouselConfig;
use crate::effect::EffectSet;
use crate::fault::Fault;
use crate::gesture::{GestureEnd, GestureTracker};
use crate::index::IndexState;
use crate::layout::{compute_layout, Layout};
use crate::notify::{ChangeBus, SubscriptionId};
use crate::resize::ResizeReactor;
use crate::surface::Surface;
use instant::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Live,
    TornDown,
}

/// Draggable, paginated carousel bound to one surface.
pub struct Carousel<S: Surface> {
    surface: S,
    config: CarouselConfig,
    layout: Layout<S::Panel>,
    index: IndexState,
    tracker: GestureTracker,
    resize: ResizeReactor,
    bus: ChangeBus,
    lifecycle: Lifecycle,
}

impl<S> std::fmt::Debug for Carousel<S>
where
    S: Surface + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("surface", &self.surface)
            .field("panels", &self.layout.len())
            .field("index", &self.index)
            .field("tracker", &self.tracker)
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

impl<S: Surface> Carousel<S> {
    /// Bind an engine to `surface`. Nothing is read or written until
    /// [`initialize`](Self::initialize).
    pub fn new(surface: S, config: CarouselConfig) -> Self {
        let tracker = GestureTracker::new(config.amplification);
        let resize = ResizeReactor::new(config.resize_debounce(), config.resize_settle());
        Self {
            surface,
            config,
            layout: Layout::default(),
            index: IndexState::default(),
            tracker,
            resize,
            bus: ChangeBus::new(),
            lifecycle: Lifecycle::Created,
        }
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// First layout, snap to panel 0, then enable the transition.
    pub fn initialize(&mut self) -> EffectSet {
        if self.lifecycle != Lifecycle::Created {
            tracing::trace!(lifecycle = ?self.lifecycle, "initialize ignored");
            return EffectSet::NONE;
        }
        self.lifecycle = Lifecycle::Live;

        let mut effects = self.recompute_layout();
        effects |= self.go_to(0);
        self.surface.set_transition(true);
        effects |= EffectSet::TRANSITION_ENABLED;

        tracing::debug!(panels = self.layout.len(), "carousel initialized");
        effects
    }

    /// Drop every subscriber and pending resize pass. Later operations are
    /// no-ops.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.tracker.end();
        self.resize.cancel();
        self.bus.clear();
        self.lifecycle = Lifecycle::TornDown;
        tracing::debug!("carousel torn down");
    }

    pub fn is_live(&self) -> bool {
        self.lifecycle == Lifecycle::Live
    }

    fn ensure_live(&self) -> Result<(), Fault> {
        if self.is_live() {
            Ok(())
        } else {
            Err(Fault::NotInitialized)
        }
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Commit to the panel at `index`.
    pub fn try_go_to(&mut self, index: usize) -> Result<EffectSet, Fault> {
        self.ensure_live()?;
        let count = self.layout.len();
        if count == 0 {
            return Err(Fault::EmptyCarousel);
        }
        let position = self
            .layout
            .position(index)
            .ok_or(Fault::IndexOutOfRange { index, count })?;
        let state =
            IndexState::recompute(index, count).ok_or(Fault::IndexOutOfRange { index, count })?;

        let from = self.index.active;
        self.tracker.set_committed_offset(position);
        self.surface.set_track_offset(position);
        self.index = state;

        for (i, entry) in self.layout.iter().enumerate() {
            self.surface.set_panel_active(&entry.element, i == index);
        }

        self.bus.emit(&self.index);

        tracing::debug!(from, to = index, offset = position, "navigated");
        Ok(EffectSet::TRACK_MOVED
            | EffectSet::INDEX_CHANGED
            | EffectSet::ACTIVE_CLASS_CHANGED
            | EffectSet::NOTIFIED)
    }

    pub fn go_to(&mut self, index: usize) -> EffectSet {
        absorb(self.try_go_to(index))
    }

    /// Step to the next panel. No wraparound.
    pub fn try_advance(&mut self) -> Result<EffectSet, Fault> {
        self.ensure_live()?;
        if self.layout.is_empty() {
            return Err(Fault::EmptyCarousel);
        }
        let next = self
            .index
            .step_next()
            .ok_or(Fault::NoNextPanel(self.index.active))?;
        self.try_go_to(next)
    }

    pub fn advance(&mut self) -> EffectSet {
        absorb(self.try_advance())
    }

    /// Step to the previous panel. No wraparound.
    pub fn try_retreat(&mut self) -> Result<EffectSet, Fault> {
        self.ensure_live()?;
        if self.layout.is_empty() {
            return Err(Fault::EmptyCarousel);
        }
        let previous = self
            .index
            .step_previous()
            .ok_or(Fault::NoPreviousPanel(self.index.active))?;
        self.try_go_to(previous)
    }

    pub fn retreat(&mut self) -> EffectSet {
        absorb(self.try_retreat())
    }

    /// Decide where a finished drag lands.
    ///
    /// Movement strictly beyond the threshold advances or retreats when a
    /// panel exists in that direction; anything else snaps back to the
    /// active panel's resting position.
    fn commit(&mut self, movement: f64) -> EffectSet {
        let threshold = self.config.commit_threshold;
        if movement > threshold && self.index.next.is_some() {
            self.advance()
        } else if movement < -threshold && self.index.previous.is_some() {
            self.retreat()
        } else {
            // Panels may have disappeared during the drag.
            let last = self.layout.len().saturating_sub(1);
            self.go_to(self.index.active.min(last))
        }
    }

    // =========================================================================
    // GESTURE
    // =========================================================================

    /// Pointer went down at `origin_x`.
    pub fn gesture_start(&mut self, origin_x: f64) -> EffectSet {
        if let Err(fault) = self.ensure_live() {
            return absorb(Err(fault));
        }
        if self.layout.is_empty() {
            return absorb(Err(Fault::EmptyCarousel));
        }
        if !self.tracker.start(origin_x) {
            return EffectSet::NONE;
        }
        self.surface.set_transition(false);
        EffectSet::GESTURE_STARTED | EffectSet::TRANSITION_DISABLED
    }

    /// Pointer moved to `current_x`. The track follows immediately.
    pub fn gesture_move(&mut self, current_x: f64) -> EffectSet {
        match self.tracker.move_to(current_x) {
            Some(offset) => {
                self.surface.set_track_offset(offset);
                EffectSet::TRACK_MOVED
            }
            None => absorb(Err(Fault::GestureNotStarted)),
        }
    }

    /// Pointer released. Re-enables the transition and commits.
    pub fn gesture_end(&mut self) -> EffectSet {
        let Some(GestureEnd { movement, .. }) = self.tracker.end() else {
            return absorb(Err(Fault::GestureNotStarted));
        };
        self.surface.set_transition(true);
        EffectSet::GESTURE_ENDED | EffectSet::TRANSITION_ENABLED | self.commit(movement)
    }

    // =========================================================================
    // LAYOUT / RESIZE
    // =========================================================================

    fn recompute_layout(&mut self) -> EffectSet {
        let width = self.surface.wrapper_width();
        let panels: Vec<_> = self
            .surface
            .panels()
            .into_iter()
            .map(|panel| {
                let geometry = self.surface.panel_geometry(&panel);
                (panel, geometry)
            })
            .collect();
        self.layout = compute_layout(width, panels);
        tracing::debug!(panels = self.layout.len(), wrapper_width = width, "layout computed");
        EffectSet::LAYOUT_CHANGED
    }

    /// Recompute the layout and re-center the active panel.
    ///
    /// During a drag only the layout is refreshed; the gesture keeps its
    /// own offsets and its end snaps against the new layout.
    pub fn relayout(&mut self) -> EffectSet {
        if let Err(fault) = self.ensure_live() {
            return absorb(Err(fault));
        }
        let mut effects = self.recompute_layout();
        let count = self.layout.len();
        if count == 0 {
            return effects;
        }
        let target = self.index.active.min(count - 1);
        if self.tracker.is_dragging() {
            // Neighbours must match the new panel count before the drag commits.
            if let Some(state) = IndexState::recompute(target, count) {
                self.index = state;
            }
            return effects;
        }
        effects |= self.go_to(target);
        effects
    }

    /// A viewport resize signal arrived at `now`.
    pub fn on_resize(&mut self, now: Instant) {
        if self.is_live() {
            self.resize.signal(now);
        }
    }

    /// Run every resize pass due by `now`.
    pub fn poll_timers(&mut self, now: Instant) -> EffectSet {
        let mut effects = EffectSet::NONE;
        while let Some(pass) = self.resize.poll(now) {
            tracing::debug!(?pass, "resize pass");
            effects |= self.relayout();
        }
        effects
    }

    /// When [`poll_timers`](Self::poll_timers) next has work.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.resize.next_deadline()
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Listen for committed navigations. Ignored after teardown.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&IndexState) + 'static,
    ) -> Option<SubscriptionId> {
        if self.lifecycle == Lifecycle::TornDown {
            return None;
        }
        Some(self.bus.subscribe(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn index(&self) -> &IndexState {
        &self.index
    }

    pub fn layout(&self) -> &Layout<S::Panel> {
        &self.layout
    }

    pub fn panel_count(&self) -> usize {
        self.layout.len()
    }

    /// Resting offset of the track.
    pub fn committed_offset(&self) -> f64 {
        self.tracker.committed_offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.tracker
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

fn absorb(result: Result<EffectSet, Fault>) -> EffectSet {
    result.unwrap_or_else(|fault| {
        tracing::trace!(%fault, "operation absorbed");
        EffectSet::NONE
    })
}
