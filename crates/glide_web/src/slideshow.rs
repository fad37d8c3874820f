//! A mounted carousel: engine, DOM surface, listeners and timer.
//!
//! ```text
//! track events ──┐
//! wrapper moves ─┼──► raw_input ──► InputProcessor ──► Carousel<DomSurface>
//! window resize ─┘                                        │
//!                                   TimerSlot ◄── next_deadline
//! arrows / dots ──────────────────► retreat / advance / go_to
//! ```
//!
//! All listener closures share one `Rc<RefCell<Shared>>`. Handlers use
//! `try_borrow_mut` and drop the event if the engine is already borrowed.

use crate::controls::DomDots;
use crate::dom::{query, DomSurface};
use crate::error::WebError;
use crate::events::{raw_input, resized, TRACK_EVENTS, WRAPPER_EVENTS};
use crate::listener::Listener;
use crate::timer::TimerSlot;
use glide_core::{Carousel, CarouselConfig, IndexState, NavControls, SubscriptionId};
use glide_input::{InputProcessor, RawInput};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys::{Document, Event, HtmlElement, Window};

struct Shared {
    carousel: Carousel<DomSurface>,
    processor: InputProcessor,
    timer: Option<TimerSlot>,
}

impl Shared {
    fn handle(&mut self, input: &RawInput) {
        let now = Instant::now();
        let effects = self.processor.dispatch(input, &mut self.carousel, now);
        if let RawInput::Resized { .. } = input {
            self.sync_timer(now);
        }
        tracing::trace!(?effects, "input handled");
    }

    fn tick(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.fired();
        }
        let now = Instant::now();
        self.carousel.poll_timers(now);
        self.sync_timer(now);
    }

    fn sync_timer(&mut self, now: Instant) {
        let Some(timer) = self.timer.as_mut() else {
            return;
        };
        match self.carousel.next_deadline() {
            Some(deadline) => {
                let delay = if deadline > now {
                    deadline - now
                } else {
                    Duration::ZERO
                };
                if let Err(err) = timer.arm(delay) {
                    tracing::warn!(%err, "resize timer not armed");
                }
            }
            None => timer.clear(),
        }
    }
}

/// A carousel mounted on a wrapper/track pair in the page.
pub struct Slideshow {
    shared: Rc<RefCell<Shared>>,
    document: Document,
    wrapper: HtmlElement,
    active_class: String,
    input_listeners: Vec<Listener>,
    arrow_listeners: Vec<Listener>,
    dot_listeners: Vec<Listener>,
    controls: Option<NavControls<DomDots>>,
}

impl Slideshow {
    /// Find the elements, lay out the panels, snap to the first one and
    /// start listening for input.
    pub fn mount(
        wrapper_selector: &str,
        track_selector: &str,
        config: CarouselConfig,
    ) -> Result<Self, WebError> {
        config.validate()?;
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;

        let surface = DomSurface::query(&document, wrapper_selector, track_selector, &config)?;
        let wrapper = surface.wrapper().clone();
        let track = surface.track().clone();
        let active_class = config.active_class.clone();

        let mut carousel = Carousel::new(surface, config);
        carousel.initialize();

        let shared = Rc::new(RefCell::new(Shared {
            carousel,
            processor: InputProcessor::new(),
            timer: None,
        }));

        let weak = Rc::downgrade(&shared);
        let timer = TimerSlot::new(window.clone(), move || {
            if let Some(shared) = weak.upgrade() {
                if let Ok(mut shared) = shared.try_borrow_mut() {
                    shared.tick();
                }
            }
        });
        shared.borrow_mut().timer = Some(timer);

        let mut input_listeners = Vec::new();
        for &event in TRACK_EVENTS {
            input_listeners.push(input_listener(&shared, &track, event)?);
        }
        for &event in WRAPPER_EVENTS {
            input_listeners.push(input_listener(&shared, &wrapper, event)?);
        }
        input_listeners.push(resize_listener(&shared, &window)?);

        tracing::debug!(
            wrapper = wrapper_selector,
            track = track_selector,
            listeners = input_listeners.len(),
            "slideshow mounted"
        );

        Ok(Self {
            shared,
            document,
            wrapper,
            active_class,
            input_listeners,
            arrow_listeners: Vec::new(),
            dot_listeners: Vec::new(),
            controls: None,
        })
    }

    // =========================================================================
    // CONTROLS
    // =========================================================================

    /// Bind previous/next buttons. Replaces earlier bindings.
    pub fn add_arrows(&mut self, prev_selector: &str, next_selector: &str) -> Result<(), WebError> {
        let prev = query(&self.document, prev_selector)?;
        let next = query(&self.document, next_selector)?;

        let back = Rc::clone(&self.shared);
        let prev_listener = Listener::new(&prev, "click", move |_| {
            if let Ok(mut shared) = back.try_borrow_mut() {
                shared.carousel.retreat();
            }
        })?;
        let forward = Rc::clone(&self.shared);
        let next_listener = Listener::new(&next, "click", move |_| {
            if let Ok(mut shared) = forward.try_borrow_mut() {
                shared.carousel.advance();
            }
        })?;

        self.arrow_listeners = vec![prev_listener, next_listener];
        Ok(())
    }

    /// Bind an index-dot list. With `None`, a list is generated and
    /// appended to the wrapper. Replaces an earlier dot list.
    pub fn add_dots(&mut self, custom_selector: Option<&str>) -> Result<(), WebError> {
        self.remove_dots();

        let dots = match custom_selector {
            Some(selector) => {
                DomDots::from_list(query(&self.document, selector)?, &self.active_class)
            }
            None => {
                let count = self.with_carousel(|c| c.panel_count()).unwrap_or(0);
                DomDots::generate(&self.document, &self.wrapper, count, &self.active_class)?
            }
        };

        let mut listeners = Vec::with_capacity(dots.items().len());
        for (index, item) in dots.items().iter().enumerate() {
            let shared = Rc::clone(&self.shared);
            listeners.push(Listener::new(item, "click", move |event: Event| {
                event.prevent_default();
                if let Ok(mut shared) = shared.try_borrow_mut() {
                    shared.carousel.go_to(index);
                }
            })?);
        }

        let mut shared = self.shared.try_borrow_mut().map_err(|_| {
            WebError::Dom("carousel busy while attaching dots".to_string())
        })?;
        self.controls = Some(NavControls::attach(&mut shared.carousel, dots));
        self.dot_listeners = listeners;
        Ok(())
    }

    fn remove_dots(&mut self) {
        self.dot_listeners.clear();
        if let Some(mut controls) = self.controls.take() {
            if let Ok(mut shared) = self.shared.try_borrow_mut() {
                controls.detach(&mut shared.carousel);
            }
            controls.dots().borrow().remove_generated();
        }
    }

    // =========================================================================
    // ENGINE ACCESS
    // =========================================================================

    fn with_carousel<R>(&self, f: impl FnOnce(&mut Carousel<DomSurface>) -> R) -> Option<R> {
        let mut shared = self.shared.try_borrow_mut().ok()?;
        Some(f(&mut shared.carousel))
    }

    pub fn advance(&self) {
        self.with_carousel(|c| c.advance());
    }

    pub fn retreat(&self) {
        self.with_carousel(|c| c.retreat());
    }

    pub fn go_to(&self, index: usize) {
        self.with_carousel(|c| c.go_to(index));
    }

    /// Re-measure the panels now, without waiting for a resize.
    pub fn relayout(&self) {
        self.with_carousel(|c| c.relayout());
    }

    pub fn index(&self) -> Option<IndexState> {
        self.with_carousel(|c| *c.index())
    }

    pub fn panel_count(&self) -> usize {
        self.with_carousel(|c| c.panel_count()).unwrap_or(0)
    }

    /// Listen for committed navigations.
    pub fn on_change(
        &self,
        listener: impl FnMut(&IndexState) + 'static,
    ) -> Option<SubscriptionId> {
        self.with_carousel(|c| c.subscribe(listener)).flatten()
    }

    pub fn off_change(&self, id: SubscriptionId) -> bool {
        self.with_carousel(|c| c.unsubscribe(id)).unwrap_or(false)
    }

    // =========================================================================
    // TEARDOWN
    // =========================================================================

    /// Remove every listener, cancel the timer and stop the engine.
    pub fn teardown(&mut self) {
        self.input_listeners.clear();
        self.arrow_listeners.clear();
        self.remove_dots();
        if let Ok(mut shared) = self.shared.try_borrow_mut() {
            shared.timer = None;
            shared.processor.reset();
            shared.carousel.teardown();
        }
        tracing::debug!("slideshow torn down");
    }
}

impl Drop for Slideshow {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for Slideshow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slideshow")
            .field("listeners", &self.input_listeners.len())
            .field("arrows", &!self.arrow_listeners.is_empty())
            .field("dots", &self.controls.is_some())
            .finish()
    }
}

fn input_listener(
    shared: &Rc<RefCell<Shared>>,
    target: &HtmlElement,
    event: &'static str,
) -> Result<Listener, WebError> {
    let shared = Rc::clone(shared);
    Listener::new(target, event, move |event: Event| {
        // Stops the browser's native image drag.
        if event.type_() == "mousedown" {
            event.prevent_default();
        }
        let Some(input) = raw_input(&event) else {
            return;
        };
        if let Ok(mut shared) = shared.try_borrow_mut() {
            shared.handle(&input);
        }
    })
}

fn resize_listener(shared: &Rc<RefCell<Shared>>, window: &Window) -> Result<Listener, WebError> {
    let shared = Rc::clone(shared);
    let source = window.clone();
    Listener::new(window, "resize", move |_| {
        let input = resized(&source);
        if let Ok(mut shared) = shared.try_borrow_mut() {
            shared.handle(&input);
        }
    })
}
