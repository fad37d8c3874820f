//! Carousel engine for glide.
//!
//! This crate owns every piece of carousel state: where each panel sits,
//! which panel is active, how a pointer drag turns into a track offset, and
//! when a resize should re-center the track. It never touches a real DOM;
//! all reads and writes go through the [`Surface`] trait.
//!
//! # Architecture
//!
//! ```text
//! pointer ─► GestureTracker ─► live offset ─────────────┐
//!                 │                                     ▼
//!                 └─ movement ─► commit policy ─► Carousel::go_to ─► Surface
//!                                     │                 │
//!                              IndexState          ChangeBus ─► NavControls
//!                                                       ▲
//! resize ─► ResizeReactor (debounce + settle) ─► relayout
//! ```
//!
//! # Example
//!
//! ```ignore
//! use glide_core::{Carousel, CarouselConfig};
//!
//! let mut carousel = Carousel::new(surface, CarouselConfig::default());
//! carousel.initialize();
//!
//! carousel.gesture_start(500.0);
//! carousel.gesture_move(400.0);
//! carousel.gesture_end(); // movement 160 > 120, advances
//! ```

mod carousel;
mod config;
pub mod controls;
mod debounce;
mod effect;
mod fault;
mod gesture;
mod index;
mod layout;
mod notify;
mod resize;
mod surface;

pub use carousel::Carousel;
pub use config::{CarouselConfig, ConfigError};
pub use controls::{ControlAction, DotList, DotMirror, NavControls};
pub use debounce::Debounce;
pub use effect::EffectSet;
pub use fault::Fault;
pub use gesture::{GestureEnd, GesturePhase, GestureState, GestureTracker};
pub use index::IndexState;
pub use layout::{compute_layout, panel_position, Layout, PanelEntry, PanelGeometry};
pub use notify::{ChangeBus, SubscriptionId};
pub use resize::{ResizePass, ResizeReactor};
pub use surface::Surface;

/// Pointer-to-track sensitivity multiplier applied to every drag delta.
pub const AMPLIFICATION: f64 = 1.6;

/// Amplified drag distance (track pixels) a gesture must exceed to change panel.
pub const COMMIT_THRESHOLD: f64 = 120.0;

/// Quiet period before a burst of resize signals is handled (milliseconds).
pub const RESIZE_DEBOUNCE_MS: u64 = 50;

/// Delay of the follow-up re-layout after a debounced resize (milliseconds).
pub const RESIZE_SETTLE_MS: u64 = 1000;

/// Default class toggled on the active panel and its dot.
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

/// Default CSS transition applied to the track outside of a drag.
pub const DEFAULT_TRANSITION: &str = "transform .3s";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn constants_are_reasonable() {
        assert!(AMPLIFICATION > 0.0);
        assert!(COMMIT_THRESHOLD > 0.0);
        assert!(RESIZE_DEBOUNCE_MS > 0);
        assert!(RESIZE_SETTLE_MS > RESIZE_DEBOUNCE_MS);
        assert!(!DEFAULT_ACTIVE_CLASS.is_empty());
    }

    #[test]
    fn threshold_is_about_75_raw_pixels() {
        let raw = COMMIT_THRESHOLD / AMPLIFICATION;
        assert!((raw - 75.0).abs() < 1e-9);
    }
}
