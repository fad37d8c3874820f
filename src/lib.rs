//! glide: a draggable, paginated carousel.
//!
//! ```text
//! glide_web ──► glide_input ──► glide_core
//!  (DOM)         (events)        (engine)
//! ```
//!
//! - [`engine`]: layout, index navigation, gesture tracking, commit policy,
//!   resize scheduling and navigation controls over an abstract
//!   [`Surface`](engine::Surface).
//! - [`input`]: mouse, pointer and touch events unified into gesture
//!   commands, plus recordable input sequences.
//! - [`web`]: the `web-sys` binding (wasm32 only, apart from error and
//!   style helpers).

pub use glide_core as engine;
pub use glide_input as input;
pub use glide_web as web;

/// Everything needed to drive a carousel from host code.
pub mod prelude {
    pub use glide_core::{
        Carousel, CarouselConfig, ControlAction, DotList, EffectSet, Fault, IndexState,
        NavControls, PanelGeometry, Surface,
    };
    pub use glide_input::{InputProcessor, RawInput, Recording};
}
