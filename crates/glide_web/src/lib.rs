//! Browser binding for glide carousels.
//!
//! Mounts a [`glide_core::Carousel`] on a wrapper/track pair in the page:
//! the DOM is read and written through [`DomSurface`], pointer, touch and
//! mouse events are folded by [`glide_input::InputProcessor`], and resize
//! passes are driven by a single `setTimeout` slot.
//!
//! # Example
//!
//! ```ignore
//! use glide_web::Slideshow;
//!
//! glide_web::init_logging();
//! let mut slideshow = Slideshow::mount(".slide-wrapper", ".slide", Default::default())?;
//! slideshow.add_arrows(".prev", ".next")?;
//! slideshow.add_dots(None)?;
//! ```

mod error;
pub mod style;

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod controls;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod listener;
#[cfg(target_arch = "wasm32")]
mod slideshow;
#[cfg(target_arch = "wasm32")]
mod timer;

pub use error::WebError;

#[cfg(target_arch = "wasm32")]
pub use bindings::GlideSlideshow;
#[cfg(target_arch = "wasm32")]
pub use controls::DomDots;
#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
#[cfg(target_arch = "wasm32")]
pub use events::raw_input;
#[cfg(target_arch = "wasm32")]
pub use listener::Listener;
#[cfg(target_arch = "wasm32")]
pub use slideshow::Slideshow;
#[cfg(target_arch = "wasm32")]
pub use timer::TimerSlot;

/// Install the panic hook and route `tracing` to the browser console.
/// Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    });
}

/// Native builds log through whatever subscriber the host installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {}
