//! The boundary between the engine and the thing it moves.
//!
//! A surface is the wrapper + track pair. The engine never creates or
//! destroys either; it reads geometry and writes a transform, a transition
//! switch and per-panel active markers.

use crate::layout::PanelGeometry;

/// DOM-like wrapper/track pair driven by a [`Carousel`](crate::Carousel).
pub trait Surface {
    /// Handle to one panel (a track child).
    type Panel: Clone;

    /// Current wrapper width (`offsetWidth`).
    fn wrapper_width(&self) -> f64;

    /// Track children, in order.
    fn panels(&self) -> Vec<Self::Panel>;

    /// Geometry of `panel` (`offsetWidth` / `offsetLeft`).
    fn panel_geometry(&self, panel: &Self::Panel) -> PanelGeometry;

    /// Write the track's horizontal translate.
    fn set_track_offset(&mut self, offset: f64);

    /// Switch the track's transition animation on or off.
    fn set_transition(&mut self, enabled: bool);

    /// Add or remove the active marker on `panel`.
    fn set_panel_active(&mut self, panel: &Self::Panel, active: bool);
}
