//! Panel positioning within the wrapper.
//!
//! Positions use the track's translate convention: a panel sitting to the
//! right of the wrapper's center needs a negative translate to be centered.

use serde::{Deserialize, Serialize};

/// Box geometry of one panel, as reported by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelGeometry {
    /// Rendered width (`offsetWidth`).
    pub width: f64,
    /// Left edge relative to the track (`offsetLeft`).
    pub left: f64,
}

impl PanelGeometry {
    pub fn new(width: f64, left: f64) -> Self {
        Self { width, left }
    }
}

/// A panel paired with the track offset that centers it.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelEntry<P> {
    /// Track offset that centers `element` in the wrapper.
    pub position: f64,
    /// Surface handle of the panel.
    pub element: P,
}

/// Ordered panel entries, one per track child.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout<P> {
    entries: Vec<PanelEntry<P>>,
}

impl<P> Default for Layout<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<P> Layout<P> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&PanelEntry<P>> {
        self.entries.get(index)
    }

    /// Resting offset of the panel at `index`.
    pub fn position(&self, index: usize) -> Option<f64> {
        self.entries.get(index).map(|entry| entry.position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelEntry<P>> {
        self.entries.iter()
    }

    /// All positions in panel order.
    pub fn positions(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.position).collect()
    }
}

/// Offset that centers a panel of `geometry` inside a wrapper of `wrapper_width`.
pub fn panel_position(wrapper_width: f64, geometry: PanelGeometry) -> f64 {
    let margin = (wrapper_width - geometry.width) / 2.0;
    -(geometry.left - margin)
}

/// Compute the layout for `panels` in order.
///
/// Pure function of the geometry passed in. Degenerate geometry (a wrapper
/// that has not been laid out yet) yields degenerate offsets, never an error.
pub fn compute_layout<P, I>(wrapper_width: f64, panels: I) -> Layout<P>
where
    I: IntoIterator<Item = (P, PanelGeometry)>,
{
    let entries = panels
        .into_iter()
        .map(|(element, geometry)| PanelEntry {
            position: panel_position(wrapper_width, geometry),
            element,
        })
        .collect();
    Layout { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn full_width_panels() {
        let layout = compute_layout(
            300.0,
            vec![
                (0, PanelGeometry::new(300.0, 0.0)),
                (1, PanelGeometry::new(300.0, 300.0)),
                (2, PanelGeometry::new(300.0, 600.0)),
            ],
        );

        assert_eq!(layout.positions(), vec![0.0, -300.0, -600.0]);
        assert_eq!(layout.get(1).map(|e| e.element), Some(1));
    }

    #[test]
    fn narrow_panel_is_centered() {
        // 200px panel in a 400px wrapper leaves a 100px margin on each side.
        let position = panel_position(400.0, PanelGeometry::new(200.0, 250.0));
        assert_eq!(position, -150.0);
    }

    #[test]
    fn empty_panel_set() {
        let layout: Layout<u32> = compute_layout(300.0, Vec::new());
        assert!(layout.is_empty());
        assert_eq!(layout.position(0), None);
    }

    #[test]
    fn unlaid_out_wrapper_is_degenerate_not_fatal() {
        let layout = compute_layout(0.0, vec![("a", PanelGeometry::default())]);
        assert_eq!(layout.position(0), Some(0.0));
    }

    proptest! {
        #[test]
        fn centering_law(
            wrapper in 0.0f64..4000.0,
            width in 0.0f64..4000.0,
            left in 0.0f64..40000.0,
        ) {
            let position = panel_position(wrapper, PanelGeometry::new(width, left));
            prop_assert_eq!(position, -(left - (wrapper - width) / 2.0));
        }
    }
}
