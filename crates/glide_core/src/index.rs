//! Previous / active / next bookkeeping.

use serde::{Deserialize, Serialize};

/// The navigable neighbourhood of the active panel.
///
/// `previous` is `None` exactly when `active` is the first panel and `next`
/// is `None` exactly when it is the last. There is no wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IndexState {
    pub previous: Option<usize>,
    pub active: usize,
    pub next: Option<usize>,
}

impl IndexState {
    /// Build the state for `index` among `panel_count` panels.
    ///
    /// Returns `None` when `index` is not a valid panel index.
    pub fn recompute(index: usize, panel_count: usize) -> Option<Self> {
        if index >= panel_count {
            return None;
        }
        let last = panel_count - 1;
        Some(Self {
            previous: index.checked_sub(1),
            active: index,
            next: (index < last).then_some(index + 1),
        })
    }

    /// Index to move to when stepping backwards.
    pub fn step_previous(&self) -> Option<usize> {
        self.previous
    }

    /// Index to move to when stepping forwards.
    pub fn step_next(&self) -> Option<usize> {
        self.next
    }

    pub fn is_first(&self) -> bool {
        self.previous.is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn middle_panel() {
        let state = IndexState::recompute(1, 3).unwrap();
        assert_eq!(state.previous, Some(0));
        assert_eq!(state.active, 1);
        assert_eq!(state.next, Some(2));
    }

    #[test]
    fn single_panel_has_no_neighbours() {
        let state = IndexState::recompute(0, 1).unwrap();
        assert!(state.is_first());
        assert!(state.is_last());
        assert_eq!(state.step_previous(), None);
        assert_eq!(state.step_next(), None);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(IndexState::recompute(3, 3), None);
        assert_eq!(IndexState::recompute(0, 0), None);
    }

    proptest! {
        #[test]
        fn boundary_invariant((count, active) in (1usize..64).prop_flat_map(|n| (Just(n), 0..n))) {
            let state = IndexState::recompute(active, count).unwrap();
            prop_assert_eq!(state.active, active);
            prop_assert_eq!(state.previous.is_none(), active == 0);
            prop_assert_eq!(state.next.is_none(), active == count - 1);
            if let Some(previous) = state.previous {
                prop_assert_eq!(previous + 1, active);
            }
            if let Some(next) = state.next {
                prop_assert_eq!(next, active + 1);
            }
        }
    }
}
