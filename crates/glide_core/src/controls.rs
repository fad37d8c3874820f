//! Navigation controls: arrow buttons and an index-dot list.
//!
//! Controls wrap the engine's public operations rather than its internals.
//! Actions go in through [`ControlAction::apply`]; the dot list follows the
//! engine through a change subscription.

use crate::carousel::Carousel;
use crate::effect::EffectSet;
use crate::index::IndexState;
use crate::notify::SubscriptionId;
use crate::surface::Surface;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// What a control asks the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlAction {
    /// Previous arrow.
    Previous,
    /// Next arrow.
    Next,
    /// Dot at this index.
    Jump(usize),
}

impl ControlAction {
    pub fn apply<S: Surface>(self, carousel: &mut Carousel<S>) -> EffectSet {
        match self {
            ControlAction::Previous => carousel.retreat(),
            ControlAction::Next => carousel.advance(),
            ControlAction::Jump(index) => carousel.go_to(index),
        }
    }
}

/// A list of dots, one per panel.
pub trait DotList {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add or remove the active marker on the dot at `index`.
    fn set_dot_active(&mut self, index: usize, active: bool);
}

/// Mirrors an [`IndexState`] onto a [`DotList`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DotMirror;

impl DotMirror {
    /// Activate exactly the dot at `state.active`. A dot list shorter than
    /// the panel count leaves the missing dots alone.
    pub fn apply<D: DotList + ?Sized>(dots: &mut D, state: &IndexState) {
        for index in 0..dots.len() {
            dots.set_dot_active(index, index == state.active);
        }
    }
}

/// Dot list kept in sync with a carousel.
#[derive(Debug)]
pub struct NavControls<D> {
    dots: Rc<RefCell<D>>,
    subscription: Option<SubscriptionId>,
}

impl<D: DotList + 'static> NavControls<D> {
    /// Subscribe `dots` to `carousel` and sync them to the current index.
    pub fn attach<S: Surface>(carousel: &mut Carousel<S>, dots: D) -> Self {
        let dots = Rc::new(RefCell::new(dots));
        if carousel.panel_count() > 0 {
            DotMirror::apply(&mut *dots.borrow_mut(), carousel.index());
        }

        let mirror = Rc::clone(&dots);
        let subscription = carousel.subscribe(move |state| {
            if let Ok(mut dots) = mirror.try_borrow_mut() {
                DotMirror::apply(&mut *dots, state);
            }
        });

        Self { dots, subscription }
    }

    /// Stop following the carousel.
    pub fn detach<S: Surface>(&mut self, carousel: &mut Carousel<S>) {
        if let Some(id) = self.subscription.take() {
            carousel.unsubscribe(id);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Shared handle to the dot list.
    pub fn dots(&self) -> Rc<RefCell<D>> {
        Rc::clone(&self.dots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Dots(Vec<bool>);

    impl DotList for Dots {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn set_dot_active(&mut self, index: usize, active: bool) {
            self.0[index] = active;
        }
    }

    #[test]
    fn mirror_activates_exactly_one() {
        let mut dots = Dots(vec![true, true, false, true]);
        DotMirror::apply(&mut dots, &IndexState::recompute(2, 4).unwrap());
        assert_eq!(dots.0, vec![false, false, true, false]);
    }

    #[test]
    fn short_dot_list_is_tolerated() {
        let mut dots = Dots(vec![true, false]);
        DotMirror::apply(&mut dots, &IndexState::recompute(3, 4).unwrap());
        assert_eq!(dots.0, vec![false, false]);
    }
}
