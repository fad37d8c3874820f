//! Effect flags returned by engine operations.
//!
//! Every operation reports what it touched. A no-op reports
//! [`EffectSet::NONE`], which is how callers tell "nothing moved" apart from
//! a committed navigation.

use bitflags::bitflags;

bitflags! {
    /// Set of observable changes produced by one engine operation.
    ///
    /// # Example
    ///
    /// ```
    /// use glide_core::EffectSet;
    ///
    /// let effects = EffectSet::TRACK_MOVED | EffectSet::INDEX_CHANGED;
    /// assert!(effects.moved());
    /// assert!(!effects.is_noop());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EffectSet: u16 {
        /// No effects.
        const NONE = 0;

        // =====================================================================
        // TRACK
        // =====================================================================

        /// Track transform was written.
        const TRACK_MOVED = 1 << 0;

        /// Transition animation was switched on.
        const TRANSITION_ENABLED = 1 << 1;

        /// Transition animation was switched off (drag in progress).
        const TRANSITION_DISABLED = 1 << 2;

        // =====================================================================
        // NAVIGATION
        // =====================================================================

        /// Index state was replaced.
        const INDEX_CHANGED = 1 << 3;

        /// Active class moved between panels.
        const ACTIVE_CLASS_CHANGED = 1 << 4;

        /// Change subscribers were notified.
        const NOTIFIED = 1 << 5;

        // =====================================================================
        // GEOMETRY
        // =====================================================================

        /// Panel positions were recomputed.
        const LAYOUT_CHANGED = 1 << 6;

        // =====================================================================
        // GESTURE
        // =====================================================================

        /// A drag began.
        const GESTURE_STARTED = 1 << 7;

        /// A drag finished and was handed to the commit policy.
        const GESTURE_ENDED = 1 << 8;
    }
}

impl Default for EffectSet {
    fn default() -> Self {
        EffectSet::NONE
    }
}

impl EffectSet {
    /// Nothing observable happened.
    pub fn is_noop(&self) -> bool {
        self.is_empty()
    }

    /// The track transform changed.
    pub fn moved(&self) -> bool {
        self.contains(EffectSet::TRACK_MOVED)
    }

    /// A navigation was committed (goTo ran to completion).
    pub fn navigated(&self) -> bool {
        self.contains(EffectSet::INDEX_CHANGED | EffectSet::NOTIFIED)
    }

    /// Any transition toggle happened.
    pub fn has_transition_effects(&self) -> bool {
        self.intersects(EffectSet::TRANSITION_ENABLED | EffectSet::TRANSITION_DISABLED)
    }
}
