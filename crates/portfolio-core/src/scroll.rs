//! Scroll observer and the navbar variant derived from it.

/// Whether the viewport has scrolled past the navbar threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    #[default]
    Top,
    Scrolled,
}

impl ScrollState {
    /// Recompute the state from a raw vertical offset.
    ///
    /// Strictly greater than the threshold counts as scrolled. Non-finite
    /// offsets read as zero; negative ones (overscroll bounce) are `Top`.
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        let offset = if offset.is_finite() { offset } else { 0.0 };
        if offset > threshold {
            ScrollState::Scrolled
        } else {
            ScrollState::Top
        }
    }

    pub fn navbar_variant(&self) -> NavbarVariant {
        match self {
            ScrollState::Top => NavbarVariant::Default,
            ScrollState::Scrolled => NavbarVariant::Scrolled,
        }
    }
}

/// Visual style of the sticky navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarVariant {
    /// Transparent, resting over the hero
    #[default]
    Default,
    /// Condensed with a frosted backdrop
    Scrolled,
}

impl NavbarVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            NavbarVariant::Default => "navbar",
            NavbarVariant::Scrolled => "navbar scrolled",
        }
    }
}

/// Tracks `ScrollState` from viewport scroll notifications.
#[derive(Debug, Clone)]
pub struct ScrollObserver {
    threshold: f64,
    state: ScrollState,
    attached: bool,
}

impl ScrollObserver {
    /// New observer, attached and at `Top`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: ScrollState::Top,
            attached: true,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn navbar_variant(&self) -> NavbarVariant {
        self.state.navbar_variant()
    }

    /// Feed a scroll notification.
    ///
    /// Returns the new state only when it changed. Detached observers
    /// ignore notifications.
    pub fn observe(&mut self, offset: f64) -> Option<ScrollState> {
        if !self.attached {
            tracing::trace!(offset, "Ignoring scroll after detach");
            return None;
        }
        let next = ScrollState::from_offset(offset, self.threshold);
        if next == self.state {
            return None;
        }
        tracing::debug!(offset, state = ?next, "Scroll state changed");
        self.state = next;
        Some(next)
    }

    /// Stop reacting to notifications. Idempotent.
    pub fn detach(&mut self) {
        self.attached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundaries() {
        assert_eq!(ScrollState::from_offset(0.0, 50.0), ScrollState::Top);
        assert_eq!(ScrollState::from_offset(50.0, 50.0), ScrollState::Top);
        assert_eq!(ScrollState::from_offset(51.0, 50.0), ScrollState::Scrolled);
        assert_eq!(ScrollState::from_offset(10000.0, 50.0), ScrollState::Scrolled);
    }

    #[test]
    fn odd_offsets_are_top() {
        assert_eq!(ScrollState::from_offset(-20.0, 50.0), ScrollState::Top);
        assert_eq!(ScrollState::from_offset(f64::NAN, 50.0), ScrollState::Top);
    }

    #[test]
    fn observe_reports_changes_only() {
        let mut observer = ScrollObserver::new(50.0);
        assert_eq!(observer.observe(10.0), None);
        assert_eq!(observer.observe(100.0), Some(ScrollState::Scrolled));
        assert_eq!(observer.observe(200.0), None);
        assert_eq!(observer.observe(0.0), Some(ScrollState::Top));
    }

    #[test]
    fn detached_observer_is_frozen() {
        let mut observer = ScrollObserver::new(50.0);
        observer.detach();
        assert_eq!(observer.observe(500.0), None);
        assert_eq!(observer.state(), ScrollState::Top);
    }

    #[test]
    fn navbar_variant_classes() {
        assert_eq!(NavbarVariant::Default.class(), "navbar");
        assert_eq!(NavbarVariant::Scrolled.class(), "navbar scrolled");
        assert_eq!(
            ScrollState::Scrolled.navbar_variant(),
            NavbarVariant::Scrolled
        );
    }
}
