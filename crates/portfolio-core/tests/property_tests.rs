//! Property-based tests for the scroll, reveal and stagger state machines
//!
//! Uses proptest to verify the laws the page relies on.

use std::time::Duration;

use portfolio_core::{
    PageConfig, RevealRegistry, ScrollObserver, ScrollState, SectionVisibility, StaggerGroup,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

const TARGETS: [&str; 3] = ["about-header", "skills-header", "project-0"];

/// Events the webview can deliver to the reveal registry
#[derive(Debug, Clone)]
enum RevealEvent {
    Intersect(usize, bool),
    Complete(usize),
}

fn reveal_events_strategy(max: usize) -> impl Strategy<Value = Vec<RevealEvent>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..TARGETS.len(), any::<bool>())
                .prop_map(|(i, hit)| RevealEvent::Intersect(i, hit)),
            1 => (0..TARGETS.len()).prop_map(RevealEvent::Complete),
        ],
        0..max,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Scrolled exactly when the offset is past the threshold
    #[test]
    fn scrolled_iff_past_threshold(offset in -1_000.0f64..20_000.0) {
        let state = ScrollState::from_offset(offset, 50.0);
        prop_assert_eq!(state == ScrollState::Scrolled, offset > 50.0);
    }

    /// The observer always reflects the most recent offset, whatever came before
    #[test]
    fn observer_tracks_latest_offset(offsets in prop::collection::vec(-200.0f64..500.0, 1..60)) {
        let mut observer = ScrollObserver::new(50.0);
        for offset in &offsets {
            let before = observer.state();
            let changed = observer.observe(*offset);
            prop_assert_eq!(changed.is_some(), observer.state() != before);
        }
        let last = *offsets.last().unwrap();
        prop_assert_eq!(observer.state(), ScrollState::from_offset(last, 50.0));
    }

    /// Visibility never moves backwards and each target triggers at most once
    #[test]
    fn reveal_is_monotonic(events in reveal_events_strategy(120)) {
        let config = PageConfig::default();
        let mut registry = RevealRegistry::new();
        for id in TARGETS {
            registry.register(id, config.rise()).unwrap();
        }

        let mut triggers = [0usize; TARGETS.len()];
        let mut last = [SectionVisibility::NotYetSeen; TARGETS.len()];

        for event in events {
            match event {
                RevealEvent::Intersect(i, hit) => {
                    if registry.intersect(TARGETS[i], hit).is_some() {
                        triggers[i] += 1;
                    }
                }
                RevealEvent::Complete(i) => {
                    registry.complete(TARGETS[i]);
                }
            }
            for (i, id) in TARGETS.iter().enumerate() {
                let now = registry.visibility(id).unwrap();
                prop_assert!(now >= last[i], "{} regressed from {:?} to {:?}", id, last[i], now);
                last[i] = now;
            }
        }

        for count in triggers {
            prop_assert!(count <= 1);
        }
    }

    /// Each staggered child starts at least one step after the previous one
    #[test]
    fn stagger_children_spaced(len in 1usize..12, step_ms in 1u64..500, base_ms in 0u64..1_000) {
        let config = PageConfig::default();
        let child = config.rise().with_delay(Duration::from_millis(base_ms));
        let step = Duration::from_millis(step_ms);
        let group = StaggerGroup::new(child, step, len);

        let schedule = group.schedule();
        prop_assert_eq!(schedule.len(), len);
        prop_assert_eq!(schedule[0], Duration::from_millis(base_ms));
        for pair in schedule.windows(2) {
            prop_assert!(pair[1] >= pair[0] + step);
        }
    }
}
