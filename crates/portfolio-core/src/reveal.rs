//! One-shot viewport reveal animations.
//!
//! Each animated section or card is registered under a unique id and moves
//! through a monotonic state machine:
//!
//! ```text
//! NotYetSeen ──[enters viewport]──> Entering ──[animation done]──> Seen
//! ```
//!
//! Only the first intersection produces an animation to play. Once a target
//! has left `NotYetSeen` it is no longer observed, so scrolling away and back
//! never replays its entrance.

use std::time::Duration;

use crate::easing::Easing;
use crate::error::{PortfolioError, PortfolioResult};

/// Identifier of a reveal target, matching the element's `data-reveal` attribute.
pub type RevealId = String;

/// Reveal progress of a single section or card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SectionVisibility {
    #[default]
    NotYetSeen,
    Entering,
    Seen,
}

impl SectionVisibility {
    /// Whether the element should be drawn in its final, visible pose.
    pub fn is_revealed(&self) -> bool {
        !matches!(self, SectionVisibility::NotYetSeen)
    }
}

/// What an element does while it fades in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealMotion {
    /// Rise from `from_px` below its resting place
    Rise { from_px: f32 },
    /// Grow from `from_scale` to full size
    Grow { from_scale: f32 },
}

impl RevealMotion {
    fn hidden_transform(&self) -> String {
        match self {
            RevealMotion::Rise { from_px } => format!("translateY({}px)", from_px),
            RevealMotion::Grow { from_scale } => format!("scale({})", from_scale),
        }
    }
}

/// Declarative enter transition handed to the webview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealAnimation {
    pub motion: RevealMotion,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl RevealAnimation {
    pub fn new(motion: RevealMotion, duration: Duration) -> Self {
        Self {
            motion,
            duration,
            delay: Duration::ZERO,
            easing: Easing::REVEAL,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Time from trigger until the element rests in its final pose.
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Inline style before the element has been seen.
    pub fn hidden_style(&self) -> String {
        format!(
            "opacity: 0; transform: {};",
            self.motion.hidden_transform()
        )
    }

    /// Inline style once triggered; the transition plays the entrance.
    pub fn visible_style(&self) -> String {
        let duration = self.duration.as_secs_f32();
        let delay = self.delay.as_secs_f32();
        let easing = self.easing.css();
        format!(
            "opacity: 1; transform: none; transition: opacity {d}s {e} {w}s, transform {d}s {e} {w}s;",
            d = duration,
            e = easing,
            w = delay
        )
    }

    pub fn style_for(&self, visibility: SectionVisibility) -> String {
        if visibility.is_revealed() {
            self.visible_style()
        } else {
            self.hidden_style()
        }
    }
}

#[derive(Debug, Clone)]
struct RevealTarget {
    id: RevealId,
    animation: RevealAnimation,
    visibility: SectionVisibility,
}

/// All reveal targets on the page and their visibility.
#[derive(Debug, Clone)]
pub struct RevealRegistry {
    targets: Vec<RevealTarget>,
    attached: bool,
}

impl Default for RevealRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            attached: true,
        }
    }

    /// Register a target in the `NotYetSeen` state.
    pub fn register(
        &mut self,
        id: impl Into<RevealId>,
        animation: RevealAnimation,
    ) -> PortfolioResult<()> {
        let id = id.into();
        if self.find(&id).is_some() {
            return Err(PortfolioError::DuplicateReveal(id));
        }
        self.targets.push(RevealTarget {
            id,
            animation,
            visibility: SectionVisibility::NotYetSeen,
        });
        Ok(())
    }

    /// Viewport intersection notification for `id`.
    ///
    /// On the first intersection the target becomes `Entering` and its
    /// animation is returned for the view to play. Every other call returns
    /// `None`: not intersecting, already triggered, unknown id, or detached.
    pub fn intersect(&mut self, id: &str, is_intersecting: bool) -> Option<RevealAnimation> {
        if !self.attached {
            tracing::trace!(id, "Ignoring intersection after detach");
            return None;
        }
        if !is_intersecting {
            return None;
        }
        let Some(target) = self.find_mut(id) else {
            tracing::trace!(id, "Ignoring intersection for unknown reveal target");
            return None;
        };
        if target.visibility != SectionVisibility::NotYetSeen {
            return None;
        }
        target.visibility = SectionVisibility::Entering;
        tracing::debug!(id, "Reveal triggered");
        Some(target.animation)
    }

    /// Entrance animation finished: `Entering` → `Seen`.
    pub fn complete(&mut self, id: &str) -> bool {
        if !self.attached {
            return false;
        }
        match self.find_mut(id) {
            Some(target) if target.visibility == SectionVisibility::Entering => {
                target.visibility = SectionVisibility::Seen;
                tracing::trace!(id, "Reveal complete");
                true
            }
            _ => false,
        }
    }

    pub fn visibility(&self, id: &str) -> Option<SectionVisibility> {
        self.find(id).map(|target| target.visibility)
    }

    pub fn animation(&self, id: &str) -> Option<RevealAnimation> {
        self.find(id).map(|target| target.animation)
    }

    /// Whether the target still wants intersection notifications.
    pub fn is_observing(&self, id: &str) -> bool {
        self.attached
            && self
                .find(id)
                .is_some_and(|target| target.visibility == SectionVisibility::NotYetSeen)
    }

    /// Ids still waiting for their first intersection, in registration order.
    pub fn pending(&self) -> impl Iterator<Item = &str> + '_ {
        self.targets
            .iter()
            .filter(|target| target.visibility == SectionVisibility::NotYetSeen)
            .map(|target| target.id.as_str())
    }

    /// Stop all observation. Idempotent.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    fn find(&self, id: &str) -> Option<&RevealTarget> {
        self.targets.iter().find(|target| target.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut RevealTarget> {
        self.targets.iter_mut().find(|target| target.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rise() -> RevealAnimation {
        RevealAnimation::new(RevealMotion::Rise { from_px: 30.0 }, Duration::from_millis(600))
    }

    #[test]
    fn first_intersection_triggers_once() {
        let mut registry = RevealRegistry::new();
        registry.register("about", rise()).unwrap();

        assert_eq!(registry.intersect("about", false), None);
        assert_eq!(registry.intersect("about", true), Some(rise()));
        assert_eq!(registry.visibility("about"), Some(SectionVisibility::Entering));
        assert_eq!(registry.intersect("about", true), None);

        assert!(registry.complete("about"));
        assert_eq!(registry.visibility("about"), Some(SectionVisibility::Seen));
        assert_eq!(registry.intersect("about", true), None);
        assert!(!registry.complete("about"));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut registry = RevealRegistry::new();
        registry.register("hero", rise()).unwrap();
        let err = registry.register("hero", rise()).unwrap_err();
        assert!(matches!(err, PortfolioError::DuplicateReveal(id) if id == "hero"));
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut registry = RevealRegistry::new();
        assert_eq!(registry.intersect("missing", true), None);
        assert!(!registry.complete("missing"));
    }

    #[test]
    fn pending_skips_triggered_targets() {
        let mut registry = RevealRegistry::new();
        registry.register("a", rise()).unwrap();
        registry.register("b", rise()).unwrap();
        registry.intersect("a", true);
        assert_eq!(registry.pending().collect::<Vec<_>>(), vec!["b"]);
        assert!(!registry.is_observing("a"));
        assert!(registry.is_observing("b"));
    }

    #[test]
    fn complete_before_trigger_is_rejected() {
        let mut registry = RevealRegistry::new();
        registry.register("a", rise()).unwrap();
        assert!(!registry.complete("a"));
        assert_eq!(registry.visibility("a"), Some(SectionVisibility::NotYetSeen));
    }

    #[test]
    fn styles_follow_motion() {
        let animation = rise().with_delay(Duration::from_millis(100));
        assert_eq!(animation.hidden_style(), "opacity: 0; transform: translateY(30px);");
        assert_eq!(
            animation.visible_style(),
            "opacity: 1; transform: none; transition: opacity 0.6s cubic-bezier(0.22, 1, 0.36, 1) 0.1s, transform 0.6s cubic-bezier(0.22, 1, 0.36, 1) 0.1s;"
        );

        let grow = RevealAnimation::new(RevealMotion::Grow { from_scale: 0.9 }, Duration::from_millis(600));
        assert_eq!(grow.hidden_style(), "opacity: 0; transform: scale(0.9);");
        assert_eq!(grow.total(), Duration::from_millis(600));
    }

    #[test]
    fn visibility_is_ordered() {
        assert!(SectionVisibility::NotYetSeen < SectionVisibility::Entering);
        assert!(SectionVisibility::Entering < SectionVisibility::Seen);
        assert!(!SectionVisibility::NotYetSeen.is_revealed());
        assert!(SectionVisibility::Entering.is_revealed());
    }
}
