//! One mounted page: lifecycle, scroll and reveal state behind a single teardown.
//!
//! The view layer creates a `PageSession` on mount, forwards webview
//! events into it, and calls [`PageSession::teardown`] on unmount. After
//! teardown every entry point is a silent no-op, so callbacks that were
//! already in flight cannot mutate a destroyed page.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::config::PageConfig;
use crate::error::PortfolioResult;
use crate::lifecycle::{LifecycleController, LifecycleOutcome, LoadingState};
use crate::reveal::{RevealAnimation, RevealRegistry, SectionVisibility};
use crate::scroll::{NavbarVariant, ScrollObserver, ScrollState};

/// Shared session handle for the view layer.
pub type SharedSession = Arc<PageSession>;

pub struct PageSession {
    config: PageConfig,
    lifecycle: LifecycleController,
    scroll: Mutex<ScrollObserver>,
    reveals: Mutex<RevealRegistry>,
    cancel: CancellationToken,
}

impl PageSession {
    /// Mount a page in the loading state.
    pub fn new(config: PageConfig) -> Self {
        let cancel = CancellationToken::new();
        let lifecycle = LifecycleController::new(config.lifecycle_timing(), cancel.child_token());
        let scroll = ScrollObserver::new(config.scroll_threshold);
        Self {
            config,
            lifecycle,
            scroll: Mutex::new(scroll),
            reveals: Mutex::new(RevealRegistry::new()),
            cancel,
        }
    }

    pub fn shared(config: PageConfig) -> SharedSession {
        Arc::new(Self::new(config))
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> &LifecycleController {
        &self.lifecycle
    }

    /// Run the preloader timer; see [`LifecycleController::run`].
    pub async fn run_lifecycle(&self) -> LifecycleOutcome {
        self.lifecycle.run().await
    }

    pub fn is_ready(&self) -> bool {
        self.lifecycle.loading() == LoadingState::Ready
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    fn is_live(&self) -> bool {
        self.is_ready() && !self.is_torn_down()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.lock().state()
    }

    pub fn navbar_variant(&self) -> NavbarVariant {
        self.scroll.lock().navbar_variant()
    }

    /// Viewport scroll notification. Returns the new state when it changed.
    ///
    /// Ignored while loading and after teardown.
    pub fn on_scroll(&self, offset: f64) -> Option<ScrollState> {
        if !self.is_live() {
            tracing::trace!(offset, "Scroll outside a live page");
            return None;
        }
        self.scroll.lock().observe(offset)
    }

    /// Register a reveal target. Allowed while loading so the page can be
    /// described before it mounts.
    pub fn register_reveal(&self, id: &str, animation: RevealAnimation) -> PortfolioResult<()> {
        self.reveals.lock().register(id, animation)
    }

    /// Register a target unless it already exists, returning its animation.
    pub fn ensure_reveal(&self, id: &str, animation: RevealAnimation) -> RevealAnimation {
        let mut reveals = self.reveals.lock();
        if let Some(existing) = reveals.animation(id) {
            return existing;
        }
        // Cannot collide: checked above under the same lock.
        let _ = reveals.register(id, animation);
        animation
    }

    /// Viewport intersection notification for a reveal target.
    ///
    /// Returns the animation to play on the first intersection only.
    pub fn on_intersect(&self, id: &str, is_intersecting: bool) -> Option<RevealAnimation> {
        if !self.is_live() {
            tracing::trace!(id, "Intersection outside a live page");
            return None;
        }
        self.reveals.lock().intersect(id, is_intersecting)
    }

    /// Entrance animation for `id` has finished.
    pub fn on_reveal_complete(&self, id: &str) -> bool {
        if self.is_torn_down() {
            return false;
        }
        self.reveals.lock().complete(id)
    }

    /// Let the entrance of a triggered target play out, then mark it seen.
    ///
    /// Waits the animation's `delay + duration`. Returns `false` if the page
    /// is torn down first, which leaves the target `Entering`.
    pub async fn play_reveal(&self, id: &str) -> bool {
        let animation = self.reveals.lock().animation(id);
        let Some(animation) = animation else {
            return false;
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                tracing::trace!(id, "Torn down during reveal");
                return false;
            }
            _ = tokio::time::sleep(animation.total()) => {}
        }

        self.on_reveal_complete(id)
    }

    pub fn visibility(&self, id: &str) -> SectionVisibility {
        self.reveals.lock().visibility(id).unwrap_or_default()
    }

    /// Ids still waiting for their first intersection.
    pub fn pending_reveals(&self) -> Vec<String> {
        self.reveals.lock().pending().map(str::to_string).collect()
    }

    /// Cancel every timer and detach every observer. Idempotent.
    pub fn teardown(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.cancel.cancel();
        self.scroll.lock().detach();
        self.reveals.lock().detach();
        tracing::info!("Page session torn down");
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_session() -> PageSession {
        let session = PageSession::new(PageConfig::default());
        session.lifecycle().mark_ready();
        session
    }

    #[test]
    fn scroll_ignored_while_loading() {
        let session = PageSession::new(PageConfig::default());
        assert_eq!(session.on_scroll(100.0), None);
        assert_eq!(session.scroll_state(), ScrollState::Top);
    }

    #[test]
    fn scroll_drives_navbar_once_ready() {
        let session = ready_session();
        assert_eq!(session.on_scroll(100.0), Some(ScrollState::Scrolled));
        assert_eq!(session.navbar_variant(), NavbarVariant::Scrolled);
        assert_eq!(session.on_scroll(0.0), Some(ScrollState::Top));
        assert_eq!(session.navbar_variant(), NavbarVariant::Default);
    }

    #[test]
    fn ensure_reveal_keeps_first_registration() {
        let config = PageConfig::default();
        let session = PageSession::new(config.clone());
        let first = session.ensure_reveal("contact", config.grow());
        let second = session.ensure_reveal("contact", config.rise());
        assert_eq!(first, second);
        assert_eq!(session.pending_reveals(), vec!["contact".to_string()]);
    }

    #[test]
    fn teardown_is_idempotent_and_freezes_state() {
        let session = ready_session();
        session.register_reveal("about", session.config().rise()).unwrap();
        session.teardown();
        session.teardown();

        assert!(session.is_torn_down());
        assert!(session.lifecycle().is_cancelled());
        assert_eq!(session.on_scroll(500.0), None);
        assert_eq!(session.on_intersect("about", true), None);
        assert!(!session.on_reveal_complete("about"));
        assert_eq!(session.visibility("about"), SectionVisibility::NotYetSeen);
    }

    #[tokio::test(start_paused = true)]
    async fn play_reveal_ignores_unknown_and_untriggered_targets() {
        let session = ready_session();
        session.register_reveal("skills", session.config().rise()).unwrap();
        assert!(!session.play_reveal("missing").await);
        assert!(!session.play_reveal("skills").await);
        assert_eq!(session.visibility("skills"), SectionVisibility::NotYetSeen);
    }
}
