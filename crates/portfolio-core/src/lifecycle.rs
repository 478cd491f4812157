//! Page lifecycle: preloader timer and the loading → ready swap.
//!
//! ```text
//! LoadingState:    Loading ──[delay elapsed]──> Ready            (terminal)
//! PreloaderPhase:  Visible ──[ready]──> Exiting ──[exit fade]──> Detached
//! ```
//!
//! The page content mounts as soon as the state is `Ready`; the preloader
//! stays in the render tree until its exit fade has finished. Both
//! transitions happen at most once. A cancelled controller never mutates
//! its state again.

use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Whether the page is still showing the preloader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Loading,
    Ready,
}

/// Presence of the preloader in the render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreloaderPhase {
    /// Fully opaque, covering the page
    #[default]
    Visible,
    /// Playing its fade-out; still rendered
    Exiting,
    /// Removed from the render tree
    Detached,
}

impl PreloaderPhase {
    /// Returns the CSS class for this phase
    pub fn class(&self) -> &'static str {
        match self {
            PreloaderPhase::Visible => "preloader",
            PreloaderPhase::Exiting => "preloader exiting",
            PreloaderPhase::Detached => "preloader detached",
        }
    }
}

/// Point-in-time view of the lifecycle, published to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LifecycleSnapshot {
    pub loading: LoadingState,
    pub preloader: PreloaderPhase,
}

impl LifecycleSnapshot {
    pub fn is_ready(&self) -> bool {
        self.loading == LoadingState::Ready
    }

    /// Whether the preloader element is still part of the render tree.
    pub fn shows_preloader(&self) -> bool {
        self.preloader != PreloaderPhase::Detached
    }
}

/// Delays driving the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleTiming {
    /// Time from mount until the page becomes ready
    pub delay: Duration,
    /// Preloader fade-out duration
    pub exit: Duration,
}

impl Default for LifecycleTiming {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(2000),
            exit: Duration::from_millis(800),
        }
    }
}

/// How a call to [`LifecycleController::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleOutcome {
    /// Ready and preloader detached
    Completed,
    /// Torn down before finishing
    Cancelled,
    /// The page was already ready; nothing was scheduled
    AlreadyReady,
}

/// Owns the loading state and the one-shot preloader timer.
pub struct LifecycleController {
    timing: LifecycleTiming,
    state: watch::Sender<LifecycleSnapshot>,
    cancel: CancellationToken,
}

impl LifecycleController {
    pub fn new(timing: LifecycleTiming, cancel: CancellationToken) -> Self {
        let (state, _) = watch::channel(LifecycleSnapshot::default());
        Self {
            timing,
            state,
            cancel,
        }
    }

    pub fn timing(&self) -> LifecycleTiming {
        self.timing
    }

    /// Receive every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<LifecycleSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> LifecycleSnapshot {
        *self.state.borrow()
    }

    pub fn loading(&self) -> LoadingState {
        self.state.borrow().loading
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancel the pending timer. Idempotent.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Drive the timer to completion.
    ///
    /// Waits for the preloader delay, flips to `Ready`, then waits for the
    /// exit fade and detaches the preloader. Returns early, without touching
    /// state, if the controller is cancelled while waiting.
    pub async fn run(&self) -> LifecycleOutcome {
        if self.loading() == LoadingState::Ready {
            return LifecycleOutcome::AlreadyReady;
        }

        tracing::debug!(delay_ms = self.timing.delay.as_millis() as u64, "Preloader timer started");
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                tracing::trace!("Preloader timer cancelled before firing");
                return LifecycleOutcome::Cancelled;
            }
            _ = tokio::time::sleep(self.timing.delay) => {}
        }

        if !self.mark_ready() {
            return if self.is_cancelled() {
                LifecycleOutcome::Cancelled
            } else {
                LifecycleOutcome::AlreadyReady
            };
        }

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                tracing::trace!("Torn down during preloader exit");
                return LifecycleOutcome::Cancelled;
            }
            _ = tokio::time::sleep(self.timing.exit) => {}
        }

        self.detach_preloader();
        LifecycleOutcome::Completed
    }

    /// The timer callback: `Loading` → `Ready`, preloader starts exiting.
    ///
    /// Returns `true` only for the call that performed the transition. A
    /// call after cancellation is a silent no-op.
    pub fn mark_ready(&self) -> bool {
        if self.is_cancelled() {
            tracing::trace!("Ignoring ready callback after teardown");
            return false;
        }
        let changed = self.state.send_if_modified(|snapshot| {
            if snapshot.loading == LoadingState::Ready {
                return false;
            }
            snapshot.loading = LoadingState::Ready;
            snapshot.preloader = PreloaderPhase::Exiting;
            true
        });
        if changed {
            tracing::info!("Page ready, preloader exiting");
        }
        changed
    }

    /// The exit-fade callback: `Exiting` → `Detached`.
    pub fn detach_preloader(&self) -> bool {
        if self.is_cancelled() {
            tracing::trace!("Ignoring preloader detach after teardown");
            return false;
        }
        let changed = self.state.send_if_modified(|snapshot| {
            if snapshot.preloader != PreloaderPhase::Exiting {
                return false;
            }
            snapshot.preloader = PreloaderPhase::Detached;
            true
        });
        if changed {
            tracing::debug!("Preloader detached");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> LifecycleController {
        LifecycleController::new(LifecycleTiming::default(), CancellationToken::new())
    }

    #[test]
    fn starts_loading_with_visible_preloader() {
        let ctl = controller();
        let snapshot = ctl.snapshot();
        assert_eq!(snapshot.loading, LoadingState::Loading);
        assert_eq!(snapshot.preloader, PreloaderPhase::Visible);
        assert!(snapshot.shows_preloader());
        assert!(!snapshot.is_ready());
    }

    #[test]
    fn mark_ready_transitions_once() {
        let ctl = controller();
        assert!(ctl.mark_ready());
        assert!(!ctl.mark_ready());
        assert_eq!(ctl.loading(), LoadingState::Ready);
        assert_eq!(ctl.snapshot().preloader, PreloaderPhase::Exiting);
    }

    #[test]
    fn detach_requires_exiting() {
        let ctl = controller();
        assert!(!ctl.detach_preloader());
        ctl.mark_ready();
        assert!(ctl.detach_preloader());
        assert!(!ctl.detach_preloader());
        assert!(!ctl.snapshot().shows_preloader());
    }

    #[test]
    fn cancelled_controller_ignores_callbacks() {
        let ctl = controller();
        ctl.cancel();
        assert!(!ctl.mark_ready());
        assert_eq!(ctl.snapshot(), LifecycleSnapshot::default());
    }

    #[test]
    fn preloader_phase_classes() {
        assert_eq!(PreloaderPhase::Visible.class(), "preloader");
        assert_eq!(PreloaderPhase::Exiting.class(), "preloader exiting");
        assert_eq!(PreloaderPhase::Detached.class(), "preloader detached");
    }

    #[tokio::test(start_paused = true)]
    async fn run_after_ready_is_noop() {
        let ctl = controller();
        ctl.mark_ready();
        assert_eq!(ctl.run().await, LifecycleOutcome::AlreadyReady);
    }
}
