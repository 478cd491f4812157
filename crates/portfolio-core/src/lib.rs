//! Portfolio Page Core Library
//!
//! Behavioral core of the single-page portfolio: everything with state or
//! timing, kept free of any UI framework so it can be driven and tested on
//! its own.
//!
//! ## Overview
//!
//! ```text
//! PageSession
//! ├── LifecycleController  Loading ──2000ms──> Ready, preloader fade-out
//! ├── ScrollObserver       offset > 50 ⇒ Scrolled ⇒ "navbar scrolled"
//! └── RevealRegistry       per section: NotYetSeen → Entering → Seen
//!                          (StaggerGroup for the hero, HoverLift for cards)
//! ```
//!
//! The lifecycle gates the other two: scroll and intersection events are
//! ignored until the page is ready, and everything is ignored after
//! teardown.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{PageConfig, PageSession};
//!
//! let session = PageSession::shared(PageConfig::default());
//! session.register_reveal("about-header", session.config().header_rise())?;
//!
//! tokio::spawn({
//!     let session = session.clone();
//!     async move { session.run_lifecycle().await }
//! });
//!
//! // later, from the webview
//! session.on_scroll(120.0);
//! if session.on_intersect("about-header", true).is_some() {
//!     // Entering now; Seen once delay + duration have elapsed
//!     session.play_reveal("about-header").await;
//! }
//!
//! // on unmount
//! session.teardown();
//! ```

pub mod config;
pub mod content;
pub mod easing;
pub mod error;
pub mod hover;
pub mod lifecycle;
pub mod reveal;
pub mod scroll;
pub mod session;
pub mod stagger;

// Re-exports
pub use config::PageConfig;
pub use content::{Anchor, IconKind, OutboundLink, Span};
pub use easing::Easing;
pub use error::{PortfolioError, PortfolioResult};
pub use hover::HoverLift;
pub use lifecycle::{
    LifecycleController, LifecycleOutcome, LifecycleSnapshot, LifecycleTiming, LoadingState,
    PreloaderPhase,
};
pub use reveal::{RevealAnimation, RevealId, RevealMotion, RevealRegistry, SectionVisibility};
pub use scroll::{NavbarVariant, ScrollObserver, ScrollState};
pub use session::{PageSession, SharedSession};
pub use stagger::StaggerGroup;
