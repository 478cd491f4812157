//! Page session context for the portfolio.
//!
//! Provides the `PageSession` and the reveal board to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| session.clone());
//!
//! // In child components
//! let session = use_session();
//! ```

use std::collections::HashMap;

use dioxus::prelude::*;
use portfolio_core::{PageConfig, PageSession, SectionVisibility, SharedSession};

use crate::bridge;

/// Visibility of every revealed element, keyed by reveal id.
///
/// Mirrors the session's reveal registry so components re-render when a
/// target changes state. Ids absent from the map are `NotYetSeen`.
pub type RevealBoard = HashMap<String, SectionVisibility>;

/// Get the page config for this process.
pub fn get_page_config() -> PageConfig {
    crate::page_config()
}

/// Hook to access the page session from context.
pub fn use_session() -> SharedSession {
    use_context::<SharedSession>()
}

/// Hook to access the reveal board from context.
pub fn use_reveal_board() -> Signal<RevealBoard> {
    use_context::<Signal<RevealBoard>>()
}

/// Unmount the page: cancel every timer, detach every observer and
/// remove the webview listeners registered by the page.
pub fn teardown_page(session: &PageSession) {
    session.teardown();
    let _ = document::eval(bridge::DETACH_LISTENERS);
}
