use dioxus::prelude::*;
use portfolio_core::{PageSession, SharedSession};
use portfolio_ui::Preloader;

use crate::context::{get_page_config, teardown_page};
use crate::pages::Portfolio;
use crate::theme::{root_variables, GLOBAL_STYLES};

/// Root application component.
///
/// Owns the page session and gates the page on its lifecycle: only the
/// preloader while loading, then the portfolio while the preloader fades
/// out on top of it.
#[component]
pub fn App() -> Element {
    let session: SharedSession = use_hook(|| PageSession::shared(get_page_config()));
    let mut lifecycle = use_signal(|| session.lifecycle().snapshot());

    // Provide the session to all child components
    use_context_provider({
        let session = session.clone();
        move || session
    });

    // Start the preloader timer and mirror lifecycle changes into the view
    use_hook({
        let session = session.clone();
        move || {
            let mut updates = session.lifecycle().subscribe();
            spawn(async move {
                while updates.changed().await.is_ok() {
                    let snapshot = *updates.borrow_and_update();
                    lifecycle.set(snapshot);
                }
            });
            spawn(async move {
                let outcome = session.run_lifecycle().await;
                tracing::debug!(?outcome, "Lifecycle finished");
            });
        }
    });

    use_drop({
        let session = session.clone();
        move || teardown_page(&session)
    });

    let snapshot = lifecycle();
    let exit = session.lifecycle().timing().exit;
    let palette = root_variables();

    rsx! {
        style { {palette} {GLOBAL_STYLES} }
        div { class: "app-container",
            if snapshot.shows_preloader() {
                Preloader { phase: snapshot.preloader, exit: exit }
            }
            if snapshot.is_ready() {
                Portfolio {}
            }
        }
    }
}
