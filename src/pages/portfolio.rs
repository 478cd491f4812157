//! Portfolio page - everything shown once the preloader is done.
//!
//! Mounted only after the page is ready, so its scroll listener and
//! intersection observer never run while loading.

use dioxus::prelude::*;

use crate::components::sections::{About, Contact, Hero, Projects, Skills};
use crate::components::{use_navbar_variant, use_reveal_observer, Navbar};
use crate::context::RevealBoard;

#[component]
pub fn Portfolio() -> Element {
    use_context_provider(|| Signal::new(RevealBoard::new()));

    let variant = use_navbar_variant();
    use_reveal_observer();

    rsx! {
        div { class: "noise-overlay" }

        Navbar { variant: variant() }

        main {
            Hero {}
            About {}
            Skills {}
            Projects {}
            Contact {}
        }
    }
}
