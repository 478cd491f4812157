//! Body text with emphasized runs.

use dioxus::prelude::*;
use portfolio_core::Span;

#[component]
pub fn RichText(spans: &'static [Span], #[props(default)] class: Option<String>) -> Element {
    let class = class.unwrap_or_default();

    rsx! {
        p { class: "{class}",
            for span in spans.iter() {
                {match span {
                    Span::Plain(text) => rsx! { "{text}" },
                    Span::Strong(text) => rsx! { strong { "{text}" } },
                }}
            }
        }
    }
}
