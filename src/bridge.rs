//! Webview scripts feeding viewport signals into the page session.
//!
//! Each script is run with `document::eval` and reports back through
//! `dioxus.send`. Listeners are parked on `window` so a later run, or
//! [`DETACH_LISTENERS`], can find and remove them.

/// Reports `window.scrollY` on every scroll event, plus once on attach.
pub const SCROLL_LISTENER: &str = r#"
if (window.__portfolioScroll) {
    window.removeEventListener('scroll', window.__portfolioScroll);
}
window.__portfolioScroll = () => dioxus.send(window.scrollY);
window.addEventListener('scroll', window.__portfolioScroll, { passive: true });
dioxus.send(window.scrollY);
"#;

/// Reports the `data-reveal` id of each element the first time it becomes
/// at least partially visible, then stops observing that element.
pub const REVEAL_OBSERVER: &str = r#"
if (window.__portfolioReveal) {
    window.__portfolioReveal.disconnect();
}
const observer = new IntersectionObserver((entries) => {
    entries.forEach((entry) => {
        if (entry.isIntersecting) {
            observer.unobserve(entry.target);
            dioxus.send(entry.target.dataset.reveal);
        }
    });
}, { threshold: 0 });
window.__portfolioReveal = observer;
document.querySelectorAll('[data-reveal]').forEach((el) => observer.observe(el));
"#;

/// Removes the scroll listener and disconnects the intersection observer.
pub const DETACH_LISTENERS: &str = r#"
if (window.__portfolioScroll) {
    window.removeEventListener('scroll', window.__portfolioScroll);
    window.__portfolioScroll = null;
}
if (window.__portfolioReveal) {
    window.__portfolioReveal.disconnect();
    window.__portfolioReveal = null;
}
"#;
