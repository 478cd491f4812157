//! Portfolio Page UI Components
//!
//! This crate provides the reusable Dioxus building blocks of the
//! portfolio page. They are stateless: motion and timing decisions come
//! from `portfolio-core`, content comes from the caller.
//!
//! ## Design Notes
//!
//! Dark glass aesthetic:
//! - **Void (#050507)**: Page background
//! - **Accent blue (#00d2ff)**: Links, logo dot, status badges
//! - **Accent violet (#7b2ff7)**: Gradient partner for headline text
//! - **Glass**: Translucent cards with a 1px light border

pub mod components;

pub use components::*;
