//! Pointer hover lift for cards.
//!
//! Purely a function of whether the pointer is over the element right now.
//! Nothing is remembered once the pointer leaves.

use std::time::Duration;

use crate::easing::Easing;

const LIFT_TRANSITION: Duration = Duration::from_millis(250);

/// Upward shift applied while hovered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverLift {
    pub lift_px: f32,
}

impl HoverLift {
    pub fn new(lift_px: f32) -> Self {
        Self { lift_px }
    }

    /// Vertical offset for the current pointer state.
    pub fn offset(&self, hovered: bool) -> f32 {
        if hovered {
            -self.lift_px
        } else {
            0.0
        }
    }

    /// Inline style for the current pointer state.
    pub fn style(&self, hovered: bool) -> String {
        format!(
            "transform: translateY({}px); transition: transform {}s {};",
            self.offset(hovered),
            LIFT_TRANSITION.as_secs_f32(),
            Easing::EaseInOut.css()
        )
    }
}
