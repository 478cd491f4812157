//! Easing curves handed to the webview's transition engine.

/// Timing function for a CSS transition or animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Curve used by every reveal: fast start, long soft landing.
    pub const REVEAL: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);

    /// Returns the CSS timing-function value
    pub fn css(&self) -> String {
        match self {
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_css_values() {
        assert_eq!(Easing::EaseInOut.css(), "ease-in-out");
        assert_eq!(Easing::REVEAL.css(), "cubic-bezier(0.22, 1, 0.36, 1)");
    }
}
