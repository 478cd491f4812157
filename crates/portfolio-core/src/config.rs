//! Page timing and motion configuration.
//!
//! Every field has a default matching the shipped page, so an empty JSON
//! object (or no file at all) yields the stock behavior. A config file only
//! needs to name the values it overrides:
//!
//! ```json
//! { "preloader_delay_ms": 500, "scroll_threshold": 80.0 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::lifecycle::LifecycleTiming;
use crate::reveal::{RevealAnimation, RevealMotion};

/// Tunable timings and distances for the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// How long the preloader stays up before the page is ready
    pub preloader_delay_ms: u64,
    /// Preloader fade-out duration
    pub preloader_exit_ms: u64,
    /// Vertical offset past which the navbar switches to its scrolled style
    pub scroll_threshold: f64,
    pub reveal_duration_ms: u64,
    /// Rise distance for cards and hero children
    pub reveal_rise_px: f32,
    /// Rise distance for section headers
    pub header_rise_px: f32,
    /// Starting scale for grow reveals
    pub reveal_scale_from: f32,
    /// Gap between staggered children start times
    pub stagger_step_ms: u64,
    /// Extra delay per project card, multiplied by the card's index
    pub card_delay_step_ms: u64,
    pub skill_hover_lift_px: f32,
    pub project_hover_lift_px: f32,
    pub navbar_enter_delay_ms: u64,
    pub navbar_enter_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            preloader_delay_ms: 2000,
            preloader_exit_ms: 800,
            scroll_threshold: 50.0,
            reveal_duration_ms: 600,
            reveal_rise_px: 30.0,
            header_rise_px: 20.0,
            reveal_scale_from: 0.9,
            stagger_step_ms: 100,
            card_delay_step_ms: 100,
            skill_hover_lift_px: 5.0,
            project_hover_lift_px: 10.0,
            navbar_enter_delay_ms: 200,
            navbar_enter_ms: 500,
        }
    }
}

impl PageConfig {
    /// Load a config file and validate it.
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: PageConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded page config");
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No page config found, using defaults");
            Ok(Self::default())
        }
    }

    /// Reject values the page cannot render sensibly.
    pub fn validate(&self) -> PortfolioResult<()> {
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(PortfolioError::InvalidConfig(format!(
                "scroll_threshold must be a non-negative number, got {}",
                self.scroll_threshold
            )));
        }
        if self.reveal_duration_ms == 0 {
            return Err(PortfolioError::InvalidConfig(
                "reveal_duration_ms must be greater than zero".to_string(),
            ));
        }
        if self.stagger_step_ms == 0 {
            return Err(PortfolioError::InvalidConfig(
                "stagger_step_ms must be greater than zero".to_string(),
            ));
        }
        if !(self.reveal_scale_from > 0.0 && self.reveal_scale_from <= 1.0) {
            return Err(PortfolioError::InvalidConfig(format!(
                "reveal_scale_from must be in (0, 1], got {}",
                self.reveal_scale_from
            )));
        }
        let distances = [
            ("reveal_rise_px", self.reveal_rise_px),
            ("header_rise_px", self.header_rise_px),
            ("skill_hover_lift_px", self.skill_hover_lift_px),
            ("project_hover_lift_px", self.project_hover_lift_px),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(PortfolioError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn lifecycle_timing(&self) -> LifecycleTiming {
        LifecycleTiming {
            delay: Duration::from_millis(self.preloader_delay_ms),
            exit: Duration::from_millis(self.preloader_exit_ms),
        }
    }

    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_step_ms)
    }

    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_duration_ms)
    }

    /// Fade + rise used by cards and hero children.
    pub fn rise(&self) -> RevealAnimation {
        RevealAnimation::new(
            RevealMotion::Rise {
                from_px: self.reveal_rise_px,
            },
            self.reveal_duration(),
        )
    }

    /// Shorter fade + rise used by section headers.
    pub fn header_rise(&self) -> RevealAnimation {
        RevealAnimation::new(
            RevealMotion::Rise {
                from_px: self.header_rise_px,
            },
            self.reveal_duration(),
        )
    }

    /// Fade + grow used by the contact heading.
    pub fn grow(&self) -> RevealAnimation {
        RevealAnimation::new(
            RevealMotion::Grow {
                from_scale: self.reveal_scale_from,
            },
            self.reveal_duration(),
        )
    }

    /// Rise for the project card at `index`, delayed by its position.
    pub fn card_rise(&self, index: usize) -> RevealAnimation {
        let step = Duration::from_millis(self.card_delay_step_ms);
        self.rise().with_delay(step * index as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page() {
        let config = PageConfig::default();
        assert_eq!(config.preloader_delay_ms, 2000);
        assert_eq!(config.preloader_exit_ms, 800);
        assert_eq!(config.scroll_threshold, 50.0);
        assert_eq!(config.stagger_step(), Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_object_is_default() {
        let config: PageConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn partial_override() {
        let config: PageConfig =
            serde_json::from_str(r#"{ "preloader_delay_ms": 500 }"#).unwrap();
        assert_eq!(config.preloader_delay_ms, 500);
        assert_eq!(config.preloader_exit_ms, 800);
    }

    #[test]
    fn rejects_negative_threshold() {
        let config = PageConfig {
            scroll_threshold: -1.0,
            ..PageConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PortfolioError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_zero_scale() {
        let config = PageConfig {
            reveal_scale_from: 0.0,
            ..PageConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_stagger_step() {
        let config = PageConfig {
            stagger_step_ms: 0,
            ..PageConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PortfolioError::InvalidConfig(msg)) if msg.contains("stagger_step_ms")
        ));
    }

    #[test]
    fn card_delays_step_by_index() {
        let config = PageConfig::default();
        assert_eq!(config.card_rise(0).delay, Duration::ZERO);
        assert_eq!(config.card_rise(3).delay, Duration::from_millis(300));
    }
}
