#![forbid(unsafe_code)]

//! Overlay configuration.
//!
//! The host may pass a partial JSON options object; anything it leaves out
//! keeps the default. `PIPS_OVERLAY_*` and `PIPS_GESTURE_*` environment
//! variables override on top.

use core::time::Duration;

use pips_core::config::{ConfigError, ConfigParse, EnvOverrides};
use pips_core::gesture::GestureConfig;
use serde::{Deserialize, Serialize};

use crate::error::WebError;

pub const ENV_SCROLL_SETTLE_MS: &str = "PIPS_OVERLAY_SCROLL_SETTLE_MS";
pub const ENV_TOUCH_GRACE_MS: &str = "PIPS_OVERLAY_TOUCH_GRACE_MS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// Gesture thresholds.
    pub gesture: GestureConfig,

    /// Quiet period after the last scroll sample before scrolling counts as
    /// settled.
    /// Default: 150ms
    pub scroll_settle_ms: u64,

    /// How long an ended touch session lingers before it is discarded.
    /// Default: 100ms
    pub touch_grace_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            scroll_settle_ms: 150,
            touch_grace_ms: 100,
        }
    }
}

impl OverlayConfig {
    #[must_use]
    pub fn scroll_settle(&self) -> Duration {
        Duration::from_millis(self.scroll_settle_ms)
    }

    #[must_use]
    pub fn touch_grace(&self) -> Duration {
        Duration::from_millis(self.touch_grace_ms)
    }

    /// Decode a (possibly partial) options object.
    pub fn from_json(json: &str) -> Result<Self, WebError> {
        serde_json::from_str(json).map_err(WebError::Options)
    }

    /// Apply environment overrides from the process environment.
    #[must_use]
    pub fn from_env() -> ConfigParse<Self> {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Apply `PIPS_GESTURE_*` and `PIPS_OVERLAY_*` overrides using a custom
    /// lookup.
    #[must_use]
    pub fn with_env<G>(mut self, mut get: G) -> ConfigParse<Self>
    where
        G: FnMut(&str) -> Option<String>,
    {
        let ConfigParse {
            config: gesture,
            mut errors,
        } = self.gesture.clone().with_env(&mut get);
        self.gesture = gesture;

        let mut env = EnvOverrides::new(&mut get);
        env.millis(
            ENV_SCROLL_SETTLE_MS,
            "scroll_settle_ms",
            &mut self.scroll_settle_ms,
        );
        env.millis(ENV_TOUCH_GRACE_MS, "touch_grace_ms", &mut self.touch_grace_ms);
        errors.extend(env.finish());

        ConfigParse {
            config: self,
            errors,
        }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = self.gesture.validate().err().unwrap_or_default();
        if self.scroll_settle_ms == 0 {
            errors.push(ConfigError::new("scroll_settle_ms", "0", "must be > 0"));
        }
        if self.touch_grace_ms == 0 {
            errors.push(ConfigError::new("touch_grace_ms", "0", "must be > 0"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// This config if valid, else the defaults, logging each violation.
    #[must_use]
    pub fn or_default_if_invalid(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(errors) => {
                for error in &errors {
                    tracing::warn!(%error, "invalid overlay config; using defaults");
                }
                Self::default()
            }
        }
    }
}
