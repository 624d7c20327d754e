//! Tunable timings and factors.
//!
//! Every field defaults to the value in [`crate::consts`]. A page may
//! override any subset through an inline JSON block; keys are camelCase and
//! missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::*;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed motion config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid motion config field {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionConfig {
    pub cursor_damping: f64,
    pub card_damping: f64,
    pub card_yaw_range_deg: f64,
    pub card_pitch_range_deg: f64,
    pub card_rest_pitch_deg: f64,
    pub card_rest_yaw_deg: f64,
    pub magnetic_strength: f64,
    pub magnetic_release_ms: u32,
    pub reveal_delay_unit_ms: f64,
    pub reveal_stagger_ms: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: f64,
    pub loader_hold_ms: u32,
    pub hero_settle_ms: u32,
    pub counter_chain_ms: u32,
    pub counter_duration_ms: f64,
    pub form_revert_ms: u32,
    pub header_scrolled_px: f64,
    pub anchor_offset_px: f64,
    pub active_nav_lead_px: f64,
    /// `log` level name for the browser console (`off`, `error` .. `trace`).
    pub log_level: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            cursor_damping: CURSOR_RING_DAMPING,
            card_damping: CARD_DAMPING,
            card_yaw_range_deg: CARD_YAW_RANGE_DEG,
            card_pitch_range_deg: CARD_PITCH_RANGE_DEG,
            card_rest_pitch_deg: CARD_REST_PITCH_DEG,
            card_rest_yaw_deg: CARD_REST_YAW_DEG,
            magnetic_strength: MAGNETIC_STRENGTH,
            magnetic_release_ms: MAGNETIC_RELEASE_MS,
            reveal_delay_unit_ms: REVEAL_DELAY_UNIT_MS,
            reveal_stagger_ms: REVEAL_STAGGER_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_bottom_margin_px: REVEAL_BOTTOM_MARGIN_PX,
            loader_hold_ms: LOADER_HOLD_MS,
            hero_settle_ms: HERO_SETTLE_MS,
            counter_chain_ms: COUNTER_CHAIN_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            form_revert_ms: FORM_REVERT_MS,
            header_scrolled_px: HEADER_SCROLLED_PX,
            anchor_offset_px: ANCHOR_OFFSET_PX,
            active_nav_lead_px: ACTIVE_NAV_LEAD_PX,
            log_level: "info".to_owned(),
        }
    }
}

impl MotionConfig {
    /// Parse and validate a JSON override block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or wrongly typed
    /// fields, and [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check ranges that would otherwise produce frozen or runaway motion.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_interval("cursorDamping", self.cursor_damping)?;
        unit_interval("cardDamping", self.card_damping)?;
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::Invalid {
                field: "revealThreshold",
                reason: "must be within 0..=1",
            });
        }
        if !(self.counter_duration_ms.is_finite() && self.counter_duration_ms > 0.0) {
            return Err(ConfigError::Invalid {
                field: "counterDurationMs",
                reason: "must be positive",
            });
        }
        if !(self.reveal_bottom_margin_px.is_finite() && self.reveal_bottom_margin_px >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "revealBottomMarginPx",
                reason: "must be a non-negative inset",
            });
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid {
                field: "logLevel",
                reason: "unknown level",
            });
        }
        Ok(())
    }

    /// The configured console filter, `Info` if it does not parse.
    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// The console level to log at; `None` when logging is `off`.
    #[must_use]
    pub fn level(&self) -> Option<log::Level> {
        self.level_filter().to_level()
    }

    /// Root margin for the reveal intersection watcher.
    #[must_use]
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin_px)
    }
}

fn unit_interval(field: &'static str, v: f64) -> Result<(), ConfigError> {
    if v.is_finite() && v > 0.0 && v <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: "must be within (0, 1]" })
    }
}
