//! Configuration from the page.
//!
//! The page may carry a JSON block:
//!
//! ```html
//! <script type="application/json" id="motionConfig">{"cursorDamping": 0.2}</script>
//! ```
//!
//! Missing keys keep their defaults. A missing, empty, malformed, or invalid
//! block falls back to the defaults entirely; the page must animate either way.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use motion::config::MotionConfig;

/// Id of the `<script>` element holding the configuration.
pub const CONFIG_ELEMENT_ID: &str = "motionConfig";

/// Resolve the configuration from the raw block text, if any.
#[must_use]
pub fn resolve(raw: Option<&str>) -> MotionConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return MotionConfig::default();
    };
    match MotionConfig::from_json(raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("#{CONFIG_ELEMENT_ID}: {err}; using defaults");
            MotionConfig::default()
        }
    }
}

/// Read the configuration block from `document`.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn load(document: &web_sys::Document) -> MotionConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    resolve(raw.as_deref())
}
