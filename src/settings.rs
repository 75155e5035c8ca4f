//! Invitation settings
//!
//! Embedded in the page as an inline JSON block:
//! `<script type="application/json" id="invite-config">{ ... }</script>`.
//! Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{SETTLE_EPSILON, SMOOTHING, TOUCH_THRESHOLD_PX};

/// Tunables for navigation, animation and music
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Motion ===
    /// Fraction of the remaining distance covered per frame (0.0 - 1.0]
    pub smoothing: f32,
    /// Distance at which the animation snaps onto its checkpoint
    pub settle_epsilon: f32,
    /// Finger travel in CSS px before a swipe counts
    pub touch_threshold_px: f32,

    // === Music ===
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Wait before retrying a rejected play request
    pub play_retry_delay_ms: u32,
    /// Try to start music as soon as the page loads
    pub autoplay: bool,
    /// Reload the page when the track ends
    pub reload_on_end: bool,

    // === Page ===
    /// Request fullscreen on the first touch or click
    pub fullscreen_on_interaction: bool,
    /// Nudge the page to hide mobile address bars
    pub hide_address_bar: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            smoothing: SMOOTHING,
            settle_epsilon: SETTLE_EPSILON,
            touch_threshold_px: TOUCH_THRESHOLD_PX,

            music_volume: 0.7,
            play_retry_delay_ms: 500,
            autoplay: true,
            reload_on_end: true,

            fullscreen_on_interaction: true,
            hide_address_bar: true,
        }
    }
}

impl Settings {
    /// Element id of the inline config block
    const CONFIG_ELEMENT_ID: &'static str = "invite-config";

    /// Parse settings from JSON, clamping values into their valid ranges
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Clamp every field into a usable range
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            self.smoothing = defaults.smoothing;
        }
        if !(self.settle_epsilon > 0.0) {
            self.settle_epsilon = defaults.settle_epsilon;
        }
        if !(self.touch_threshold_px > 0.0) {
            self.touch_threshold_px = defaults.touch_threshold_px;
        }
        self.music_volume = if self.music_volume.is_nan() {
            defaults.music_volume
        } else {
            self.music_volume.clamp(0.0, 1.0)
        };
        self
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::CONFIG_ELEMENT_ID);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed #{}: {}", Self::CONFIG_ELEMENT_ID, e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No #{} on native, using defaults", Self::CONFIG_ELEMENT_ID);
        Self::default()
    }
}
