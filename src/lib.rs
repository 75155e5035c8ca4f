//! Wedding Scroll - a scroll-driven wedding invitation
//!
//! Core modules:
//! - `deck`: Checkpoint navigation, eased progress and section presentation (pure)
//! - `audio`: Background music playback state
//! - `platform`: Browser quirks and DOM rendering
//! - `settings`: Data-driven tuning loaded from the page

pub mod audio;
pub mod deck;
pub mod platform;
pub mod settings;

pub use settings::Settings;

/// Presentation constants
pub mod consts {
    /// Highest checkpoint index (13 checkpoints, 0..=12)
    pub const MAX_PROGRESS: f32 = 12.0;

    /// Fraction of the remaining gap covered per animation frame
    pub const SMOOTHING: f32 = 0.15;
    /// Gap below which the animator snaps to its target and stops
    pub const SETTLE_EPSILON: f32 = 0.01;

    /// Vertical finger travel (CSS px) before a swipe counts as a step
    pub const TOUCH_THRESHOLD_PX: f32 = 50.0;

    /// Incoming section becomes visible/active past this local progress
    pub const SHOW_THRESHOLD: f32 = 0.1;
    /// Outgoing section becomes hidden/inactive past this local progress
    pub const HIDE_THRESHOLD: f32 = 0.3;

    /// Resting opacity of the decorative date background
    pub const DATE_BG_OPACITY: f32 = 0.4;
    /// Vertical travel of the opening text blocks during their cross-fade (px)
    pub const TEXT_SHIFT_PX: f32 = 20.0;

    /// Number of story timeline items revealed one by one
    pub const STORY_ITEM_COUNT: usize = 4;
    /// Progress at which the first story item appears
    pub const STORY_FIRST_ITEM_AT: f32 = 7.0;
}
