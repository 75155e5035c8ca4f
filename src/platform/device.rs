//! Device detection
//!
//! Android browsers need extra media attributes before background audio will
//! start reliably from a gesture. Older engines only expose prefixed
//! fullscreen methods, and mobile address bars come back on downward scrolls.

/// Media attributes applied to the `<audio>` element on Android
pub const ANDROID_MEDIA_ATTRIBUTES: [(&str, &str); 3] = [
    ("preload", "auto"),
    ("playsinline", ""),
    ("webkit-playsinline", ""),
];

/// Fullscreen request methods on the root element, most standard first
pub const FULLSCREEN_METHODS: [&str; 4] = [
    "requestFullscreen",
    "webkitRequestFullscreen",
    "mozRequestFullScreen",
    "msRequestFullscreen",
];

/// Tracks the page's vertical scroll offset between `scroll` events
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollWatch {
    last_top: f64,
}

impl ScrollWatch {
    /// Record a new offset; true when the page moved down since the last one
    pub fn moved_down(&mut self, top: f64) -> bool {
        let down = top > self.last_top;
        self.last_top = top.max(0.0);
        down
    }
}

/// True for Android user agents (case-insensitive)
pub fn is_android(user_agent: &str) -> bool {
    user_agent.to_ascii_lowercase().contains("android")
}

/// User agent of the current browser (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn user_agent() -> Option<String> {
    web_sys::window()?.navigator().user_agent().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_detection() {
        assert!(is_android(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/124.0 Mobile Safari/537.36"
        ));
        assert!(is_android("ANDROID"));
        assert!(!is_android(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148"
        ));
        assert!(!is_android(""));
    }

    #[test]
    fn test_scroll_watch_reports_downward_moves() {
        let mut watch = ScrollWatch::default();
        assert!(watch.moved_down(40.0));
        assert!(!watch.moved_down(40.0));
        assert!(!watch.moved_down(10.0));
        assert!(watch.moved_down(11.0));

        // Overscroll above the top counts as the top
        assert!(!watch.moved_down(-30.0));
        assert!(watch.moved_down(1.0));
    }

}
