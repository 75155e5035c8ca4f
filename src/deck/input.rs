//! Input normalization
//!
//! Wheel and touch-drag events collapse into at most one discrete [`Intent`]
//! per qualifying gesture. The page never scrolls natively; every step through
//! the deck comes from here.

use crate::consts::TOUCH_THRESHOLD_PX;

/// Discrete navigation signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move to the next checkpoint
    Forward,
    /// Move to the previous checkpoint
    Backward,
    /// Re-snap to the nearest checkpoint without moving
    Settle,
}

/// A touch drag that crossed the threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    pub intent: Intent,
    /// Finger position when the threshold was crossed (re-arm point)
    pub y: f32,
}

/// One finger-down-to-finger-up interaction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSession {
    pub start_y: f32,
    pub current_y: f32,
    pub active: bool,
}

/// Converts raw wheel/touch input into [`Intent`]s
#[derive(Debug, Clone)]
pub struct InputNormalizer {
    session: GestureSession,
    threshold: f32,
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new(TOUCH_THRESHOLD_PX)
    }
}

impl InputNormalizer {
    pub fn new(threshold: f32) -> Self {
        Self {
            session: GestureSession::default(),
            threshold,
        }
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Wheel event: positive delta scrolls forward, zero is ignored
    pub fn wheel(&self, delta_y: f64) -> Option<Intent> {
        if delta_y > 0.0 {
            Some(Intent::Forward)
        } else if delta_y < 0.0 {
            Some(Intent::Backward)
        } else {
            None
        }
    }

    /// Touch start at `y` (first touch point; `None` for an empty touch list)
    pub fn touch_start(&mut self, y: Option<f32>) -> bool {
        let Some(y) = y else { return false };
        self.session = GestureSession {
            start_y: y,
            current_y: y,
            active: true,
        };
        true
    }

    /// Touch move to `y`; yields a swipe once travel reaches the threshold
    ///
    /// The session keeps its start point until [`rearm`](Self::rearm) is called,
    /// so short moves accumulate toward the threshold.
    pub fn touch_move(&mut self, y: Option<f32>) -> Option<Swipe> {
        if !self.session.active {
            return None;
        }
        let y = y?;
        self.session.current_y = y;

        // Finger moving up reads as scrolling down the page
        let delta = self.session.start_y - y;
        if delta.abs() < self.threshold {
            return None;
        }

        let intent = if delta > 0.0 {
            Intent::Forward
        } else {
            Intent::Backward
        };
        Some(Swipe { intent, y })
    }

    /// Restart travel measurement from `y` after an accepted swipe
    pub fn rearm(&mut self, y: f32) {
        self.session.start_y = y;
    }

    /// Touch end: clears the session and always asks for a settle
    pub fn touch_end(&mut self) -> Intent {
        self.session = GestureSession::default();
        Intent::Settle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_direction() {
        let input = InputNormalizer::default();
        assert_eq!(input.wheel(120.0), Some(Intent::Forward));
        assert_eq!(input.wheel(-3.0), Some(Intent::Backward));
        assert_eq!(input.wheel(0.0), None);
    }

    #[test]
    fn test_touch_below_threshold_is_silent() {
        let mut input = InputNormalizer::default();
        assert!(input.touch_start(Some(400.0)));
        assert_eq!(input.touch_move(Some(370.0)), None);
        assert_eq!(input.session().current_y, 370.0);
        assert_eq!(input.session().start_y, 400.0);
    }

    #[test]
    fn test_touch_accumulates_from_start() {
        let mut input = InputNormalizer::default();
        input.touch_start(Some(400.0));
        assert_eq!(input.touch_move(Some(380.0)), None);
        assert_eq!(input.touch_move(Some(360.0)), None);
        let swipe = input.touch_move(Some(350.0));
        assert_eq!(
            swipe,
            Some(Swipe {
                intent: Intent::Forward,
                y: 350.0
            })
        );
    }

    #[test]
    fn test_touch_swipe_down_goes_backward() {
        let mut input = InputNormalizer::default();
        input.touch_start(Some(100.0));
        let swipe = input.touch_move(Some(175.0)).unwrap();
        assert_eq!(swipe.intent, Intent::Backward);
    }

    #[test]
    fn test_rearm_requires_fresh_travel() {
        let mut input = InputNormalizer::default();
        input.touch_start(Some(400.0));
        let swipe = input.touch_move(Some(340.0)).unwrap();
        input.rearm(swipe.y);
        assert_eq!(input.touch_move(Some(320.0)), None);
        assert!(input.touch_move(Some(290.0)).is_some());
    }

    #[test]
    fn test_malformed_touch_is_ignored() {
        let mut input = InputNormalizer::default();
        assert!(!input.touch_start(None));
        assert!(!input.session().active);
        // No session yet
        assert_eq!(input.touch_move(Some(0.0)), None);

        input.touch_start(Some(200.0));
        assert_eq!(input.touch_move(None), None);
    }

    #[test]
    fn test_touch_end_settles_and_clears() {
        let mut input = InputNormalizer::default();
        input.touch_start(Some(200.0));
        assert_eq!(input.touch_end(), Intent::Settle);
        assert!(!input.session().active);
        assert_eq!(input.touch_move(Some(0.0)), None);
    }
}
