//! Live progress through the deck

use super::checkpoint::Checkpoint;

/// Animated position plus the checkpoint it is heading for
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    /// Live position in [0, 12], integral only at rest
    pub current: f32,
    /// Checkpoint being animated toward (always integral)
    target: Checkpoint,
    /// Destination of the last accepted swipe in the current touch
    pub last_triggered: Option<Checkpoint>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressState {
    pub fn new() -> Self {
        Self {
            current: Checkpoint::FIRST.progress(),
            target: Checkpoint::FIRST,
            last_triggered: None,
        }
    }

    pub fn target(&self) -> Checkpoint {
        self.target
    }

    pub fn set_target(&mut self, target: Checkpoint) {
        self.target = target;
    }

    /// Signed distance left to travel
    pub fn gap(&self) -> f32 {
        self.target.progress() - self.current
    }

    /// True when resting exactly on the target
    pub fn at_rest(&self) -> bool {
        self.current == self.target.progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_rest_on_first_checkpoint() {
        let state = ProgressState::new();
        assert_eq!(state.current, 0.0);
        assert_eq!(state.target(), Checkpoint::FIRST);
        assert!(state.at_rest());
        assert_eq!(state.last_triggered, None);
    }

    #[test]
    fn test_gap_tracks_target() {
        let mut state = ProgressState::new();
        state.set_target(Checkpoint::QuoteSection);
        assert_eq!(state.gap(), 2.0);
        assert!(!state.at_rest());
    }
}
