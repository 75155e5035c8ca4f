//! Transition animator
//!
//! Exponential smoothing toward the target, one step per display frame. The
//! step depends only on the live gap, so retargeting mid-flight needs no
//! bookkeeping: the new target simply becomes the attractor.

use super::progress::ProgressState;
use crate::consts::{SETTLE_EPSILON, SMOOTHING};

/// Result of one animation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still travelling, schedule another frame
    Continue,
    /// Snapped onto the target, loop stops
    Settled,
}

/// Drives `ProgressState::current` toward its target
#[derive(Debug, Clone)]
pub struct Animator {
    smoothing: f32,
    epsilon: f32,
    running: bool,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(SMOOTHING, SETTLE_EPSILON)
    }
}

impl Animator {
    pub fn new(smoothing: f32, epsilon: f32) -> Self {
        Self {
            smoothing: smoothing.clamp(f32::EPSILON, 1.0),
            epsilon: epsilon.max(0.0),
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Mark the loop live. Returns true only when a new loop must be scheduled;
    /// a request while already running is a no-op.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Advance one frame
    pub fn step(&mut self, state: &mut ProgressState) -> StepOutcome {
        let gap = state.gap();
        if gap.abs() > self.epsilon {
            state.current += gap * self.smoothing;
            self.running = true;
            StepOutcome::Continue
        } else {
            state.current = state.target().progress();
            self.running = false;
            StepOutcome::Settled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::checkpoint::Checkpoint;
    use proptest::prelude::*;

    fn run_to_rest(animator: &mut Animator, state: &mut ProgressState) -> usize {
        let mut frames = 0;
        while animator.step(state) == StepOutcome::Continue {
            frames += 1;
            assert!(frames < 1000, "animator failed to converge");
        }
        frames
    }

    #[test]
    fn test_single_step_covers_smoothing_fraction() {
        let mut animator = Animator::default();
        let mut state = ProgressState::new();
        state.set_target(Checkpoint::TextContent2);
        assert_eq!(animator.step(&mut state), StepOutcome::Continue);
        assert!((state.current - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_converges_and_snaps_exactly() {
        let mut animator = Animator::default();
        let mut state = ProgressState::new();
        state.set_target(Checkpoint::GiftsSection);
        run_to_rest(&mut animator, &mut state);
        assert_eq!(state.current, 12.0);
        assert!(state.at_rest());
        assert!(!animator.is_running());
    }

    #[test]
    fn test_start_is_idempotent_while_running() {
        let mut animator = Animator::default();
        assert!(animator.start());
        assert!(!animator.start());

        let mut state = ProgressState::new();
        // Already at rest: the first step settles and frees the loop
        assert_eq!(animator.step(&mut state), StepOutcome::Settled);
        assert!(animator.start());
    }

    #[test]
    fn test_retarget_mid_flight() {
        let mut animator = Animator::default();
        let mut state = ProgressState::new();
        state.set_target(Checkpoint::QuoteSection);
        for _ in 0..5 {
            animator.step(&mut state);
        }
        let midway = state.current;
        assert!(midway > 0.0 && midway < 2.0);

        state.set_target(Checkpoint::TextContent1);
        animator.step(&mut state);
        assert!(state.current < midway);
        run_to_rest(&mut animator, &mut state);
        assert_eq!(state.current, 0.0);
    }

    proptest! {
        #[test]
        fn prop_gap_shrinks_monotonically(start in 0.0f32..=12.0, target in 0usize..13) {
            let mut animator = Animator::default();
            let mut state = ProgressState::new();
            state.current = start;
            state.set_target(Checkpoint::from_index(target).unwrap());

            let mut last_gap = state.gap().abs();
            while animator.step(&mut state) == StepOutcome::Continue {
                let gap = state.gap().abs();
                prop_assert!(gap < last_gap);
                last_gap = gap;
            }
            prop_assert!(last_gap <= SETTLE_EPSILON);
            prop_assert_eq!(state.current, target as f32);
        }
    }
}
