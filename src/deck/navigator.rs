//! Checkpoint navigation
//!
//! Turns a navigation intent and the live progress into the next checkpoint.

use super::checkpoint::Checkpoint;
use super::input::Intent;
use crate::consts::MAX_PROGRESS;

/// Checkpoint closest to `progress`
///
/// Scans in ascending order and only replaces the best match on a strictly
/// smaller distance, so an exact tie resolves to the lower index.
pub fn nearest(progress: f32) -> Checkpoint {
    let progress = clamp_progress(progress);
    let mut best = Checkpoint::FIRST;
    for cp in Checkpoint::ALL {
        if (cp.progress() - progress).abs() < (best.progress() - progress).abs() {
            best = cp;
        }
    }
    best
}

/// Destination checkpoint for `intent`, starting from the checkpoint nearest `progress`
pub fn advance(intent: Intent, progress: f32) -> Checkpoint {
    let from = nearest(progress);
    match intent {
        Intent::Forward => from.next(),
        Intent::Backward => from.prev(),
        Intent::Settle => from,
    }
}

/// Keep drifted progress inside the checkpoint range
fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, MAX_PROGRESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_advance_clamps_at_ends() {
        assert_eq!(advance(Intent::Forward, 12.0), Checkpoint::GiftsSection);
        assert_eq!(advance(Intent::Backward, 0.0), Checkpoint::TextContent1);
    }

    #[test]
    fn test_nearest_tie_prefers_lower_index() {
        assert_eq!(nearest(0.5), Checkpoint::TextContent1);
        assert_eq!(nearest(6.5), Checkpoint::ResepsiSection);
        assert_eq!(nearest(0.51), Checkpoint::TextContent2);
    }

    #[test]
    fn test_advance_from_mid_flight() {
        // Nearest to 2.7 is the bride section, so forward lands on the groom section
        assert_eq!(advance(Intent::Forward, 2.7), Checkpoint::GroomSection);
        assert_eq!(advance(Intent::Backward, 2.7), Checkpoint::QuoteSection);
        assert_eq!(advance(Intent::Settle, 2.7), Checkpoint::BrideSection);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(nearest(-3.0), Checkpoint::FIRST);
        assert_eq!(nearest(40.0), Checkpoint::LAST);
        assert_eq!(advance(Intent::Forward, 99.0), Checkpoint::LAST);
        assert_eq!(advance(Intent::Backward, -1.0), Checkpoint::FIRST);
        assert_eq!(nearest(f32::NAN), Checkpoint::FIRST);
    }

    proptest! {
        #[test]
        fn prop_advance_moves_at_most_one_step(progress in -2.0f32..14.0) {
            let from = nearest(progress).index() as i64;
            for intent in [Intent::Forward, Intent::Backward, Intent::Settle] {
                let to = advance(intent, progress).index() as i64;
                prop_assert!((to - from).abs() <= 1);
            }
        }

        #[test]
        fn prop_nearest_is_within_half_a_step(progress in 0.0f32..=12.0) {
            prop_assert!((nearest(progress).progress() - progress).abs() <= 0.5);
        }
    }
}
