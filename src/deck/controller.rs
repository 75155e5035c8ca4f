//! Deck controller
//!
//! Wires input, navigation and animation together. Platform code forwards raw
//! events here and runs [`Deck::frame`] once per display refresh while the deck
//! asks for frames.

use super::animator::{Animator, StepOutcome};
use super::checkpoint::Checkpoint;
use super::input::{InputNormalizer, Intent};
use super::navigator::{advance, nearest};
use super::presenter::{Frame, render};
use super::progress::ProgressState;
use crate::settings::Settings;

/// What the platform must do after feeding an event
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Start a new animation loop on the next display refresh
    Schedule,
    /// A loop is already live (or nothing changed)
    Idle,
}

type Hook = Box<dyn FnMut()>;

/// Scroll-driven checkpoint deck
pub struct Deck {
    progress: ProgressState,
    input: InputNormalizer,
    animator: Animator,
    /// Latched once navigation first leaves the opening checkpoint
    departed: bool,
    on_depart: Option<Hook>,
}

impl std::fmt::Debug for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deck")
            .field("progress", &self.progress)
            .field("animator", &self.animator)
            .field("departed", &self.departed)
            .finish_non_exhaustive()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl Deck {
    pub fn new(settings: &Settings) -> Self {
        Self {
            progress: ProgressState::new(),
            input: InputNormalizer::new(settings.touch_threshold_px),
            animator: Animator::new(settings.smoothing, settings.settle_epsilon),
            departed: false,
            on_depart: None,
        }
    }

    /// Subscribe to the first departure from the opening checkpoint.
    /// Fires at most once for the lifetime of the deck.
    pub fn on_first_departure(&mut self, hook: impl FnMut() + 'static) {
        self.on_depart = Some(Box::new(hook));
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Visual state at the current progress (used for the initial paint)
    pub fn render(&self) -> Frame {
        render(self.progress.current)
    }

    pub fn wheel(&mut self, delta_y: f64) -> FrameRequest {
        match self.input.wheel(delta_y) {
            Some(intent) => self.dispatch(intent),
            None => FrameRequest::Idle,
        }
    }

    pub fn touch_start(&mut self, y: Option<f32>) {
        if self.input.touch_start(y) {
            self.progress.last_triggered = None;
        }
    }

    pub fn touch_move(&mut self, y: Option<f32>) -> FrameRequest {
        let Some(swipe) = self.input.touch_move(y) else {
            return FrameRequest::Idle;
        };

        let next = advance(swipe.intent, self.progress.current);
        // Same destination as the previous swipe in this touch: keep accumulating
        if self.progress.last_triggered == Some(next) {
            return FrameRequest::Idle;
        }
        self.progress.last_triggered = Some(next);
        self.input.rearm(swipe.y);

        self.go_to(swipe.intent, next)
    }

    pub fn touch_end(&mut self) -> FrameRequest {
        let intent = self.input.touch_end();
        self.dispatch(intent)
    }

    /// Navigate one step in the direction of `intent`
    pub fn dispatch(&mut self, intent: Intent) -> FrameRequest {
        let next = advance(intent, self.progress.current);
        self.go_to(intent, next)
    }

    fn go_to(&mut self, intent: Intent, next: Checkpoint) -> FrameRequest {
        let from = nearest(self.progress.current);
        log::debug!(
            "{:?}: {} -> {} (progress {:.3})",
            intent,
            from.as_str(),
            next.as_str(),
            self.progress.current
        );

        if !self.departed && from == Checkpoint::FIRST && next != Checkpoint::FIRST {
            self.departed = true;
            log::info!("Left the opening checkpoint");
            if let Some(hook) = self.on_depart.as_mut() {
                hook();
            }
        }

        self.progress.set_target(next);
        if self.animator.start() {
            FrameRequest::Schedule
        } else {
            FrameRequest::Idle
        }
    }

    /// Advance the animation one display frame and render the result.
    /// Schedule another frame while the outcome is `Continue`.
    pub fn frame(&mut self) -> (Frame, StepOutcome) {
        let outcome = self.animator.step(&mut self.progress);
        (render(self.progress.current), outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::presenter::Section;
    use std::cell::Cell;
    use std::rc::Rc;

    fn settle(deck: &mut Deck) -> Frame {
        let mut frames = 0;
        loop {
            let (frame, outcome) = deck.frame();
            frames += 1;
            assert!(frames < 1000, "deck failed to settle");
            if outcome == StepOutcome::Settled {
                return frame;
            }
        }
    }

    fn counting_deck() -> (Deck, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0));
        let mut deck = Deck::default();
        let counter = fired.clone();
        deck.on_first_departure(move || counter.set(counter.get() + 1));
        (deck, fired)
    }

    #[test]
    fn test_forward_scroll_scenario() {
        let mut deck = Deck::default();
        assert_eq!(deck.wheel(100.0), FrameRequest::Schedule);
        assert_eq!(deck.progress().target(), Checkpoint::TextContent2);

        let frame = settle(&mut deck);
        assert_eq!(deck.progress().current, 1.0);
        assert_eq!(frame.get(Section::Text1).opacity, 0.0);
        assert_eq!(frame.get(Section::Text2).opacity, 1.0);
        assert!(frame.get(Section::Text2).active);
        assert!(!frame.get(Section::DateBackground).visible);
        assert!(!deck.is_animating());
    }

    #[test]
    fn test_single_loop_while_animating() {
        let mut deck = Deck::default();
        assert_eq!(deck.wheel(100.0), FrameRequest::Schedule);
        deck.frame();
        // Retarget mid-flight reuses the running loop
        assert_eq!(deck.wheel(100.0), FrameRequest::Idle);
        assert_eq!(deck.progress().target(), Checkpoint::TextContent2);
        settle(&mut deck);
        assert_eq!(deck.wheel(100.0), FrameRequest::Schedule);
        assert_eq!(deck.progress().target(), Checkpoint::QuoteSection);
    }

    #[test]
    fn test_departure_hook_fires_once() {
        let (mut deck, fired) = counting_deck();

        // Backward or settle at the opening checkpoint does not leave it
        let _ = deck.wheel(-50.0);
        let _ = deck.touch_end();
        settle(&mut deck);
        assert_eq!(fired.get(), 0);

        let _ = deck.wheel(50.0);
        assert_eq!(fired.get(), 1);
        settle(&mut deck);

        let _ = deck.wheel(-50.0);
        settle(&mut deck);
        let _ = deck.wheel(50.0);
        settle(&mut deck);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_short_touch_does_not_navigate() {
        let (mut deck, fired) = counting_deck();
        deck.touch_start(Some(500.0));
        assert_eq!(deck.touch_move(Some(470.0)), FrameRequest::Idle);
        assert_eq!(deck.progress().target(), Checkpoint::FIRST);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_touch_swipe_dedups_same_destination() {
        let mut deck = Deck::default();
        deck.touch_start(Some(500.0));
        assert_eq!(deck.touch_move(Some(440.0)), FrameRequest::Schedule);
        assert_eq!(deck.progress().target(), Checkpoint::TextContent2);
        assert_eq!(deck.progress().last_triggered, Some(Checkpoint::TextContent2));

        // Still nearest the opening checkpoint, so the same destination is dropped
        assert_eq!(deck.touch_move(Some(380.0)), FrameRequest::Idle);
        assert_eq!(deck.progress().target(), Checkpoint::TextContent2);

        // Once progress has moved past halfway the next swipe counts
        while deck.progress().current <= 0.5 {
            deck.frame();
        }
        let _ = deck.touch_move(Some(370.0));
        assert_eq!(deck.progress().target(), Checkpoint::QuoteSection);
    }

    #[test]
    fn test_touch_end_settles_to_nearest() {
        let mut deck = Deck::default();
        let _ = deck.wheel(1.0);
        while deck.progress().current < 0.6 {
            deck.frame();
        }
        // Retreat is requested, then release re-snaps to whatever is nearest
        deck.touch_start(Some(100.0));
        let _ = deck.touch_move(Some(200.0));
        assert_eq!(deck.progress().target(), Checkpoint::TextContent1);
        let _ = deck.touch_end();
        assert_eq!(deck.progress().target(), Checkpoint::TextContent2);
    }

    #[test]
    fn test_new_touch_resets_dedup() {
        let mut deck = Deck::default();
        deck.touch_start(Some(300.0));
        let _ = deck.touch_move(Some(200.0));
        assert!(deck.progress().last_triggered.is_some());
        deck.touch_start(Some(300.0));
        assert_eq!(deck.progress().last_triggered, None);
    }

    #[test]
    fn test_initial_render_matches_rest_state() {
        let deck = Deck::default();
        let frame = deck.render();
        assert_eq!(frame.get(Section::Text1).opacity, 1.0);
        assert!(frame.get(Section::DateBackground).visible);
    }
}
