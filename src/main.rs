//! Wedding Scroll entry point
//!
//! Wires browser events into the deck and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_invite {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Event, TouchEvent, WheelEvent};

    use wedding_scroll::Settings;
    use wedding_scroll::audio::MusicPlayer;
    use wedding_scroll::deck::{Deck, FrameRequest, StepOutcome};
    use wedding_scroll::platform::{DomRenderer, Listen, listen, page};

    /// Invitation instance holding all state
    struct Invite {
        deck: Deck,
        renderer: DomRenderer,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Wedding Scroll starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // The overlays must exist before they can be resolved
        if document.ready_state() == "loading" {
            listen(
                &document,
                "DOMContentLoaded",
                Listen {
                    blocking: false,
                    once: true,
                },
                |_event| start(),
            );
        } else {
            start();
        }
    }

    fn start() {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load();

        page::lock_scroll(&document);
        if settings.hide_address_bar {
            page::hide_address_bar(&window);
            page::keep_address_bar_hidden(&window);
        }
        if settings.fullscreen_on_interaction {
            page::fullscreen_on_first_interaction(&document);
        }

        let mut deck = Deck::new(&settings);
        if let Some(music) = MusicPlayer::attach(&document, &settings) {
            if settings.autoplay {
                music.autoplay(&document);
            }
            deck.on_first_departure(move || music.play_on_scroll());
        }

        let renderer = DomRenderer::find(&document);
        renderer.apply(&deck.render());

        let invite = Rc::new(RefCell::new(Invite { deck, renderer }));
        setup_input_handlers(&window, &document, invite);

        log::info!("Wedding Scroll running!");
    }

    fn setup_input_handlers(window: &web_sys::Window, document: &Document, invite: Rc<RefCell<Invite>>) {
        let blocking = Listen {
            blocking: true,
            once: false,
        };

        // Wheel - one checkpoint per event
        {
            let invite = invite.clone();
            listen(window, "wheel", blocking, move |event: Event| {
                event.prevent_default();
                let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                let request = invite.borrow_mut().deck.wheel(wheel.delta_y());
                schedule(&invite, request);
            });
        }

        // Touch start
        {
            let invite = invite.clone();
            listen(document, "touchstart", blocking, move |event: Event| {
                let y = first_touch_y(&event);
                invite.borrow_mut().deck.touch_start(y);
            });
        }

        // Touch move
        {
            let invite = invite.clone();
            listen(document, "touchmove", blocking, move |event: Event| {
                event.prevent_default();
                let y = first_touch_y(&event);
                let request = invite.borrow_mut().deck.touch_move(y);
                schedule(&invite, request);
            });
        }

        // Touch end - settle on the nearest checkpoint
        {
            listen(document, "touchend", blocking, move |_event: Event| {
                let request = invite.borrow_mut().deck.touch_end();
                schedule(&invite, request);
            });
        }
    }

    /// Vertical position of the first touch point, `None` for an empty touch list
    fn first_touch_y(event: &Event) -> Option<f32> {
        let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
        Some(touch.client_y() as f32)
    }

    fn schedule(invite: &Rc<RefCell<Invite>>, request: FrameRequest) {
        if request == FrameRequest::Schedule {
            request_animation_frame(invite.clone());
        }
    }

    fn request_animation_frame(invite: Rc<RefCell<Invite>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            animation_frame(invite);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn animation_frame(invite: Rc<RefCell<Invite>>) {
        let outcome = {
            let mut i = invite.borrow_mut();
            let (frame, outcome) = i.deck.frame();
            i.renderer.apply(&frame);
            outcome
        };

        if outcome == StepOutcome::Continue {
            request_animation_frame(invite);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_invite::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Wedding Scroll (native) starting...");
    log::info!("Native mode has no page to drive - build for wasm32 and serve with `trunk serve`");

    println!("\nReplaying a scripted visit...");
    replay_visit();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scroll through the whole deck with wheel and touch input, printing each resting frame
#[cfg(not(target_arch = "wasm32"))]
fn replay_visit() {
    use std::cell::Cell;
    use std::rc::Rc;
    use wedding_scroll::Settings;
    use wedding_scroll::deck::{Deck, Section, StepOutcome};

    let mut deck = Deck::new(&Settings::load());
    let music_cues = Rc::new(Cell::new(0));
    {
        let music_cues = music_cues.clone();
        deck.on_first_departure(move || music_cues.set(music_cues.get() + 1));
    }

    let settle = |deck: &mut Deck| -> u32 {
        let mut frames = 0;
        while deck.frame().1 == StepOutcome::Continue {
            frames += 1;
        }
        frames
    };

    // Wheel down through the first half
    for _ in 0..6 {
        let _ = deck.wheel(100.0);
        let frames = settle(&mut deck);
        let frame = deck.render();
        let shown: Vec<_> = Section::ALL
            .iter()
            .filter(|s| frame.get(**s).active)
            .map(Section::id)
            .collect();
        println!(
            "  checkpoint {:>2} after {:>2} frames, active: {:?}",
            deck.progress().target().index(),
            frames,
            shown
        );
    }

    // Swipe up through the story and on to the gifts
    for _ in 0..6 {
        deck.touch_start(Some(600.0));
        let _ = deck.touch_move(Some(520.0));
        settle(&mut deck);
        // Lifting the finger at rest re-snaps in place
        let _ = deck.touch_end();
        settle(&mut deck);
        let frame = deck.render();
        let items = frame.story_items().iter().filter(|i| i.visible).count();
        println!(
            "  checkpoint {:>2} ({}), story items shown: {}",
            deck.progress().target().index(),
            deck.progress().target().as_str(),
            items
        );
    }

    assert_eq!(deck.progress().current, 12.0, "Visit should end on the gifts");
    assert_eq!(music_cues.get(), 1, "Music cue should fire exactly once");
    println!("✓ Scripted visit reached the last checkpoint!");
}
