//! Background music player (WASM)
//!
//! Wraps the page's `<audio id="backgroundMusic">` element and the
//! `#musicToggle` button. Browsers may reject `play()` outside a user gesture,
//! so every request gets one delayed retry and autoplay falls back to the first
//! interaction.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlAudioElement, HtmlElement};

use super::{PlayFailure, PlaybackState, ToggleAction, ToggleIcon, needs_load};
use crate::platform::device;
use crate::platform::{Listen, listen};
use crate::settings::Settings;

const AUDIO_ID: &str = "backgroundMusic";
const TOGGLE_ID: &str = "musicToggle";

/// Background music bound to the page's audio element
pub struct MusicPlayer {
    audio: HtmlAudioElement,
    play_icon: Option<HtmlElement>,
    pause_icon: Option<HtmlElement>,
    state: Cell<PlaybackState>,
    volume: f64,
    retry_delay_ms: u32,
}

impl std::fmt::Debug for MusicPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MusicPlayer")
            .field("state", &self.state.get())
            .field("volume", &self.volume)
            .finish_non_exhaustive()
    }
}

impl MusicPlayer {
    /// Bind to the audio element, or `None` if the page has no music
    pub fn attach(document: &Document, settings: &Settings) -> Option<Rc<Self>> {
        let Some(audio) = document
            .get_element_by_id(AUDIO_ID)
            .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok())
        else {
            log::warn!("No #{} element - music disabled", AUDIO_ID);
            return None;
        };

        let android = device::user_agent().is_some_and(|ua| device::is_android(&ua));
        if android {
            for (name, value) in device::ANDROID_MEDIA_ATTRIBUTES {
                let _ = audio.set_attribute(name, value);
            }
        }

        let player = Rc::new(Self {
            audio,
            play_icon: icon(document, ".play-icon"),
            pause_icon: icon(document, ".pause-icon"),
            state: Cell::new(PlaybackState::new()),
            volume: f64::from(settings.music_volume),
            retry_delay_ms: settings.play_retry_delay_ms,
        });

        player.audio.load();
        player.wire_events(document, settings.reload_on_end);
        player.sync_icons();
        log::info!("Music player ready (android: {})", android);
        Some(player)
    }

    pub fn is_playing(&self) -> bool {
        self.state.get().is_playing()
    }

    /// Load and start playback, retrying once after a rejection.
    /// Does nothing while an earlier request is still in flight.
    pub fn play(self: &Rc<Self>) {
        if !self.update(PlaybackState::request) {
            log::debug!("Play already requested or playing");
            return;
        }
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            this.play_with_retry().await;
        });
    }

    pub fn pause(&self) {
        if let Err(e) = self.audio.pause() {
            log::warn!("Pause failed: {:?}", e);
        }
        self.update(PlaybackState::paused);
        self.sync_icons();
        log::info!("Music paused");
    }

    pub fn toggle(self: &Rc<Self>) {
        match self.state.get().toggle() {
            Some(ToggleAction::Play) => self.play(),
            Some(ToggleAction::Pause) => self.pause(),
            None => log::debug!("Toggle ignored, play request in flight"),
        }
    }

    /// Start music when the visitor first scrolls away from the opening
    pub fn play_on_scroll(self: &Rc<Self>) {
        let state = self.state.get();
        if state.is_playing() || state.is_pending() {
            return;
        }
        let ready_state = self.audio.ready_state();
        if needs_load(ready_state) {
            log::info!("Audio not ready (readyState {}), loading first", ready_state);
            self.audio.load();
            let this = self.clone();
            listen(
                &self.audio,
                "canplay",
                Listen {
                    blocking: false,
                    once: true,
                },
                move |_event| this.play(),
            );
        } else {
            self.play();
        }
    }

    /// Try to start immediately; if the browser blocks autoplay, start on the
    /// first click, touch or wheel instead
    pub fn autoplay(self: &Rc<Self>, document: &Document) {
        if !self.update(PlaybackState::request) {
            return;
        }
        let this = self.clone();
        let document = document.clone();
        wasm_bindgen_futures::spawn_local(async move {
            this.audio.set_volume(this.volume);
            match this.try_play().await {
                Ok(()) => {
                    this.update(PlaybackState::started);
                    this.sync_icons();
                    log::info!("Music started automatically");
                }
                Err(e) => {
                    log::info!("Autoplay prevented, waiting for interaction: {:?}", e);
                    this.update(PlaybackState::blocked);
                    this.play_on_first_interaction(&document);
                }
            }
        });
    }

    fn play_on_first_interaction(self: &Rc<Self>, document: &Document) {
        let armed = Rc::new(Cell::new(true));
        for kind in ["click", "touchstart", "wheel"] {
            let this = self.clone();
            let armed = armed.clone();
            listen(
                document,
                kind,
                Listen {
                    blocking: false,
                    once: true,
                },
                move |_event| {
                    if armed.replace(false) {
                        this.play();
                    }
                },
            );
        }
    }

    async fn play_with_retry(&self) {
        loop {
            self.audio.load();
            self.audio.set_volume(self.volume);
            match self.try_play().await {
                Ok(()) => {
                    self.update(PlaybackState::started);
                    log::info!("Music playing");
                    break;
                }
                Err(e) => {
                    log::warn!(
                        "Play rejected: {:?} (readyState {}, networkState {})",
                        e,
                        self.audio.ready_state(),
                        self.audio.network_state()
                    );
                    if self.update(PlaybackState::failed) == PlayFailure::GiveUp {
                        break;
                    }
                    sleep_ms(self.retry_delay_ms).await;
                }
            }
        }
        self.sync_icons();
    }

    async fn try_play(&self) -> Result<(), JsValue> {
        let promise = self.audio.play()?;
        JsFuture::from(promise).await.map(|_| ())
    }

    fn update<R>(&self, f: impl FnOnce(&mut PlaybackState) -> R) -> R {
        let mut state = self.state.get();
        let result = f(&mut state);
        self.state.set(state);
        result
    }

    fn sync_icons(&self) {
        let (play, pause) = match self.state.get().icon() {
            ToggleIcon::Play => ("block", "none"),
            ToggleIcon::Pause => ("none", "block"),
        };
        if let Some(el) = &self.play_icon {
            let _ = el.style().set_property("display", play);
        }
        if let Some(el) = &self.pause_icon {
            let _ = el.style().set_property("display", pause);
        }
    }

    fn wire_events(self: &Rc<Self>, document: &Document, reload_on_end: bool) {
        if let Some(button) = document.get_element_by_id(TOGGLE_ID) {
            let this = self.clone();
            listen(
                &button,
                "click",
                Listen {
                    blocking: true,
                    once: false,
                },
                move |event| {
                    event.prevent_default();
                    event.stop_propagation();
                    this.toggle();
                },
            );
            // Keep taps on the button from reaching the deck's touch handlers
            listen(
                &button,
                "touchend",
                Listen {
                    blocking: true,
                    once: false,
                },
                |event| {
                    event.prevent_default();
                    event.stop_propagation();
                },
            );
        } else {
            log::warn!("No #{} button", TOGGLE_ID);
        }

        listen(&self.audio, "error", Listen::default(), |_event| {
            log::warn!("Audio element reported an error");
        });

        if reload_on_end {
            listen(&self.audio, "ended", Listen::default(), |_event| {
                log::info!("Music ended, reloading page");
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            });
        }
    }
}

fn icon(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
                .ok()
        });
        if scheduled.is_none() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}
