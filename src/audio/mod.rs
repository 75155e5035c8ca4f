//! Background music
//!
//! `PlaybackState` tracks what the player believes about the `<audio>` element
//! and decides retries; the browser side lives in `player` (WASM only).

#[cfg(target_arch = "wasm32")]
mod player;

#[cfg(target_arch = "wasm32")]
pub use player::MusicPlayer;

/// `HTMLMediaElement.readyState` value meaning the current frame is available
pub const HAVE_CURRENT_DATA: u16 = 2;

/// Which icon the music toggle shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Play,
    Pause,
}

/// What a toggle press should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
}

/// What to do after the browser rejected a play request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayFailure {
    /// Reload the media and try once more after the retry delay
    Retry,
    /// Stop trying until the next explicit request
    GiveUp,
}

/// Player-side view of playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    playing: bool,
    retrying: bool,
    /// A play request is in flight
    pending: bool,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Play icon while silent, pause icon while playing
    pub fn icon(&self) -> ToggleIcon {
        if self.playing {
            ToggleIcon::Pause
        } else {
            ToggleIcon::Play
        }
    }

    /// `None` while a play request is still in flight
    pub fn toggle(&self) -> Option<ToggleAction> {
        if self.pending {
            None
        } else if self.playing {
            Some(ToggleAction::Pause)
        } else {
            Some(ToggleAction::Play)
        }
    }

    /// Claim a new play request. Returns false if one is already in flight or
    /// the music is playing.
    pub fn request(&mut self) -> bool {
        if self.pending || self.playing {
            return false;
        }
        self.pending = true;
        self.retrying = false;
        true
    }

    /// The play promise resolved
    pub fn started(&mut self) {
        self.playing = true;
        self.retrying = false;
        self.pending = false;
    }

    /// The play promise rejected; one retry per request
    pub fn failed(&mut self) -> PlayFailure {
        if self.retrying {
            self.retrying = false;
            self.playing = false;
            self.pending = false;
            PlayFailure::GiveUp
        } else {
            self.retrying = true;
            PlayFailure::Retry
        }
    }

    /// The request ended without playing and will not be retried
    pub fn blocked(&mut self) {
        self.playing = false;
        self.retrying = false;
        self.pending = false;
    }

    pub fn paused(&mut self) {
        self.playing = false;
        self.retrying = false;
    }
}

/// Whether the element must be (re)loaded before it can start
pub fn needs_load(ready_state: u16) -> bool {
    ready_state < HAVE_CURRENT_DATA
}
