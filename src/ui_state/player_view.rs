use crate::{domain::Episode, format_time, playback::PlaybackSession};
use std::sync::Arc;

/// Whether a control can be pressed, and whether its toggle is on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub enabled: bool,
    pub active: bool,
}

impl ControlState {
    fn new(enabled: bool, active: bool) -> Self {
        ControlState { enabled, active }
    }
}

/// Everything the player panel draws, derived from one playback session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub episode: Option<Arc<Episode>>,
    pub is_playing: bool,

    pub elapsed: String,
    pub duration: String,
    /// Slider position in `0.0..=1.0`.
    pub ratio: f64,

    pub shuffle: ControlState,
    pub previous: ControlState,
    pub play_pause: ControlState,
    pub next: ControlState,
    pub repeat: ControlState,
}

impl PlayerView {
    pub fn new(session: &PlaybackSession) -> Self {
        let ctx = &session.context;
        let episode = ctx.current_episode().cloned();
        let has_episode = episode.is_some();

        let elapsed = session.progress.elapsed();
        let duration = session.duration().unwrap_or(0);

        let ratio = match duration {
            0 => 0.0,
            d => (elapsed as f64 / d as f64).clamp(0.0, 1.0),
        };

        PlayerView {
            is_playing: ctx.is_playing(),
            elapsed: format_time(elapsed),
            duration: format_time(duration),
            ratio,

            shuffle: ControlState::new(has_episode && ctx.can_shuffle(), ctx.is_shuffling()),
            previous: ControlState::new(has_episode && ctx.has_previous(), false),
            play_pause: ControlState::new(has_episode, ctx.is_playing()),
            next: ControlState::new(has_episode && ctx.has_next(), false),
            repeat: ControlState::new(has_episode, ctx.is_looping()),

            episode,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.episode.is_none()
    }
}
