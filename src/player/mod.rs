mod backend_rodio;
mod core;
mod error;
mod handle;
mod source;

pub use backend_rodio::RodioBackend;
pub use error::PlayerError;
pub use handle::PlayerHandle;
pub use source::MediaSource;

use crate::domain::Episode;
use anyhow::Result;
use std::{sync::Arc, time::Duration};

/// Scopes media events to the episode load they were emitted for.
///
/// A fresh id is handed out for every load; events carrying an older id belong
/// to media that has since been replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

impl Subscription {
    pub fn new(id: u64) -> Self {
        Subscription(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub enum PlayerCommand {
    Load {
        episode: Arc<Episode>,
        subscription: Subscription,
        autoplay: bool,
    },
    Resume,
    Pause,
    Stop,
    Seek(Duration),
    SetLooping(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    Started(Subscription),
    Paused(Subscription),
    Stopped(Subscription),
    Tick(Subscription, Duration),
    Ended(Subscription),
    MetadataReady(Subscription, Duration),
    Error(Subscription, String),
}

/// Command side of the media primitive, as seen from the UI thread.
pub trait MediaControl {
    fn load(&self, episode: Arc<Episode>, subscription: Subscription, autoplay: bool)
    -> Result<()>;
    fn resume(&self) -> Result<()>;
    fn pause(&self) -> Result<()>;
    fn stop(&self) -> Result<()>;
    fn seek(&self, position: Duration) -> Result<()>;
    fn set_looping(&self, looping: bool) -> Result<()>;
}

/// An audio output able to play one source at a time.
///
/// Implementations are driven from the player thread only and need not be
/// `Send`.
pub trait MediaBackend {
    /// Replaces whatever is loaded with `source`, leaving it paused at zero.
    fn load(&mut self, source: &MediaSource) -> Result<(), PlayerError>;
    fn pause(&mut self);
    fn resume(&mut self);
    fn stop(&mut self);
    fn seek(&mut self, position: Duration) -> Result<(), PlayerError>;

    fn position(&self) -> Duration;
    /// Total length as reported by the decoder, if it knows.
    fn duration(&self) -> Option<Duration>;
    fn is_paused(&self) -> bool;
    fn is_stopped(&self) -> bool;
    fn track_ended(&self) -> bool;
}
