mod context;
mod progress;
mod sync;

pub use context::{PlaybackContext, PlayerStatus};
pub use progress::{EndOfMedia, ProgressTracker};
pub use sync::PlaybackSync;

use crate::player::{MediaControl, PlayerEvent};
use anyhow::{Result, anyhow};
use tracing::{info, warn};

/// Everything the player view needs for one listening session.
#[derive(Default)]
pub struct PlaybackSession {
    pub context: PlaybackContext,
    pub progress: ProgressTracker,
    sync: PlaybackSync,
}

impl PlaybackSession {
    pub fn new(context: PlaybackContext) -> Self {
        PlaybackSession {
            context,
            progress: ProgressTracker::new(),
            sync: PlaybackSync::new(),
        }
    }

    /// Pushes pending context changes to the media layer.
    pub fn sync<M: MediaControl>(&mut self, media: &M) -> Result<()> {
        self.sync.sync(&self.context, &mut self.progress, media)
    }

    /// Length of the current episode in seconds.
    ///
    /// The listed duration wins; the decoder's figure only fills in when the
    /// list says zero.
    pub fn duration(&self) -> Option<u64> {
        let episode = self.context.current_episode()?;
        match episode.duration {
            0 => self.progress.media_duration().map(|d| d.as_secs()),
            d => Some(d),
        }
    }

    /// Applies one event from the media layer.
    ///
    /// Media errors for the active episode are returned as `Err` after the
    /// context has been marked as not playing.
    pub fn handle_event(&mut self, event: PlayerEvent) -> Result<Option<EndOfMedia>> {
        match event {
            PlayerEvent::Tick(sub, position) => {
                self.progress.on_tick(sub, position);
            }
            PlayerEvent::MetadataReady(sub, duration) => {
                self.progress.on_metadata(sub, duration);
            }
            PlayerEvent::Started(sub) => {
                if self.progress.is_current(sub) {
                    self.context.set_playing_state(true);
                }
            }
            PlayerEvent::Paused(sub) | PlayerEvent::Stopped(sub) => {
                if self.progress.is_current(sub) {
                    self.context.set_playing_state(false);
                }
            }
            PlayerEvent::Ended(sub) => {
                let current = self.progress.is_current(sub);
                let outcome = self.progress.on_ended(sub, &mut self.context);
                match outcome {
                    // A loop toggle raced the end; the media is gone all the same
                    EndOfMedia::Ignored if current => self.sync.release(),
                    EndOfMedia::Ignored => (),
                    _ => info!(?outcome, "end of media"),
                }
                return Ok(Some(outcome));
            }
            PlayerEvent::Error(sub, message) => {
                warn!(?sub, %message, "media error");
                if self.progress.is_current(sub) {
                    self.context.set_playing_state(false);
                    self.sync.release();
                    return Err(anyhow!(message));
                }
            }
        }
        Ok(None)
    }
}
