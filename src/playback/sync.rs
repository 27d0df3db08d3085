use super::{PlaybackContext, ProgressTracker};
use crate::player::{MediaControl, Subscription};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Turns context changes into media commands.
///
/// This is the only place commands derived from state are issued. The media
/// layer answers with events, and only those events update
/// [`PlaybackContext::set_playing_state`].
#[derive(Debug, Default)]
pub struct PlaybackSync {
    loaded: Option<LoadedEpisode>,
    // The media thread dropped `loaded`; the next play request reloads it.
    released: bool,
    playing: bool,
    looping: bool,
    last_subscription: u64,
}

#[derive(Debug, PartialEq, Eq)]
struct LoadedEpisode {
    index: usize,
    id: String,
}

impl PlaybackSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync<M: MediaControl>(
        &mut self,
        context: &PlaybackContext,
        progress: &mut ProgressTracker,
        media: &M,
    ) -> Result<()> {
        if context.is_looping() != self.looping {
            self.looping = context.is_looping();
            media.set_looping(self.looping)?;
        }

        let target = context
            .current_index()
            .zip(context.current_episode())
            .map(|(index, episode)| (index, Arc::clone(episode)));

        match target {
            None => {
                self.released = false;
                if self.loaded.take().is_some() {
                    debug!("queue exhausted, stopping media");
                    progress.detach();
                    self.playing = false;
                    media.stop()?;
                }
            }

            Some((index, episode)) => {
                let wanted = LoadedEpisode {
                    index,
                    id: episode.id.clone(),
                };

                let reload = self.released && context.is_playing();

                if reload || self.loaded.as_ref() != Some(&wanted) {
                    let subscription = self.next_subscription();
                    info!(episode = %episode.id, index, ?subscription, reload, "loading episode");

                    progress.attach(subscription);
                    self.loaded = Some(wanted);
                    self.released = false;
                    self.playing = context.is_playing();
                    media.load(episode, subscription, self.playing)?;
                } else if context.is_playing() != self.playing {
                    self.playing = context.is_playing();
                    match self.playing {
                        true => media.resume()?,
                        false => media.pause()?,
                    }
                }
            }
        }

        Ok(())
    }

    /// Marks the loaded episode as gone from the media thread, after a media
    /// error or an end of media that did not advance the queue.
    pub fn release(&mut self) {
        if self.loaded.is_some() {
            debug!("media released");
            self.released = true;
        }
    }

    fn next_subscription(&mut self) -> Subscription {
        self.last_subscription += 1;
        Subscription::new(self.last_subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::test_episode,
        player::testing::{MediaCall, RecordingMedia},
    };
    use rand::{SeedableRng, rngs::StdRng};
    use std::time::Duration;

    struct Fixture {
        ctx: PlaybackContext,
        progress: ProgressTracker,
        sync: PlaybackSync,
        media: RecordingMedia,
    }

    impl Fixture {
        fn new(n: usize, index: usize) -> Self {
            let mut ctx = PlaybackContext::with_rng(StdRng::seed_from_u64(11));
            let list = (0..n)
                .map(|i| Arc::new(test_episode(&i.to_string(), 100)))
                .collect();
            ctx.play_list(list, index);

            Fixture {
                ctx,
                progress: ProgressTracker::new(),
                sync: PlaybackSync::new(),
                media: RecordingMedia::default(),
            }
        }

        fn sync(&mut self) {
            self.sync
                .sync(&self.ctx, &mut self.progress, &self.media)
                .unwrap();
        }
    }

    #[test]
    fn loads_current_episode_once() {
        let mut fx = Fixture::new(3, 1);
        fx.sync();
        fx.sync();

        assert_eq!(
            fx.media.calls(),
            vec![MediaCall::Load {
                id: "1".to_string(),
                subscription: Subscription::new(1),
                autoplay: true,
            }]
        );
        assert!(fx.progress.is_current(Subscription::new(1)));
    }

    #[test]
    fn play_flag_changes_become_commands() {
        let mut fx = Fixture::new(2, 0);
        fx.sync();
        fx.media.clear();

        fx.ctx.toggle_play();
        fx.sync();
        fx.ctx.toggle_play();
        fx.sync();

        assert_eq!(fx.media.calls(), vec![MediaCall::Pause, MediaCall::Resume]);
    }

    #[test]
    fn confirmed_state_matching_request_issues_nothing() {
        let mut fx = Fixture::new(2, 0);
        fx.sync();
        fx.media.clear();

        fx.ctx.set_playing_state(true);
        fx.sync();

        assert!(fx.media.calls().is_empty());
    }

    #[test]
    fn episode_change_resets_progress_before_new_ticks() {
        let mut fx = Fixture::new(3, 0);
        fx.sync();
        let first = Subscription::new(1);
        fx.progress.on_tick(first, Duration::from_secs(50));

        fx.ctx.play_next();
        fx.sync();

        assert_eq!(fx.progress.elapsed(), 0);
        assert!(!fx.progress.on_tick(first, Duration::from_secs(51)));
        assert_eq!(fx.progress.elapsed(), 0);
        assert!(fx.progress.on_tick(Subscription::new(2), Duration::from_secs(1)));
    }

    #[test]
    fn paused_episode_change_loads_without_autoplay() {
        let mut fx = Fixture::new(3, 0);
        fx.sync();
        fx.ctx.toggle_play();
        fx.sync();
        fx.media.clear();

        fx.ctx.play_next();
        fx.sync();

        assert_eq!(
            fx.media.calls(),
            vec![MediaCall::Load {
                id: "1".to_string(),
                subscription: Subscription::new(2),
                autoplay: false,
            }]
        );
    }

    #[test]
    fn going_idle_stops_media() {
        let mut fx = Fixture::new(1, 0);
        fx.sync();
        fx.media.clear();

        fx.ctx.clear_player_state();
        fx.sync();
        fx.sync();

        assert_eq!(fx.media.calls(), vec![MediaCall::Stop]);
        assert!(!fx.progress.is_attached());
    }

    #[test]
    fn loop_flag_is_forwarded() {
        let mut fx = Fixture::new(1, 0);
        fx.ctx.toggle_loop();
        fx.sync();

        assert_eq!(fx.media.calls()[0], MediaCall::SetLooping(true));
    }

    #[test]
    fn released_media_reloads_on_next_play_request() {
        let mut fx = Fixture::new(2, 0);
        fx.sync();
        fx.media.clear();

        fx.sync.release();
        fx.ctx.set_playing_state(false);
        fx.sync();
        fx.sync();
        assert_eq!(fx.media.calls(), vec![MediaCall::Pause]);
        fx.media.clear();

        fx.ctx.toggle_play();
        fx.sync();
        fx.sync();

        assert_eq!(
            fx.media.calls(),
            vec![MediaCall::Load {
                id: "0".to_string(),
                subscription: Subscription::new(2),
                autoplay: true,
            }]
        );
        assert!(fx.progress.is_current(Subscription::new(2)));
    }

    #[test]
    fn released_media_while_playing_reloads_at_once() {
        let mut fx = Fixture::new(2, 0);
        fx.sync();
        fx.media.clear();

        fx.sync.release();
        fx.sync();

        assert!(matches!(
            fx.media.calls().as_slice(),
            [MediaCall::Load { autoplay: true, .. }]
        ));
    }

    #[test]
    fn replaying_same_list_position_does_not_reload() {
        let mut fx = Fixture::new(2, 0);
        fx.sync();
        fx.media.clear();

        let list = fx.ctx.queue().to_vec();
        fx.ctx.play_list(list, 0);
        fx.sync();

        assert!(fx.media.calls().is_empty());
    }
}
