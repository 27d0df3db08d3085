use super::PlaybackContext;
use crate::player::{MediaControl, Subscription};
use anyhow::Result;
use std::time::Duration;
use tracing::{debug, trace};

/// What happened when the active episode reached its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOfMedia {
    /// Moved on to the next episode.
    Advanced,
    /// Nothing left to play; the context went idle.
    Cleared,
    /// Stale subscription, or looping is on.
    Ignored,
}

/// Elapsed time of the active episode, fed by position ticks from the media
/// layer.
///
/// Events are scoped to a [`Subscription`]. Attaching a new one supersedes the
/// old, so ticks still in flight for a previous episode are dropped.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    elapsed: u64,
    active: Option<Subscription>,
    media_duration: Option<Duration>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Duration reported by the media itself, when known.
    pub fn media_duration(&self) -> Option<Duration> {
        self.media_duration
    }

    pub fn is_attached(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_current(&self, subscription: Subscription) -> bool {
        self.active == Some(subscription)
    }

    pub fn attach(&mut self, subscription: Subscription) {
        debug!(?subscription, "progress attached");
        self.active = Some(subscription);
        self.elapsed = 0;
        self.media_duration = None;
    }

    pub fn detach(&mut self) {
        if let Some(subscription) = self.active.take() {
            debug!(?subscription, "progress detached");
        }
        self.elapsed = 0;
        self.media_duration = None;
    }

    /// Returns whether the tick was accepted.
    pub fn on_tick(&mut self, subscription: Subscription, position: Duration) -> bool {
        if !self.is_current(subscription) {
            trace!(?subscription, "dropping stale tick");
            return false;
        }
        self.elapsed = position.as_secs();
        true
    }

    pub fn on_metadata(&mut self, subscription: Subscription, duration: Duration) {
        if self.is_current(subscription) {
            self.media_duration = Some(duration);
        }
    }

    /// Moves the playhead to `amount` seconds.
    ///
    /// Bounds are the caller's concern; the media clamps natively. Does
    /// nothing while no media is attached.
    pub fn seek<M: MediaControl>(&mut self, amount: u64, media: &M) -> Result<()> {
        if self.active.is_none() {
            return Ok(());
        }

        self.elapsed = amount;
        media.seek(Duration::from_secs(amount))
    }

    pub fn on_ended(
        &mut self,
        subscription: Subscription,
        context: &mut PlaybackContext,
    ) -> EndOfMedia {
        // Looping media restarts on its own and should never report an end,
        // but a late event can still race a loop toggle.
        if !self.is_current(subscription) || context.is_looping() {
            return EndOfMedia::Ignored;
        }

        self.detach();
        match context.has_next() {
            true => {
                context.play_next();
                EndOfMedia::Advanced
            }
            false => {
                context.clear_player_state();
                EndOfMedia::Cleared
            }
        }
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
    use std::sync::Arc;

    fn context(n: usize, index: usize) -> PlaybackContext {
        let mut ctx = PlaybackContext::with_rng(StdRng::seed_from_u64(3));
        let list = (0..n)
            .map(|i| Arc::new(test_episode(&i.to_string(), 300)))
            .collect();
        ctx.play_list(list, index);
        ctx
    }

    #[test]
    fn ticks_floor_to_whole_seconds() {
        let mut tracker = ProgressTracker::new();
        let sub = Subscription::new(1);
        tracker.attach(sub);

        assert!(tracker.on_tick(sub, Duration::from_millis(12_999)));
        assert_eq!(tracker.elapsed(), 12);

        // Irregular cadence, including going backwards after a seek
        assert!(tracker.on_tick(sub, Duration::from_millis(400)));
        assert_eq!(tracker.elapsed(), 0);
    }

    #[test]
    fn attach_resets_elapsed_and_drops_old_ticks() {
        let mut tracker = ProgressTracker::new();
        let old = Subscription::new(1);
        let new = Subscription::new(2);

        tracker.attach(old);
        tracker.on_tick(old, Duration::from_secs(90));
        tracker.on_metadata(old, Duration::from_secs(300));

        tracker.attach(new);
        assert_eq!(tracker.elapsed(), 0);
        assert_eq!(tracker.media_duration(), None);

        assert!(!tracker.on_tick(old, Duration::from_secs(91)));
        assert_eq!(tracker.elapsed(), 0);

        assert!(tracker.on_tick(new, Duration::from_secs(1)));
        assert_eq!(tracker.elapsed(), 1);
    }

    #[test]
    fn seek_sets_elapsed_and_forces_media_position() {
        let media = RecordingMedia::default();
        let mut tracker = ProgressTracker::new();
        tracker.attach(Subscription::new(1));

        tracker.seek(42, &media).unwrap();

        assert_eq!(tracker.elapsed(), 42);
        assert_eq!(media.calls(), vec![MediaCall::Seek(Duration::from_secs(42))]);
    }

    #[test]
    fn seek_without_media_is_a_noop() {
        let media = RecordingMedia::default();
        let mut tracker = ProgressTracker::new();

        tracker.seek(42, &media).unwrap();

        assert_eq!(tracker.elapsed(), 0);
        assert!(media.calls().is_empty());
    }

    #[test]
    fn end_with_next_advances_once() {
        let mut ctx = context(3, 0);
        let mut tracker = ProgressTracker::new();
        let sub = Subscription::new(1);
        tracker.attach(sub);

        assert_eq!(tracker.on_ended(sub, &mut ctx), EndOfMedia::Advanced);
        assert_eq!(ctx.current_index(), Some(1));
        assert_eq!(ctx.queue().len(), 3);
        assert!(ctx.is_playing());

        // A duplicate end for the same episode must not advance again
        assert_eq!(tracker.on_ended(sub, &mut ctx), EndOfMedia::Ignored);
        assert_eq!(ctx.current_index(), Some(1));
    }

    #[test]
    fn end_without_next_clears() {
        let mut ctx = context(2, 1);
        let mut tracker = ProgressTracker::new();
        let sub = Subscription::new(9);
        tracker.attach(sub);
        tracker.on_tick(sub, Duration::from_secs(299));

        assert_eq!(tracker.on_ended(sub, &mut ctx), EndOfMedia::Cleared);
        assert!(ctx.current_index().is_none());
        assert!(!ctx.is_playing());
        assert_eq!(tracker.elapsed(), 0);
        assert!(!tracker.is_attached());
    }

    #[test]
    fn end_while_looping_is_ignored() {
        let mut ctx = context(2, 1);
        ctx.toggle_loop();
        let mut tracker = ProgressTracker::new();
        let sub = Subscription::new(1);
        tracker.attach(sub);

        assert_eq!(tracker.on_ended(sub, &mut ctx), EndOfMedia::Ignored);
        assert_eq!(ctx.current_index(), Some(1));
        assert!(tracker.is_attached());
    }

    #[test]
    fn stale_end_is_ignored() {
        let mut ctx = context(3, 0);
        let mut tracker = ProgressTracker::new();
        tracker.attach(Subscription::new(2));

        assert_eq!(
            tracker.on_ended(Subscription::new(1), &mut ctx),
            EndOfMedia::Ignored
        );
        assert_eq!(ctx.current_index(), Some(0));
    }
}
