use crate::domain::Episode;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Idle,
    Paused,
    Playing,
}

/// Session-wide playback state: the queue, the current position in it and
/// the playing/looping/shuffling flags.
///
/// The context only records intent. Starting and stopping audio is the job of
/// [`PlaybackSync`](super::PlaybackSync), which observes these flags, and the
/// media layer reports back through [`PlaybackContext::set_playing_state`].
pub struct PlaybackContext {
    queue: Vec<Arc<Episode>>,
    current: Option<usize>,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
    rng: StdRng,
}

impl Default for PlaybackContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackContext {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        PlaybackContext {
            queue: Vec::new(),
            current: None,
            is_playing: false,
            is_looping: false,
            is_shuffling: false,
            rng,
        }
    }
}

// =============
//   ACCESSORS
// =============
impl PlaybackContext {
    pub fn queue(&self) -> &[Arc<Episode>] {
        &self.queue
    }

    /// Index of the current episode, `None` when idle or out of range.
    pub fn current_index(&self) -> Option<usize> {
        self.current.filter(|&idx| idx < self.queue.len())
    }

    pub fn current_episode(&self) -> Option<&Arc<Episode>> {
        self.current_index().and_then(|idx| self.queue.get(idx))
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn status(&self) -> PlayerStatus {
        match (self.current_index(), self.is_playing) {
            (None, _) => PlayerStatus::Idle,
            (Some(_), true) => PlayerStatus::Playing,
            (Some(_), false) => PlayerStatus::Paused,
        }
    }

    pub fn has_next(&self) -> bool {
        match self.is_shuffling {
            true => self.queue.len() > 1,
            false => self
                .current_index()
                .is_some_and(|idx| idx + 1 < self.queue.len()),
        }
    }

    pub fn has_previous(&self) -> bool {
        match self.is_shuffling {
            true => self.queue.len() > 1,
            false => self.current_index().is_some_and(|idx| idx > 0),
        }
    }

    /// Shuffling is meaningless with fewer than two episodes.
    pub fn can_shuffle(&self) -> bool {
        self.queue.len() > 1
    }
}

// ===============
//   TRANSITIONS
// ===============
impl PlaybackContext {
    pub fn play(&mut self, episode: Arc<Episode>) {
        debug!(episode = %episode.id, "play single episode");
        self.queue = vec![episode];
        self.current = Some(0);
        self.is_playing = true;
        self.is_shuffling = false;
    }

    /// Replaces the queue with `list` and starts at `index`.
    ///
    /// An empty list or an index outside it leaves the context idle.
    pub fn play_list(&mut self, list: Vec<Arc<Episode>>, index: usize) {
        if index >= list.len() {
            debug!(index, len = list.len(), "play_list with invalid index");
            self.clear_player_state();
            return;
        }

        debug!(index, len = list.len(), "play list");
        self.queue = list;
        self.current = Some(index);
        self.is_playing = true;
        // A lone episode cannot shuffle, and the control is disabled
        self.is_shuffling &= self.can_shuffle();
    }

    pub fn toggle_play(&mut self) {
        if self.current_index().is_none() {
            return;
        }
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    /// Turning shuffle on needs at least two episodes; turning it off always works.
    pub fn toggle_shuffle(&mut self) {
        if !self.can_shuffle() && !self.is_shuffling {
            return;
        }
        self.is_shuffling = !self.is_shuffling;
    }

    /// Records what the media layer reports; never a command.
    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing && self.current_index().is_some();
    }

    /// Returns whether the current episode changed.
    pub fn play_next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }

        let next = match (self.is_shuffling, self.current_index()) {
            (true, _) => self.random_other_index(),
            (false, Some(idx)) => idx + 1,
            (false, None) => return false,
        };

        debug!(from = ?self.current, to = next, "play next");
        self.current = Some(next);
        true
    }

    /// Returns whether the current episode changed.
    pub fn play_previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }

        let prev = match (self.is_shuffling, self.current_index()) {
            (true, _) => self.random_other_index(),
            (false, Some(idx)) => idx - 1,
            (false, None) => return false,
        };

        debug!(from = ?self.current, to = prev, "play previous");
        self.current = Some(prev);
        true
    }

    pub fn clear_player_state(&mut self) {
        debug!("clear player state");
        self.queue.clear();
        self.current = None;
        self.is_playing = false;
    }

    // Uniform over every index except the current one.
    // Callers guarantee at least two episodes.
    fn random_other_index(&mut self) -> usize {
        let len = self.queue.len();
        match self.current_index() {
            Some(current) => {
                let pick = self.rng.random_range(0..len - 1);
                if pick >= current { pick + 1 } else { pick }
            }
            None => self.rng.random_range(0..len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_episode;

    fn episodes(n: usize) -> Vec<Arc<Episode>> {
        (0..n)
            .map(|i| Arc::new(test_episode(&i.to_string(), 60)))
            .collect()
    }

    fn seeded() -> PlaybackContext {
        PlaybackContext::with_rng(StdRng::seed_from_u64(7))
    }

    #[test]
    fn starts_idle() {
        let ctx = seeded();

        assert_eq!(ctx.status(), PlayerStatus::Idle);
        assert!(ctx.current_episode().is_none());
        assert!(!ctx.has_next());
        assert!(!ctx.has_previous());
        assert!(!ctx.can_shuffle());
    }

    #[test]
    fn play_single_episode() {
        let mut ctx = seeded();
        let ep = Arc::new(test_episode("solo", 120));
        ctx.play(Arc::clone(&ep));

        assert_eq!(ctx.queue().len(), 1);
        assert_eq!(ctx.current_index(), Some(0));
        assert_eq!(ctx.current_episode(), Some(&ep));
        assert_eq!(ctx.status(), PlayerStatus::Playing);
    }

    #[test]
    fn play_list_starts_at_index() {
        let mut ctx = seeded();
        ctx.play_list(episodes(4), 2);

        assert_eq!(ctx.current_index(), Some(2));
        assert!(ctx.is_playing());
        assert!(ctx.has_next());
        assert!(ctx.has_previous());
    }

    #[test]
    fn play_list_with_bad_index_stays_idle() {
        let mut ctx = seeded();
        ctx.play_list(episodes(2), 2);
        assert_eq!(ctx.status(), PlayerStatus::Idle);
        assert!(ctx.queue().is_empty());

        ctx.play_list(Vec::new(), 0);
        assert_eq!(ctx.status(), PlayerStatus::Idle);
        assert!(!ctx.is_playing());
    }

    #[test]
    fn toggle_play_flips_flag() {
        let mut ctx = seeded();
        ctx.play_list(episodes(2), 0);

        ctx.toggle_play();
        assert_eq!(ctx.status(), PlayerStatus::Paused);
        ctx.toggle_play();
        assert_eq!(ctx.status(), PlayerStatus::Playing);
    }

    #[test]
    fn toggle_play_when_idle_keeps_invariant() {
        let mut ctx = seeded();
        ctx.toggle_play();

        assert!(!ctx.is_playing());
        assert_eq!(ctx.status(), PlayerStatus::Idle);
    }

    #[test]
    fn single_episode_never_navigates() {
        let mut ctx = seeded();
        ctx.play_list(episodes(1), 0);

        assert!(!ctx.has_next());
        assert!(!ctx.has_previous());
        assert!(!ctx.play_next());
        assert!(!ctx.play_previous());

        // Shuffle is disabled for a single episode
        ctx.toggle_shuffle();
        assert!(!ctx.is_shuffling());
        assert!(!ctx.has_next());
        assert!(!ctx.has_previous());
    }

    #[test]
    fn single_episode_queue_turns_shuffle_off() {
        let mut ctx = seeded();
        ctx.play_list(episodes(3), 0);
        ctx.toggle_shuffle();
        assert!(ctx.is_shuffling());

        ctx.play(Arc::new(test_episode("solo", 90)));
        assert!(!ctx.is_shuffling());

        ctx.play_list(episodes(3), 1);
        ctx.toggle_shuffle();
        ctx.play_list(episodes(1), 0);
        assert!(!ctx.is_shuffling());
    }

    #[test]
    fn shuffle_can_always_be_turned_off() {
        let mut ctx = seeded();
        ctx.play_list(episodes(2), 0);
        ctx.toggle_shuffle();

        ctx.clear_player_state();
        assert!(ctx.is_shuffling());
        ctx.toggle_shuffle();
        assert!(!ctx.is_shuffling());

        ctx.toggle_shuffle();
        assert!(!ctx.is_shuffling());
    }

    #[test]
    fn sequential_navigation() {
        let mut ctx = seeded();
        ctx.play_list(episodes(3), 0);

        assert!(!ctx.has_previous());
        assert!(!ctx.play_previous());
        assert_eq!(ctx.current_index(), Some(0));

        assert!(ctx.play_next());
        assert!(ctx.play_next());
        assert_eq!(ctx.current_index(), Some(2));

        assert!(!ctx.has_next());
        assert!(!ctx.play_next());
        assert_eq!(ctx.current_index(), Some(2));

        assert!(ctx.play_previous());
        assert_eq!(ctx.current_index(), Some(1));
    }

    #[test]
    fn shuffle_never_picks_current() {
        let mut ctx = seeded();
        ctx.play_list(episodes(5), 0);
        ctx.toggle_shuffle();

        for _ in 0..200 {
            let before = ctx.current_index().unwrap();
            assert!(ctx.play_next());
            let after = ctx.current_index().unwrap();
            assert_ne!(before, after);
            assert!(after < 5);

            let before = after;
            assert!(ctx.play_previous());
            assert_ne!(before, ctx.current_index().unwrap());
        }
    }

    #[test]
    fn shuffle_with_two_episodes_alternates() {
        let mut ctx = seeded();
        ctx.play_list(episodes(2), 1);
        ctx.toggle_shuffle();

        assert!(ctx.has_previous());
        assert!(ctx.play_next());
        assert_eq!(ctx.current_index(), Some(0));
        assert!(ctx.play_next());
        assert_eq!(ctx.current_index(), Some(1));
    }

    #[test]
    fn shuffle_at_end_of_queue_still_has_next() {
        let mut ctx = seeded();
        ctx.play_list(episodes(3), 2);
        assert!(!ctx.has_next());

        ctx.toggle_shuffle();
        assert!(ctx.has_next());
    }

    #[test]
    fn toggle_shuffle_does_not_touch_queue() {
        let mut ctx = seeded();
        let list = episodes(6);
        ctx.play_list(list.clone(), 3);

        ctx.toggle_shuffle();
        assert_eq!(ctx.queue(), list.as_slice());
        assert_eq!(ctx.current_index(), Some(3));

        ctx.toggle_shuffle();
        assert_eq!(ctx.queue(), list.as_slice());
        assert_eq!(ctx.current_index(), Some(3));
    }

    #[test]
    fn toggle_loop_flips_flag() {
        let mut ctx = seeded();
        ctx.toggle_loop();
        assert!(ctx.is_looping());
        ctx.toggle_loop();
        assert!(!ctx.is_looping());
    }

    #[test]
    fn set_playing_state_is_ignored_when_idle() {
        let mut ctx = seeded();
        ctx.set_playing_state(true);
        assert!(!ctx.is_playing());

        ctx.play_list(episodes(2), 0);
        ctx.set_playing_state(false);
        assert_eq!(ctx.status(), PlayerStatus::Paused);
        ctx.set_playing_state(true);
        assert_eq!(ctx.status(), PlayerStatus::Playing);
    }

    #[test]
    fn clear_player_state_goes_idle() {
        let mut ctx = seeded();
        ctx.play_list(episodes(3), 1);
        ctx.toggle_loop();

        ctx.clear_player_state();

        assert_eq!(ctx.status(), PlayerStatus::Idle);
        assert!(ctx.current_index().is_none());
        assert!(ctx.queue().is_empty());
        assert!(!ctx.is_playing());
        // Flags are user preferences and survive
        assert!(ctx.is_looping());
    }
}
