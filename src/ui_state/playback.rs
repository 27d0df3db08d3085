use super::{PlayerView, UiState};
use crate::player::{MediaControl, PlayerEvent};
use anyhow::{Result, anyhow};

// ====================
//   QUEUE OPERATIONS
// ====================
impl UiState {
    /// Queues the whole list and starts at the selected episode.
    pub fn play_selected_list(&mut self) -> Result<()> {
        let idx = self
            .get_selected_index()
            .ok_or_else(|| anyhow!("No episode selected!"))?;

        let list = self.episodes.episodes().to_vec();
        self.playback.context.play_list(list, idx);
        Ok(())
    }

    /// Plays only the selected episode.
    pub fn play_selected_single(&mut self) -> Result<()> {
        let episode = self
            .get_selected_episode()
            .cloned()
            .ok_or_else(|| anyhow!("No episode selected!"))?;

        self.playback.context.play(episode);
        Ok(())
    }

    pub fn toggle_play(&mut self) {
        self.playback.context.toggle_play();
    }

    pub fn play_next(&mut self) {
        self.playback.context.play_next();
    }

    pub fn play_previous(&mut self) {
        self.playback.context.play_previous();
    }

    pub fn toggle_shuffle(&mut self) {
        self.playback.context.toggle_shuffle();
    }

    pub fn toggle_loop(&mut self) {
        self.playback.context.toggle_loop();
    }
}

// ===========
//   SEEKING
// ===========
impl UiState {
    pub fn seek_forward<M: MediaControl>(&mut self, secs: u64, media: &M) -> Result<()> {
        let Some(limit) = self.playback.duration() else {
            return Ok(());
        };

        let target = self
            .playback
            .progress
            .elapsed()
            .saturating_add(secs)
            .min(limit);
        self.playback.progress.seek(target, media)
    }

    pub fn seek_back<M: MediaControl>(&mut self, secs: u64, media: &M) -> Result<()> {
        if self.playback.duration().is_none() {
            return Ok(());
        }

        let target = self.playback.progress.elapsed().saturating_sub(secs);
        self.playback.progress.seek(target, media)
    }
}

// ==========
//   EVENTS
// ==========
impl UiState {
    pub fn handle_player_events(&mut self, events: Vec<PlayerEvent>) {
        for event in events {
            if let Err(e) = self.playback.handle_event(event) {
                self.set_error(e);
            }
        }
    }

    /// Pushes context changes out to the media layer.
    pub fn sync_media<M: MediaControl>(&mut self, media: &M) -> Result<()> {
        self.playback.sync(media)
    }

    pub fn player_view(&self) -> PlayerView {
        PlayerView::new(&self.playback)
    }
}
