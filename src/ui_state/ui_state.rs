use super::{
    Mode, Theme,
    popup::{PopupState, PopupType},
};
use crate::{
    Settings,
    domain::{Episode, EpisodeList},
    key_handler::Director,
    playback::PlaybackSession,
};
use anyhow::{Error, Result};
use ratatui::widgets::TableState;
use std::sync::Arc;
use tracing::warn;

pub struct UiState {
    // Backend Modules
    pub(crate) episodes: EpisodeList,
    pub(crate) playback: PlaybackSession,

    // Visual Elements
    pub(crate) theme: Theme,
    pub(crate) popup: PopupState,
    pub(crate) list_pos: TableState,
    mode: Mode,

    pub(super) seek_step: u64,
    pub(super) seek_step_large: u64,
}

impl UiState {
    pub fn new(episodes: EpisodeList, settings: &Settings) -> Result<Self> {
        let theme = Theme::try_from(&settings.theme)?;
        Ok(Self::with_theme(episodes, settings, theme))
    }

    pub(crate) fn with_theme(episodes: EpisodeList, settings: &Settings, theme: Theme) -> Self {
        let list_pos = match episodes.is_empty() {
            true => TableState::default(),
            false => TableState::default().with_selected(0),
        };

        UiState {
            episodes,
            playback: PlaybackSession::default(),
            theme,
            popup: PopupState::default(),
            list_pos,
            mode: Mode::default(),
            seek_step: settings.seek_step,
            seek_step_large: settings.seek_step_large,
        }
    }
}

impl UiState {
    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode
    }

    pub fn set_error(&mut self, e: Error) {
        warn!(error = %format!("{e:#}"), "showing error");
        self.popup.open(PopupType::Error(format!("{e:#}")));
    }

    pub fn get_error(&self) -> Option<&str> {
        match &self.popup.current {
            PopupType::Error(e) => Some(e.as_str()),
            PopupType::None => None,
        }
    }

    pub fn clear_error(&mut self) {
        self.popup.close();
    }

    pub fn seek_steps(&self) -> (u64, u64) {
        (self.seek_step, self.seek_step_large)
    }

    pub fn get_selected_index(&self) -> Option<usize> {
        self.list_pos
            .selected()
            .filter(|&idx| idx < self.episodes.len())
    }

    pub fn get_selected_episode(&self) -> Option<&Arc<Episode>> {
        self.get_selected_index()
            .and_then(|idx| self.episodes.get(idx))
    }

    pub fn scroll(&mut self, director: Director) {
        let len = self.episodes.len();
        if len == 0 {
            self.list_pos.select(None);
            return;
        }

        let current = self.list_pos.selected().unwrap_or(0);
        let new_pos = match director {
            Director::Up(x) => current.saturating_sub(x),
            Director::Down(x) => current.saturating_add(x).min(len - 1),
            Director::Top => 0,
            Director::Bottom => len - 1,
        };

        self.list_pos.select(Some(new_pos));
    }
}
