use crate::{
    REFRESH_RATE,
    key_handler::*,
    ui_state::UiState,
};
use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent};

use KeyCode::*;

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if let Some(action) = global_commands(&key_event) {
        return Some(action);
    }

    match state.popup.is_open() {
        true => handle_popup(&key_event),
        false => handle_player(&key_event, state),
    }
}

fn global_commands(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::Quit),
        (C, Char(' ')) => Some(Action::TogglePlay),
        (C, Char('n')) => Some(Action::PlayNext),
        (C, Char('p')) => Some(Action::PlayPrev),
        _ => None,
    }
}

fn handle_popup(key: &KeyEvent) -> Option<Action> {
    match key.code {
        Esc | Enter => Some(Action::ClearError),
        _ => None,
    }
}

#[rustfmt::skip]
fn handle_player(key: &KeyEvent, state: &UiState) -> Option<Action> {
    let (small, large) = state.seek_steps();

    match (key.modifiers, key.code) {
        // PLAYBACK COMMANDS
        (X, Char(' '))  => Some(Action::TogglePlay),
        (X, Char('n'))  => Some(Action::PlayNext),
        (X, Char('b'))  => Some(Action::PlayPrev),
        (X, Char('s'))  => Some(Action::ToggleShuffle),
        (X, Char('r'))  => Some(Action::ToggleLoop),

        (X, Right)      => Some(Action::SeekForward(small)),
        (S, Right)      => Some(Action::SeekForward(large)),
        (X, Left)       => Some(Action::SeekBack(small)),
        (S, Left)       => Some(Action::SeekBack(large)),

        // EPISODE LIST
        (X, Enter)      => Some(Action::PlaySelected),
        (X, Char('p'))  => Some(Action::PlaySingle),

        // SCROLLING
        (X, Char('j')) | (X, Down) => Some(Action::Scroll(Director::Down(1))),
        (X, Char('k')) | (X, Up)   => Some(Action::Scroll(Director::Up(1))),
        (X, Char('d'))  => Some(Action::Scroll(Director::Down(SCROLL_MID))),
        (X, Char('u'))  => Some(Action::Scroll(Director::Up(SCROLL_MID))),
        (S, Char('D'))  => Some(Action::Scroll(Director::Down(SCROLL_XTRA))),
        (S, Char('U'))  => Some(Action::Scroll(Director::Up(SCROLL_XTRA))),
        (X, Char('g'))  => Some(Action::Scroll(Director::Top)),
        (S, Char('G'))  => Some(Action::Scroll(Director::Bottom)),

        (X, Char('q'))  => Some(Action::Quit),
        _ => None,
    }
}

pub fn next_event() -> Result<Option<Event>> {
    match event::poll(REFRESH_RATE)? {
        true => Ok(Some(event::read()?)),
        false => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Settings, domain::EpisodeList, ui_state::Theme};

    fn state() -> UiState {
        UiState::with_theme(EpisodeList::default(), &Settings::default(), Theme::default())
    }

    fn press(state: &UiState, modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
        handle_key_event(KeyEvent::new(code, modifiers), state)
    }

    #[test]
    fn arrows_seek_by_configured_steps() {
        let state = state();

        assert_eq!(press(&state, X, Right), Some(Action::SeekForward(5)));
        assert_eq!(press(&state, S, Right), Some(Action::SeekForward(30)));
        assert_eq!(press(&state, X, Left), Some(Action::SeekBack(5)));
        assert_eq!(press(&state, S, Left), Some(Action::SeekBack(30)));
    }

    #[test]
    fn player_controls() {
        let state = state();

        assert_eq!(press(&state, X, Char(' ')), Some(Action::TogglePlay));
        assert_eq!(press(&state, X, Char('s')), Some(Action::ToggleShuffle));
        assert_eq!(press(&state, X, Char('r')), Some(Action::ToggleLoop));
        assert_eq!(press(&state, X, Enter), Some(Action::PlaySelected));
        assert_eq!(press(&state, X, Char('p')), Some(Action::PlaySingle));
    }

    #[test]
    fn popup_swallows_player_keys() {
        let mut state = state();
        state.set_error(anyhow::anyhow!("boom"));

        assert_eq!(press(&state, X, Char(' ')), None);
        assert_eq!(press(&state, X, Esc), Some(Action::ClearError));
        assert_eq!(press(&state, C, Char('c')), Some(Action::Quit));
    }
}
