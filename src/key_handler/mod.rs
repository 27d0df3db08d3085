mod action;

pub use action::{handle_key_event, next_event};

use ratatui::crossterm::event::KeyModifiers;

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

const SCROLL_MID: usize = 5;
const SCROLL_XTRA: usize = 20;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    // Player Controls
    TogglePlay,
    PlayNext,
    PlayPrev,
    ToggleShuffle,
    ToggleLoop,
    SeekForward(u64),
    SeekBack(u64),

    // Episode list
    PlaySelected,
    PlaySingle,
    Scroll(Director),

    // Errors, Convenience & Other
    ClearError,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Director {
    Up(usize),
    Down(usize),
    Top,
    Bottom,
}
