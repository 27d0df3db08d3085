mod episode_table;
mod error;
mod hint_line;
mod player_panel;

pub use episode_table::EpisodeTable;
pub use error::ErrorMsg;
pub use hint_line::HintLine;
pub use player_panel::PlayerPanel;

const NOW_PLAYING: &str = "♫";
const SHUFFLE_ICON: &str = "⤮";
const PREVIOUS_ICON: &str = "⏮";
const PLAY_ICON: &str = "▶";
const PAUSE_ICON: &str = "⏸";
const NEXT_ICON: &str = "⏭";
const REPEAT_ICON: &str = "↻";

static PANEL_PADDING: ratatui::widgets::Padding = ratatui::widgets::Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 1,
};
