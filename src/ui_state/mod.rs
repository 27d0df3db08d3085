mod mode;
mod playback;
mod player_view;
mod popup;
mod theme;
mod ui_state;

pub use mode::Mode;
pub use player_view::{ControlState, PlayerView};
pub use popup::PopupType;
pub use theme::Theme;
pub use ui_state::UiState;
