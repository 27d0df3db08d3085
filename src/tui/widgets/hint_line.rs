use super::PAUSE_ICON;
use crate::ui_state::UiState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

const KEYMAPS: &str = " [space] play ✧ [n/b] next/prev ✧ [s]huffle ✧ [r]epeat ✧ [←/→] seek ✧ [q]uit ";

/// Bottom status line: key hints on the left, the playing episode on the right.
pub struct HintLine;

impl StatefulWidget for HintLine {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = &state.theme;
        let ctx = &state.playback.context;

        let separator = match ctx.is_playing() {
            true => Span::from(" ✧ ").fg(theme.text_muted),
            false => Span::from(format!(" {PAUSE_ICON} ")).fg(theme.text),
        };

        let playing_title = match ctx.current_episode() {
            Some(e) => Line::from_iter([
                Span::from(e.get_title().to_string()).fg(theme.accent),
                separator,
                Span::from(e.get_members().to_string()).fg(theme.text_muted),
                Span::from(" "),
            ])
            .right_aligned(),
            None => Line::default(),
        };

        let [left, right] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(area);

        Line::from(KEYMAPS.fg(theme.text_muted)).render(left, buf);
        playing_title.render(right, buf);
    }
}
