use super::{NOW_PLAYING, PANEL_PADDING};
use crate::ui_state::UiState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Rect},
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Cell, Paragraph, Row, StatefulWidget, Table, Widget},
};

const COLUMN_SPACING: u16 = 2;
const KEYMAPS: &str = " [enter] play from here ✧ [p] play one ";

pub struct EpisodeTable;

impl StatefulWidget for EpisodeTable {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = &state.theme;
        let episodes = state.episodes.episodes();

        let title = Line::from_iter([
            Span::from(" Episodes ").fg(theme.accent),
            Span::from(format!("[{}] ", episodes.len())).fg(theme.text_muted),
        ]);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme.border)
            .title_top(title.centered())
            .title_bottom(Line::from(KEYMAPS.fg(theme.text_muted)).centered())
            .padding(PANEL_PADDING)
            .bg(theme.bg);

        if episodes.is_empty() {
            Paragraph::new("No episodes found")
                .centered()
                .fg(theme.text_muted)
                .block(block)
                .render(area, buf);
            return;
        }

        let playing_id = state
            .playback
            .context
            .current_episode()
            .map(|e| e.id.as_str());

        let rows = episodes
            .iter()
            .enumerate()
            .map(|(idx, episode)| {
                let status = match Some(episode.id.as_str()) == playing_id {
                    true => NOW_PLAYING,
                    false => "",
                };

                Row::new([
                    Cell::from(format!("{:>2}", idx + 1)).fg(theme.text_muted),
                    Cell::from(status).fg(theme.accent),
                    Cell::from(episode.title.as_str()).fg(theme.text),
                    Cell::from(episode.members.as_str()).fg(theme.text_muted),
                    Cell::from(Text::from(episode.get_duration_str()).right_aligned())
                        .fg(theme.text_muted),
                ])
            })
            .collect::<Vec<Row>>();

        let widths = [
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(20),
            Constraint::Max(24),
            Constraint::Length(6),
        ];

        let table = Table::new(rows, widths)
            .block(block)
            .column_spacing(COLUMN_SPACING)
            .flex(Flex::Start)
            .row_highlight_style(Style::new().fg(theme.bg).bg(theme.accent));

        StatefulWidget::render(table, area, buf, &mut state.list_pos);
    }
}
