use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub episode_list: Rect,
    pub player: Rect,
    pub hint_line: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [upper_block, hint_line] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(12), Constraint::Length(1)])
            .areas(area);

        let [episode_list, _, player] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(55),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(upper_block);

        AppLayout {
            episode_list,
            player,
            hint_line,
        }
    }
}
