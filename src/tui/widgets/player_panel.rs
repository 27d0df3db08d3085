use super::{
    NEXT_ICON, PANEL_PADDING, PAUSE_ICON, PLAY_ICON, PREVIOUS_ICON, REPEAT_ICON, SHUFFLE_ICON,
};
use crate::{
    truncate_at_last_space,
    ui_state::{ControlState, PlayerView, Theme, UiState},
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, LineGauge, Paragraph, StatefulWidget, Widget, Wrap},
};

const IDLE_TEXT: &str = "Select a podcast to listen";
const CONTROL_GAP: &str = "   ";

/// Now playing details, the progress row and the control row.
pub struct PlayerPanel;

impl StatefulWidget for PlayerPanel {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = &state.theme;
        let view = state.player_view();

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme.border)
            .title_top(Line::from(" Now playing ").centered().fg(theme.accent))
            .padding(PANEL_PADDING)
            .bg(theme.bg);

        let inner = block.inner(area);
        block.render(area, buf);

        let [details, _, progress, _, controls] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        render_details(&view, theme, details, buf);
        render_progress(&view, theme, progress, buf);
        render_controls(&view, theme, controls, buf);
    }
}

fn render_details(view: &PlayerView, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let Some(episode) = &view.episode else {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(IDLE_TEXT)
            .centered()
            .fg(theme.text_muted)
            .render(middle, buf);
        return;
    };

    let width = area.width.saturating_sub(2) as usize;
    let mut lines = vec![
        Line::from(truncate_at_last_space(&episode.title, width * 2))
            .bold()
            .fg(theme.text),
        Line::from(episode.members.as_str()).fg(theme.text_muted),
    ];

    if let Some(published) = &episode.published_at {
        lines.push(Line::from(published.as_str()).fg(theme.text_muted));
    }

    if let Some(description) = &episode.description {
        lines.push(Line::default());
        lines.push(Line::from(description.as_str()).fg(theme.text_muted).italic());
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .centered()
        .render(area, buf);
}

fn render_progress(view: &PlayerView, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let label_width = view.elapsed.len().max(view.duration.len()) as u16;

    let [elapsed, _, gauge, _, duration] = Layout::horizontal([
        Constraint::Length(label_width),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(label_width),
    ])
    .areas(area);

    let (elapsed_color, complete) = match view.is_idle() {
        true => (theme.text_muted, theme.progress_incomplete),
        false => (theme.text, theme.progress_complete),
    };

    Line::from(view.elapsed.as_str())
        .fg(elapsed_color)
        .right_aligned()
        .render(elapsed, buf);

    LineGauge::default()
        .filled_style(Style::new().fg(complete))
        .unfilled_style(Style::new().fg(theme.progress_incomplete))
        .label("")
        .ratio(view.ratio)
        .render(gauge, buf);

    Line::from(view.duration.as_str())
        .fg(theme.text_muted)
        .render(duration, buf);
}

fn render_controls(view: &PlayerView, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let play_icon = match view.is_playing {
        true => PAUSE_ICON,
        false => PLAY_ICON,
    };

    let play_style = match view.play_pause.enabled {
        true => Style::new().fg(theme.accent).bold(),
        false => Style::new().fg(theme.text_muted),
    };

    Line::from_iter([
        Span::styled(SHUFFLE_ICON, control_style(view.shuffle, theme)),
        Span::from(CONTROL_GAP),
        Span::styled(PREVIOUS_ICON, control_style(view.previous, theme)),
        Span::from(CONTROL_GAP),
        Span::styled(play_icon, play_style),
        Span::from(CONTROL_GAP),
        Span::styled(NEXT_ICON, control_style(view.next, theme)),
        Span::from(CONTROL_GAP),
        Span::styled(REPEAT_ICON, control_style(view.repeat, theme)),
    ])
    .centered()
    .render(area, buf);
}

fn control_style(control: ControlState, theme: &Theme) -> Style {
    match (control.enabled, control.active) {
        (false, _) => Style::new().fg(theme.text_muted),
        (true, true) => Style::new().fg(theme.accent).bold(),
        (true, false) => Style::new().fg(theme.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        player::Subscription,
        tui::widgets::test_utils::{buffer_text, find_symbol, state_with},
    };
    use std::time::Duration;

    fn draw(state: &mut UiState) -> Buffer {
        let area = Rect::new(0, 0, 50, 16);
        let mut buf = Buffer::empty(area);
        PlayerPanel.render(area, &mut buf, state);
        buf
    }

    #[test]
    fn idle_panel_prompts_for_selection() {
        let mut state = state_with(3);
        let buf = draw(&mut state);
        let text = buffer_text(&buf);

        assert!(text.contains("Now playing"));
        assert!(text.contains(IDLE_TEXT));
        assert!(text.contains("00:00"));

        let theme = Theme::default();
        for icon in [SHUFFLE_ICON, PREVIOUS_ICON, PLAY_ICON, NEXT_ICON, REPEAT_ICON] {
            let cell = find_symbol(&buf, icon).unwrap();
            assert_eq!(cell.fg, theme.text_muted, "{icon} should look disabled");
        }
    }

    #[test]
    fn playing_panel_shows_episode_and_progress() {
        let mut state = state_with(3);
        state.play_selected_list().unwrap();
        let sub = Subscription::new(1);
        state.playback.progress.attach(sub);
        state.playback.progress.on_tick(sub, Duration::from_secs(65));

        let buf = draw(&mut state);
        let text = buffer_text(&buf);

        assert!(text.contains("Episode 0"));
        assert!(text.contains("Diego, Richard"));
        assert!(text.contains("01:05"));
        assert!(text.contains("02:05"));
        assert!(find_symbol(&buf, PAUSE_ICON).is_some());
        assert!(!text.contains(IDLE_TEXT));
    }

    #[test]
    fn control_styles_follow_queue_position() {
        let mut state = state_with(3);
        state.play_selected_list().unwrap();
        state.toggle_loop();

        let buf = draw(&mut state);
        let theme = Theme::default();

        assert_eq!(find_symbol(&buf, PREVIOUS_ICON).unwrap().fg, theme.text_muted);
        assert_eq!(find_symbol(&buf, NEXT_ICON).unwrap().fg, theme.text);
        assert_eq!(find_symbol(&buf, REPEAT_ICON).unwrap().fg, theme.accent);
        assert_eq!(find_symbol(&buf, SHUFFLE_ICON).unwrap().fg, theme.text);
    }
}
