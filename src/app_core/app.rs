use crate::{
    key_handler::{self, Action},
    overwrite_line,
    player::{MediaControl, PlayerHandle},
    tui,
    ui_state::{Mode, UiState},
};
use anyhow::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{Event, KeyEventKind},
};
use tracing::info;

pub struct Podcastr {
    ui: UiState,
    player: PlayerHandle,
}

impl Podcastr {
    pub fn new(ui: UiState, player: PlayerHandle) -> Self {
        Podcastr { ui, player }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        let result = terminal
            .clear()
            .map_err(anyhow::Error::from)
            .and_then(|_| self.main_loop(&mut terminal));

        ratatui::restore();
        overwrite_line("Thank you for using podcastr!\n\n")?;

        result
    }

    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        info!("entering main loop");

        loop {
            let events = self.player.poll_events();
            self.ui.handle_player_events(events);

            // Check for user input
            match key_handler::next_event()? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_handler::handle_key_event(key, &self.ui) {
                        if let Err(e) = self.handle_action(action) {
                            self.ui.set_error(e);
                        }
                    }
                }
                _ => (),
            }

            if let Err(e) = self.ui.sync_media(&self.player) {
                self.ui.set_error(e);
            }

            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            if self.ui.get_mode() == Mode::Quit {
                let _ = self.player.stop();
                break;
            }
        }

        info!("leaving main loop");
        Ok(())
    }
}

impl Podcastr {
    #[rustfmt::skip]
    fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Player
            Action::TogglePlay      => self.ui.toggle_play(),
            Action::PlayNext        => self.ui.play_next(),
            Action::PlayPrev        => self.ui.play_previous(),
            Action::ToggleShuffle   => self.ui.toggle_shuffle(),
            Action::ToggleLoop      => self.ui.toggle_loop(),
            Action::SeekForward(s)  => self.ui.seek_forward(s, &self.player)?,
            Action::SeekBack(s)     => self.ui.seek_back(s, &self.player)?,

            // Episode list
            Action::PlaySelected    => self.ui.play_selected_list()?,
            Action::PlaySingle      => self.ui.play_selected_single()?,
            Action::Scroll(s)       => self.ui.scroll(s),

            // Ops
            Action::ClearError      => self.ui.clear_error(),
            Action::Quit            => self.ui.set_mode(Mode::Quit),
        }
        Ok(())
    }
}
