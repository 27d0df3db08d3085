use anyhow::Context;
use clap::Parser;
use podcastr::{
    PlayerHandle, Settings,
    app_core::{Cli, Podcastr, init_logging},
    domain::EpisodeList,
    expand_tilde,
    ui_state::UiState,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(path) = cli.episodes {
        settings.episodes = expand_tilde(path)?;
    }

    let log_path = init_logging(&settings.log_level)?;
    info!(log = %log_path.display(), episodes = %settings.episodes.display(), "starting podcastr");

    let episodes = EpisodeList::load_from_file(&settings.episodes)?;
    let ui = UiState::new(episodes, &settings)?;
    let player = PlayerHandle::spawn().context("Could not start audio output")?;

    Podcastr::new(ui, player).run()
}
