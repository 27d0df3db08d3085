mod app;
mod cli;
mod logging;

pub use app::Podcastr;
pub use cli::Cli;
pub use logging::init_logging;
