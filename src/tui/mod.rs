mod layout;
mod renderer;
mod widgets;

pub use layout::AppLayout;
pub use renderer::render;
pub use widgets::{EpisodeTable, ErrorMsg, HintLine, PlayerPanel};
