mod episode;
mod episode_list;

pub use episode::Episode;
pub use episode_list::EpisodeList;

#[cfg(test)]
pub(crate) use episode::test_episode;
