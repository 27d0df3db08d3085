use super::Episode;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{collections::HashSet, path::Path, sync::Arc};

/// The episodes available for playback, in feed order.
#[derive(Debug, Default, Deserialize)]
pub struct EpisodeList {
    #[serde(default)]
    episodes: Vec<Arc<Episode>>,
}

impl EpisodeList {
    pub fn new(episodes: Vec<Arc<Episode>>) -> Self {
        EpisodeList { episodes }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_str = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read episode list: {}", path.display()))?;

        Self::from_toml(&file_str)
            .with_context(|| format!("Invalid episode list: {}", path.display()))
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        let list = toml::from_str::<EpisodeList>(s)?;

        let mut seen = HashSet::new();
        for episode in &list.episodes {
            if !seen.insert(episode.id.as_str()) {
                bail!("Duplicate episode id: \"{}\"", episode.id);
            }
        }

        Ok(list)
    }

    pub fn episodes(&self) -> &[Arc<Episode>] {
        &self.episodes
    }

    pub fn get(&self, idx: usize) -> Option<&Arc<Episode>> {
        self.episodes.get(idx)
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}
