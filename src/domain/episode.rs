use crate::format_time;
use serde::Deserialize;
use std::time::Duration;

/// One playable unit of a podcast feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    /// Display string listing the people on the episode.
    pub members: String,
    /// Reference to the cover image, never fetched by the player.
    pub thumbnail: String,
    /// Media source: a local path, a `file://` URL or an `http(s)://` URL.
    pub url: String,
    /// Length in whole seconds.
    pub duration: u64,

    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Episode {
    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_members(&self) -> &str {
        &self.members
    }

    pub fn get_duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }

    pub fn get_duration_str(&self) -> String {
        format_time(self.duration)
    }
}

#[cfg(test)]
pub(crate) fn test_episode(id: &str, duration: u64) -> Episode {
    Episode {
        id: id.to_string(),
        title: format!("Episode {id}"),
        members: "Diego, Richard".to_string(),
        thumbnail: format!("https://example.com/{id}.jpg"),
        url: format!("/podcasts/{id}.mp3"),
        duration,
        published_at: None,
        description: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_string_uses_player_format() {
        let episode = test_episode("a", 3661);
        assert_eq!(episode.get_duration_str(), "61:01");
        assert_eq!(episode.get_duration(), Duration::from_secs(3661));
    }
}
