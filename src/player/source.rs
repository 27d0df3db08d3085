use super::PlayerError;
use std::path::{Path, PathBuf};

/// Where an episode's audio lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    File(PathBuf),
    Remote(String),
}

impl MediaSource {
    /// Accepts plain paths, `file://` URLs and `http(s)://` URLs.
    pub fn parse(url: &str) -> Result<Self, PlayerError> {
        let url = url.trim();

        if url.is_empty() {
            return Err(PlayerError::UnsupportedUrl("empty url".to_string()));
        }

        if let Some(path) = url.strip_prefix("file://") {
            return Ok(MediaSource::File(PathBuf::from(path)));
        }

        if url.starts_with("http://") || url.starts_with("https://") {
            return Ok(MediaSource::Remote(url.to_string()));
        }

        match url.split_once("://") {
            Some(_) => Err(PlayerError::UnsupportedUrl(url.to_string())),
            None => Ok(MediaSource::File(crate::expand_tilde(url).map_err(|_| {
                PlayerError::UnsupportedUrl(url.to_string())
            })?)),
        }
    }

    /// Container hint for the decoder, derived from the file extension.
    pub fn hint(&self) -> Option<&'static str> {
        let ext = match self {
            MediaSource::File(path) => path.extension()?.to_str()?,
            MediaSource::Remote(url) => {
                let path = url.split(['?', '#']).next().unwrap_or(url);
                Path::new(path).extension()?.to_str()?
            }
        };

        let hint = match ext.to_ascii_lowercase().as_str() {
            "adif" | "adts" | "aac" => "aac",
            "caf" => "audio/x-caf",
            "m4a" | "m4b" | "m4p" | "m4r" | "mp4" => "audio/mp4",
            "mp3" | "bit" | "mpga" => "mp3",
            "mka" | "mkv" => "audio/matroska",
            "ogg" | "oga" | "ogm" | "ogv" | "ogx" | "spx" | "opus" => "audio/ogg",
            "flac" => "flac",
            "wav" | "wave" => "wav",
            _ => return None,
        };
        Some(hint)
    }
}
