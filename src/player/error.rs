use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Could not open audio output: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("Could not read media: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not fetch media: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Unsupported media: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("Seek failed: {0}")]
    Seek(String),

    #[error("Unsupported media location: {0}")]
    UnsupportedUrl(String),

    #[error("Player thread is not running")]
    Disconnected,
}
