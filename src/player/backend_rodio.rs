use super::{MediaBackend, MediaSource, PlayerError};
use rodio::{
    Decoder, OutputStream, OutputStreamBuilder, Sink, Source,
};
use std::{
    fs::File,
    io::{BufReader, Cursor, Read, Seek},
    time::Duration,
};
use tracing::debug;

pub struct RodioBackend {
    sink: Sink,
    _stream: OutputStream,
    loaded: bool,
    duration: Option<Duration>,
}

impl RodioBackend {
    pub fn new() -> Result<Self, PlayerError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        stream.log_on_drop(false);
        let sink = Sink::connect_new(stream.mixer());
        sink.pause();

        Ok(Self {
            sink,
            _stream: stream,
            loaded: false,
            duration: None,
        })
    }

    fn append<S>(&mut self, source: S)
    where
        S: Source<Item = f32> + Send + 'static,
    {
        self.duration = source.total_duration();

        // `clear` also pauses the sink
        self.sink.clear();
        self.sink.append(source);
        self.loaded = true;
    }
}

impl MediaBackend for RodioBackend {
    fn load(&mut self, source: &MediaSource) -> Result<(), PlayerError> {
        self.stop();

        match source {
            MediaSource::File(path) => {
                let file = File::open(path)?;
                let len = file.metadata()?.len();
                let decoder = decode(BufReader::new(file), len, source.hint())?;
                self.append(decoder);
            }
            MediaSource::Remote(url) => {
                debug!(url, "fetching remote media");
                let bytes = reqwest::blocking::get(url)?
                    .error_for_status()?
                    .bytes()?
                    .to_vec();
                let len = bytes.len() as u64;
                let decoder = decode(Cursor::new(bytes), len, source.hint())?;
                self.append(decoder);
            }
        }

        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn resume(&mut self) {
        self.sink.play();
    }

    fn stop(&mut self) {
        self.sink.clear();
        self.loaded = false;
        self.duration = None;
    }

    fn seek(&mut self, position: Duration) -> Result<(), PlayerError> {
        self.sink
            .try_seek(position)
            .map_err(|e| PlayerError::Seek(e.to_string()))
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn is_paused(&self) -> bool {
        self.sink.is_paused()
    }

    fn is_stopped(&self) -> bool {
        !self.loaded || self.sink.empty()
    }

    fn track_ended(&self) -> bool {
        self.loaded && self.sink.empty()
    }
}

fn decode<R>(data: R, len: u64, hint: Option<&str>) -> Result<Decoder<R>, PlayerError>
where
    R: Read + Seek + Send + Sync + 'static,
{
    let mut builder = Decoder::builder()
        .with_data(data)
        .with_byte_len(len)
        .with_coarse_seek(true)
        .with_seekable(true);

    if let Some(hint) = hint {
        builder = builder.with_hint(hint);
    }

    Ok(builder.build()?)
}
