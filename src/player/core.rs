use super::{MediaBackend, MediaSource, PlayerCommand, PlayerError, PlayerEvent, Subscription};
use crate::{REFRESH_RATE, domain::Episode};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};
use tracing::{debug, info, warn};

struct Loaded {
    episode: Arc<Episode>,
    source: MediaSource,
    subscription: Subscription,
}

/// Owns the audio backend on its own thread.
///
/// Commands come in, events go out; nothing else is shared with the UI.
pub(super) struct PlayerCore {
    backend: Box<dyn MediaBackend>,
    commands: Receiver<PlayerCommand>,
    events: Sender<PlayerEvent>,

    current: Option<Loaded>,
    looping: bool,
    last_second: Option<u64>,
}

impl PlayerCore {
    pub(super) fn new(
        backend: Box<dyn MediaBackend>,
        commands: Receiver<PlayerCommand>,
        events: Sender<PlayerEvent>,
    ) -> Self {
        PlayerCore {
            backend,
            commands,
            events,

            current: None,
            looping: false,
            last_second: None,
        }
    }

    pub(super) fn spawn<F>(
        init: F,
        commands: Receiver<PlayerCommand>,
        events: Sender<PlayerEvent>,
        ready: Sender<Result<(), PlayerError>>,
    ) -> JoinHandle<()>
    where
        F: FnOnce() -> Result<Box<dyn MediaBackend>, PlayerError> + Send + 'static,
    {
        thread::spawn(move || {
            let backend = match init() {
                Ok(backend) => {
                    let _ = ready.send(Ok(()));
                    backend
                }
                Err(e) => {
                    let _ = ready.send(Err(e));
                    return;
                }
            };

            PlayerCore::new(backend, commands, events).run();
        })
    }

    fn run(&mut self) {
        while self.step() {
            thread::sleep(REFRESH_RATE);
        }
        debug!("player thread exiting");
    }

    /// One iteration of the player loop. Returns false once the handle is gone.
    pub(super) fn step(&mut self) -> bool {
        if !self.process_commands() {
            return false;
        }
        self.check_track_end();
        self.emit_position();
        true
    }

    fn process_commands(&mut self) -> bool {
        loop {
            match self.commands.try_recv() {
                Ok(cmd) => match cmd {
                    PlayerCommand::Load {
                        episode,
                        subscription,
                        autoplay,
                    } => self.load(episode, subscription, autoplay),
                    PlayerCommand::Resume => self.resume(),
                    PlayerCommand::Pause => self.pause(),
                    PlayerCommand::Stop => self.stop(),
                    PlayerCommand::Seek(pos) => self.seek(pos),
                    PlayerCommand::SetLooping(looping) => self.looping = looping,
                },
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => return false,
            }
        }
    }

    fn emit(&self, event: PlayerEvent) {
        let _ = self.events.send(event);
    }

    fn check_track_end(&mut self) {
        // `current` is taken on the first end so the event fires once
        if self.current.is_none() || !self.backend.track_ended() {
            return;
        }

        if self.looping {
            if let Some(loaded) = &self.current {
                debug!(episode = %loaded.episode.id, "looping episode");
                match self.backend.load(&loaded.source) {
                    Ok(()) => {
                        self.backend.resume();
                        self.last_second = None;
                        return;
                    }
                    Err(e) => {
                        warn!(error = %e, "failed to restart looping episode");
                        self.emit(PlayerEvent::Error(loaded.subscription, e.to_string()));
                    }
                }
            }
        }

        if let Some(loaded) = self.current.take() {
            info!(episode = %loaded.episode.id, "episode ended");
            self.emit(PlayerEvent::Ended(loaded.subscription));
        }
    }

    fn emit_position(&mut self) {
        let Some(loaded) = &self.current else {
            return;
        };

        let position = self.backend.position();
        let second = position.as_secs();

        if self.last_second != Some(second) {
            self.last_second = Some(second);
            self.emit(PlayerEvent::Tick(loaded.subscription, position));
        }
    }
}

impl PlayerCore {
    fn load(&mut self, episode: Arc<Episode>, subscription: Subscription, autoplay: bool) {
        self.backend.stop();
        self.current = None;
        self.last_second = None;

        let result = MediaSource::parse(&episode.url)
            .and_then(|source| self.backend.load(&source).map(|()| source));

        let source = match result {
            Ok(source) => source,
            Err(e) => {
                warn!(episode = %episode.id, error = %e, "failed to load episode");
                self.emit(PlayerEvent::Error(subscription, e.to_string()));
                return;
            }
        };

        let duration = self
            .backend
            .duration()
            .unwrap_or_else(|| episode.get_duration());

        self.current = Some(Loaded {
            episode,
            source,
            subscription,
        });
        self.emit(PlayerEvent::MetadataReady(subscription, duration));

        match autoplay {
            true => {
                self.backend.resume();
                self.emit(PlayerEvent::Started(subscription));
            }
            false => self.emit(PlayerEvent::Paused(subscription)),
        }
    }

    fn resume(&mut self) {
        if let Some(loaded) = &self.current {
            if self.backend.is_paused() {
                self.backend.resume();
                self.emit(PlayerEvent::Started(loaded.subscription));
            }
        }
    }

    fn pause(&mut self) {
        if let Some(loaded) = &self.current {
            if !self.backend.is_paused() {
                self.backend.pause();
                self.emit(PlayerEvent::Paused(loaded.subscription));
            }
        }
    }

    fn stop(&mut self) {
        self.backend.stop();
        self.last_second = None;
        if let Some(loaded) = self.current.take() {
            self.emit(PlayerEvent::Stopped(loaded.subscription));
        }
    }

    fn seek(&mut self, position: Duration) {
        let Some(loaded) = &self.current else {
            return;
        };

        if let Err(e) = self.backend.seek(position) {
            warn!(error = %e, ?position, "seek failed");
            self.emit(PlayerEvent::Error(loaded.subscription, e.to_string()));
        }
    }
}
