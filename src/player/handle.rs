use super::{
    MediaBackend, MediaControl, PlayerCommand, PlayerError, PlayerEvent, RodioBackend,
    Subscription, core::PlayerCore,
};
use crate::domain::Episode;
use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use std::{sync::Arc, time::Duration};

/// The UI thread's end of the player.
pub struct PlayerHandle {
    commands: Sender<PlayerCommand>,
    events: Receiver<PlayerEvent>,
}

impl PlayerHandle {
    /// Starts the player thread on the default audio output.
    pub fn spawn() -> Result<Self, PlayerError> {
        Self::spawn_with(RodioBackend::new)
    }

    /// Starts the player thread with a backend built by `init`.
    ///
    /// The backend is constructed on the player thread itself, so it never
    /// has to cross threads. Returns once construction has finished.
    pub fn spawn_with<B, F>(init: F) -> Result<Self, PlayerError>
    where
        B: MediaBackend + 'static,
        F: FnOnce() -> Result<B, PlayerError> + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();
        let (ready_tx, ready_rx) = bounded(1);

        PlayerCore::spawn(
            move || init().map(|backend| Box::new(backend) as Box<dyn MediaBackend>),
            cmd_rx,
            evt_tx,
            ready_tx,
        );

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                commands: cmd_tx,
                events: evt_rx,
            }),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(PlayerError::Disconnected),
        }
    }

    fn send(&self, cmd: PlayerCommand) -> Result<()> {
        self.commands
            .send(cmd)
            .map_err(|_| PlayerError::Disconnected)?;
        Ok(())
    }

    /// Drains every event emitted since the last call.
    pub fn poll_events(&mut self) -> Vec<PlayerEvent> {
        std::iter::from_fn(|| self.events.try_recv().ok()).collect()
    }

    /// Blocks for the next event, up to `timeout`.
    pub fn wait_event(&self, timeout: Duration) -> Option<PlayerEvent> {
        self.events.recv_timeout(timeout).ok()
    }
}

impl MediaControl for PlayerHandle {
    fn load(
        &self,
        episode: Arc<Episode>,
        subscription: Subscription,
        autoplay: bool,
    ) -> Result<()> {
        self.send(PlayerCommand::Load {
            episode,
            subscription,
            autoplay,
        })
    }

    fn resume(&self) -> Result<()> {
        self.send(PlayerCommand::Resume)
    }

    fn pause(&self) -> Result<()> {
        self.send(PlayerCommand::Pause)
    }

    fn stop(&self) -> Result<()> {
        self.send(PlayerCommand::Stop)
    }

    fn seek(&self, position: Duration) -> Result<()> {
        self.send(PlayerCommand::Seek(position))
    }

    fn set_looping(&self, looping: bool) -> Result<()> {
        self.send(PlayerCommand::SetLooping(looping))
    }
}
