//! A deterministic in-process engine for demos and tests.

use std::collections::VecDeque;

use crate::{Command, Player, PlayerEvent, Seconds};

/// A simulated media engine.
///
/// Tracks a playhead and a playing/paused flag, records every [`Command`]
/// it receives, and queues the notifications a real engine would emit:
///
/// - a programmatic [`seek_to`](Player::seek_to) queues a `Seeking`
///   notification followed by a `TimeUpdate` at the new position (the echo
///   contract the guard layer depends on);
/// - [`advance`](Self::advance) moves the playhead while playing and queues
///   a `TimeUpdate`, standing in for the engine's own report cadence;
/// - [`user_seek`](Self::user_seek) models the viewer grabbing the scrub
///   bar — same notifications as a programmatic seek, but originating
///   outside the guard.
///
/// Drain notifications with [`next_event`](Self::next_event) and feed them
/// to whatever is attached on top.
#[derive(Debug, Default)]
pub struct SimulatedPlayer {
    position: Seconds,
    playing: bool,
    pending: VecDeque<PlayerEvent>,
    commands: Vec<Command>,
}

impl SimulatedPlayer {
    /// Creates a paused engine with the playhead at the asset's beginning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a paused engine with the playhead at `position`.
    pub fn with_position(position: Seconds) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Signals that the asset finished loading.
    pub fn load(&mut self) {
        self.pending.push_back(PlayerEvent::Load);
    }

    /// Advances playback by `dt` and queues the position report.
    ///
    /// No-op while paused — a real engine stops reporting too.
    pub fn advance(&mut self, dt: Seconds) {
        if !self.playing {
            return;
        }
        self.position = Seconds(self.position.0 + dt.0);
        self.pending.push_back(PlayerEvent::TimeUpdate {
            position: self.position,
        });
    }

    /// Models a viewer-initiated seek to `target`.
    pub fn user_seek(&mut self, target: Seconds) {
        tracing::trace!(%target, "user seek");
        self.position = target;
        self.pending.push_back(PlayerEvent::Seeking { position: target });
        self.pending.push_back(PlayerEvent::TimeUpdate { position: target });
    }

    /// Pops the next queued notification.
    pub fn next_event(&mut self) -> Option<PlayerEvent> {
        self.pending.pop_front()
    }

    /// Every command received so far, in order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Whether playback is currently running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Player for SimulatedPlayer {
    fn current_time(&self) -> Seconds {
        self.position
    }

    fn seek_to(&mut self, position: Seconds) {
        tracing::trace!(%position, "programmatic seek");
        self.commands.push(Command::SeekTo { position });
        self.position = position;
        // Echo contract: the jump surfaces as a seek notification and a
        // position report.
        self.pending.push_back(PlayerEvent::Seeking { position });
        self.pending.push_back(PlayerEvent::TimeUpdate { position });
    }

    fn play(&mut self) {
        self.commands.push(Command::Play);
        self.playing = true;
    }

    fn pause(&mut self) {
        self.commands.push(Command::Pause);
        self.playing = false;
    }
}
