//! The range guard: one pure transition function over player events.

use std::fmt;

use playfence_player::{Command, PlayerEvent, Seconds};

use crate::{AuthorisedRange, EchoState};

/// What one event produced: commands for the player, and possibly a
/// user-facing notice.
///
/// Commands are ordered — a boundary rewind is a `Pause` *then* a `SeekTo`,
/// and the binding must apply them in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Commands to issue to the player, in order.
    pub commands: Vec<Command>,
    /// A status change worth showing the viewer, if any.
    pub notice: Option<Notice>,
}

impl Outcome {
    /// The empty outcome: nothing to issue, nothing to report.
    pub fn none() -> Self {
        Self {
            commands: Vec::new(),
            notice: None,
        }
    }

    /// Whether this outcome carries no commands and no notice.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.notice.is_none()
    }
}

/// A viewer-facing status change decided by the guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notice {
    /// The authorised segment started playing from its beginning.
    SegmentStarted { range: AuthorisedRange },

    /// Playback reached the end of the segment and was rewound.
    SegmentFinished { start: Seconds },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::SegmentStarted { range } => {
                write!(f, "Playing authorised segment ({range}).")
            }
            Notice::SegmentFinished { start } => {
                write!(f, "Playback finished. Rewinded to {start}.")
            }
        }
    }
}

/// Enforces an [`AuthorisedRange`] over a stream of player events.
///
/// The guard is total: [`handle`](Self::handle) accepts any event in any
/// state, performs no I/O, and cannot fail. Its entire mutable state is
/// the [`EchoState`] distinguishing its own corrective seeks from viewer
/// actions. One guard exists per player session; its state is owned, never
/// shared, and every call runs to completion before the next — no locking.
///
/// Enforcement rules:
///
/// - **load** — clamp to `start`, then play. The first frame shown is
///   always inside the window, whatever the engine's native start position.
/// - **timeupdate** — positions at or past `end` pause playback and rewind
///   to `start`. The rewind deliberately does NOT arm the echo tracker:
///   its own echoes land on `start`, which is strictly inside the window
///   (guaranteed at range construction), so they pass the checks idly.
///   Arming here would buy nothing and hide a genuine event.
/// - **seeking** — positions strictly outside `[start, end]` are clamped
///   back in with a single corrective seek; the echo tracker absorbs the
///   events that seek reflects back.
#[derive(Debug)]
pub struct RangeGuard {
    range: AuthorisedRange,
    echo: EchoState,
}

impl RangeGuard {
    /// Creates a guard enforcing `range`.
    pub fn new(range: AuthorisedRange) -> Self {
        Self {
            range,
            echo: EchoState::Idle,
        }
    }

    /// The window this guard enforces.
    pub fn range(&self) -> AuthorisedRange {
        self.range
    }

    /// Where the guard stands relative to its last corrective seek.
    pub fn echo_state(&self) -> EchoState {
        self.echo
    }

    /// Processes one player event and returns what to do about it.
    pub fn handle(&mut self, event: PlayerEvent) -> Outcome {
        match event {
            PlayerEvent::Load => self.on_load(),
            PlayerEvent::TimeUpdate { position } => self.on_timeupdate(position),
            PlayerEvent::Seeking { position } => self.on_seeking(position),
        }
    }

    fn on_load(&mut self) -> Outcome {
        let mut commands = Vec::new();
        self.clamp_to_range(self.range.start(), &mut commands);
        commands.push(Command::Play);
        tracing::debug!(range = %self.range, "loaded, starting authorised segment");
        Outcome {
            commands,
            notice: Some(Notice::SegmentStarted { range: self.range }),
        }
    }

    fn on_timeupdate(&mut self, position: Seconds) -> Outcome {
        if self.echo.observe_timeupdate() {
            tracing::trace!(%position, "timeupdate absorbed as correction echo");
            return Outcome::none();
        }
        if position >= self.range.end() {
            tracing::debug!(%position, end = %self.range.end(), "boundary reached, rewinding");
            // Unsuppressed on purpose: the rewind lands on `start`, which
            // is strictly below `end`, so its echoes pass the checks.
            return Outcome {
                commands: vec![
                    Command::Pause,
                    Command::SeekTo {
                        position: self.range.start(),
                    },
                ],
                notice: Some(Notice::SegmentFinished {
                    start: self.range.start(),
                }),
            };
        }
        Outcome::none()
    }

    fn on_seeking(&mut self, position: Seconds) -> Outcome {
        if self.echo.observe_seeking() {
            tracing::trace!(%position, "seeking absorbed as correction echo");
            return Outcome::none();
        }
        if !self.range.admits(position) {
            tracing::debug!(%position, range = %self.range, "seek left the window, clamping");
            let mut commands = Vec::new();
            self.clamp_to_range(position, &mut commands);
            return Outcome {
                commands,
                notice: None,
            };
        }
        Outcome::none()
    }

    /// Issues the single corrective seek, arming the echo tracker first.
    ///
    /// The only place the tracker is armed.
    fn clamp_to_range(&mut self, target: Seconds, commands: &mut Vec<Command>) {
        let bounded = self.range.clamp(target);
        self.echo.arm();
        commands.push(Command::SeekTo { position: bounded });
    }
}
