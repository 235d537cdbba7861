//! Session glue: one player, one guard, for the life of the page.

use playfence_player::{Command, Player, PlayerEvent};

use crate::{AuthorisedRange, Notice, Outcome, RangeGuard};

/// One live player instance with a [`RangeGuard`] attached.
///
/// Created by [`attach`](Self::attach), exactly once per session. The
/// session owns both the player binding and the guard; the engine binding
/// calls the `notify_*` methods as the corresponding engine events fire,
/// and the session queries the position, runs the transition function, and
/// applies whatever commands come back — synchronously, one notification
/// at a time.
///
/// Attaching twice to the same underlying engine is not supported; the
/// ownership model makes it hard to do by accident (a second session would
/// need a second binding to the engine).
pub struct PlayerSession<P: Player> {
    player: P,
    guard: RangeGuard,
}

impl<P: Player> PlayerSession<P> {
    /// Attaches a guard for `range` to `player`.
    pub fn attach(player: P, range: AuthorisedRange) -> Self {
        tracing::info!(%range, "range guard attached");
        Self {
            player,
            guard: RangeGuard::new(range),
        }
    }

    /// The engine reported that the asset finished loading.
    pub fn notify_load(&mut self) -> Option<Notice> {
        let outcome = self.guard.handle(PlayerEvent::Load);
        self.apply(outcome)
    }

    /// The engine reported a position update during playback.
    pub fn notify_timeupdate(&mut self) -> Option<Notice> {
        let position = self.player.current_time();
        let outcome = self.guard.handle(PlayerEvent::TimeUpdate { position });
        self.apply(outcome)
    }

    /// The engine reported that a seek began.
    pub fn notify_seeking(&mut self) -> Option<Notice> {
        let position = self.player.current_time();
        let outcome = self.guard.handle(PlayerEvent::Seeking { position });
        self.apply(outcome)
    }

    /// The guard attached to this session.
    pub fn guard(&self) -> &RangeGuard {
        &self.guard
    }

    /// The player binding this session owns.
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Mutable access to the player binding (drains a simulated engine's
    /// event queue, for instance).
    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    fn apply(&mut self, outcome: Outcome) -> Option<Notice> {
        for command in &outcome.commands {
            match *command {
                Command::SeekTo { position } => self.player.seek_to(position),
                Command::Play => self.player.play(),
                Command::Pause => self.player.pause(),
            }
        }
        if let Some(notice) = &outcome.notice {
            tracing::info!(%notice, "playback status changed");
        }
        outcome.notice
    }
}
