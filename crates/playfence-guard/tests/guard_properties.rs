//! Integration tests for range enforcement over a simulated engine.
//!
//! Two layers are exercised: the pure transition function ([`RangeGuard`])
//! fed hand-picked event orders — including hostile ones a well-behaved
//! engine would never produce — and a full [`PlayerSession`] driven
//! through the [`SimulatedPlayer`], echoes and all.

use playfence_guard::{AuthorisedRange, EchoState, Notice, PlayerSession, RangeGuard};
use playfence_player::{Command, Player, PlayerEvent, Seconds, SimulatedPlayer};

// =========================================================================
// Helpers
// =========================================================================

fn window() -> AuthorisedRange {
    AuthorisedRange::new(Seconds(10.0), Seconds(15.0)).unwrap()
}

fn guard() -> RangeGuard {
    RangeGuard::new(window())
}

fn seeking(position: f64) -> PlayerEvent {
    PlayerEvent::Seeking {
        position: Seconds(position),
    }
}

fn timeupdate(position: f64) -> PlayerEvent {
    PlayerEvent::TimeUpdate {
        position: Seconds(position),
    }
}

/// Drains the engine's event queue through the session until it settles,
/// returning every notice produced.
///
/// The iteration bound doubles as the no-feedback-loop check: a guard that
/// corrected its own corrections would keep the queue alive forever.
fn pump(session: &mut PlayerSession<SimulatedPlayer>) -> Vec<Notice> {
    let mut notices = Vec::new();
    for _ in 0..64 {
        let Some(event) = session.player_mut().next_event() else {
            return notices;
        };
        let notice = match event {
            PlayerEvent::Load => session.notify_load(),
            PlayerEvent::TimeUpdate { .. } => session.notify_timeupdate(),
            PlayerEvent::Seeking { .. } => session.notify_seeking(),
        };
        notices.extend(notice);
    }
    panic!("event queue did not settle — corrective feedback loop");
}

fn seek_count(sim: &SimulatedPlayer) -> usize {
    sim.commands()
        .iter()
        .filter(|c| matches!(c, Command::SeekTo { .. }))
        .count()
}

/// A session that has been loaded and pumped to a steady playing state.
fn playing_session() -> PlayerSession<SimulatedPlayer> {
    let mut session = PlayerSession::attach(SimulatedPlayer::new(), window());
    session.player_mut().load();
    pump(&mut session);
    session
}

// =========================================================================
// Load invariant: any initial position ends at `start`, playing.
// =========================================================================

#[test]
fn test_load_invariant_for_any_initial_position() {
    for initial in [0.0, 3.0, 10.0, 14.9, 15.0, 20.0, 3600.0] {
        let mut session = PlayerSession::attach(
            SimulatedPlayer::with_position(Seconds(initial)),
            window(),
        );
        session.player_mut().load();
        let notices = pump(&mut session);

        assert_eq!(
            session.player().current_time(),
            Seconds(10.0),
            "initial position {initial}"
        );
        assert!(session.player().is_playing(), "initial position {initial}");
        assert!(notices
            .iter()
            .any(|n| matches!(n, Notice::SegmentStarted { .. })));
    }
}

#[test]
fn test_load_scenario_commands_and_status() {
    let mut session = PlayerSession::attach(SimulatedPlayer::new(), window());
    session.player_mut().load();
    let notices = pump(&mut session);

    assert_eq!(
        session.player().commands(),
        &[
            Command::SeekTo {
                position: Seconds(10.0)
            },
            Command::Play,
        ]
    );
    assert_eq!(
        notices[0].to_string(),
        "Playing authorised segment (10s - 15s)."
    );
}

// =========================================================================
// Upper-bound invariant: any position ≥ end pauses and rewinds to start.
// =========================================================================

#[test]
fn test_upper_bound_invariant() {
    for past_end in [15.0, 15.2, 17.0, 100.0] {
        let mut g = guard();
        let out = g.handle(timeupdate(past_end));
        assert_eq!(
            out.commands,
            vec![
                Command::Pause,
                Command::SeekTo {
                    position: Seconds(10.0)
                },
            ],
            "position {past_end}"
        );
    }
}

#[test]
fn test_playout_reaches_boundary_and_rewinds() {
    let mut session = playing_session();
    // Play through the window in engine-sized steps until past the end.
    for _ in 0..22 {
        session.player_mut().advance(Seconds(0.25));
    }
    let notices = pump(&mut session);

    assert_eq!(session.player().current_time(), Seconds(10.0));
    assert!(!session.player().is_playing());
    let finished: Vec<_> = notices
        .iter()
        .filter(|n| matches!(n, Notice::SegmentFinished { .. }))
        .collect();
    assert_eq!(finished.len(), 1, "exactly one rewind for one playout");
    assert_eq!(
        finished[0].to_string(),
        "Playback finished. Rewinded to 10s."
    );
}

// =========================================================================
// Seek-clamp invariant: out-of-range targets land on the nearer boundary.
// =========================================================================

#[test]
fn test_seek_clamp_invariant_below_start() {
    for target in [0.0, 3.0, 9.9] {
        let mut session = playing_session();
        session.player_mut().user_seek(Seconds(target));
        pump(&mut session);
        assert_eq!(
            session.player().current_time(),
            Seconds(10.0),
            "target {target}"
        );
    }
}

#[test]
fn test_seek_clamp_invariant_above_end() {
    for target in [15.1, 20.0, 500.0] {
        let mut session = playing_session();
        session.player_mut().user_seek(Seconds(target));
        pump(&mut session);

        // The correction lands on the end boundary...
        assert!(
            session.player().commands().contains(&Command::SeekTo {
                position: Seconds(15.0)
            }),
            "target {target}"
        );
        // ...and because the boundary is the rewind trigger, the next
        // position report sends playback back to the window start, paused.
        assert_eq!(
            session.player().current_time(),
            Seconds(10.0),
            "target {target}"
        );
        assert!(!session.player().is_playing(), "target {target}");
    }
}

#[test]
fn test_clamp_to_end_boundary_scenario() {
    // A request for 20s bounds to min(max(20, 10), 15) = 15.
    let mut g = guard();
    let out = g.handle(seeking(20.0));
    assert_eq!(
        out.commands,
        vec![Command::SeekTo {
            position: Seconds(15.0)
        }]
    );
}

// =========================================================================
// In-range passthrough: seeks inside the window are untouched.
// =========================================================================

#[test]
fn test_in_range_seek_passthrough() {
    for target in [10.0, 12.0, 14.999] {
        let mut session = playing_session();
        let before = seek_count(session.player());
        session.player_mut().user_seek(Seconds(target));
        pump(&mut session);
        assert_eq!(
            seek_count(session.player()),
            before,
            "no correction for in-range target {target}"
        );
        assert_eq!(session.player().current_time(), Seconds(target));
    }
}

#[test]
fn test_user_seek_exactly_to_end_is_accepted_then_rewound() {
    // The seek itself passes the strict out-of-range check, but the
    // position report that follows sits on the inclusive boundary and
    // triggers the normal rewind.
    let mut session = playing_session();
    session.player_mut().user_seek(Seconds(15.0));
    let notices = pump(&mut session);

    assert_eq!(session.player().current_time(), Seconds(10.0));
    assert!(!session.player().is_playing());
    assert!(notices
        .iter()
        .any(|n| matches!(n, Notice::SegmentFinished { .. })));
}

// =========================================================================
// No feedback loop: one drag, one correction, queue settles.
// =========================================================================

#[test]
fn test_single_correction_per_out_of_range_drag() {
    let mut session = playing_session();
    let before = seek_count(session.player());

    // Scenario: viewer drags to 3s. The guard corrects to 10s; the
    // correction's own seeking/timeupdate echoes produce nothing further.
    session.player_mut().user_seek(Seconds(3.0));
    let notices = pump(&mut session);

    assert_eq!(seek_count(session.player()), before + 1);
    assert!(notices.is_empty());
    assert_eq!(session.guard().echo_state(), EchoState::Idle);
}

#[test]
fn test_repeated_drags_each_get_one_correction() {
    let mut session = playing_session();
    let before = seek_count(session.player());
    for target in [3.0, 1.0, 9.9] {
        session.player_mut().user_seek(Seconds(target));
        pump(&mut session);
    }
    assert_eq!(seek_count(session.player()), before + 3);
}

// =========================================================================
// Idempotence: rewinding when already at start changes nothing.
// =========================================================================

#[test]
fn test_boundary_rewind_from_start_is_a_no_op_in_effect() {
    let mut g = guard();
    let out = g.handle(timeupdate(15.0));
    assert_eq!(
        out.commands,
        vec![
            Command::Pause,
            Command::SeekTo {
                position: Seconds(10.0)
            },
        ]
    );
    // Applied to a player already paused at 10s, neither command moves
    // the observable state.
    let mut sim = SimulatedPlayer::with_position(Seconds(10.0));
    sim.pause();
    let pos = sim.current_time();
    let playing = sim.is_playing();
    sim.pause();
    sim.seek_to(Seconds(10.0));
    assert_eq!(sim.current_time(), pos);
    assert_eq!(sim.is_playing(), playing);
}

// =========================================================================
// Adversarial event orders — the echo assumptions, made explicit.
// =========================================================================

#[test]
fn test_engine_that_skips_the_seek_notification() {
    // Some engines report a programmatic jump with a bare timeupdate.
    let mut g = guard();
    g.handle(seeking(3.0));
    assert_eq!(g.echo_state(), EchoState::AwaitingSeekEcho);

    assert!(g.handle(timeupdate(10.0)).is_empty());
    assert_eq!(g.echo_state(), EchoState::Idle);

    // The tracker settled — the next genuine seek is still corrected.
    let out = g.handle(seeking(20.0));
    assert_eq!(
        out.commands,
        vec![Command::SeekTo {
            position: Seconds(15.0)
        }]
    );
}

#[test]
fn test_fresh_seek_before_the_echo_settles_is_still_corrected() {
    let mut g = guard();
    g.handle(seeking(3.0));
    // Echo part one arrives...
    assert!(g.handle(seeking(10.0)).is_empty());
    assert_eq!(g.echo_state(), EchoState::AwaitingTimeupdateEcho);

    // ...but the viewer drags again before the position report lands.
    // This seeking is NOT the echo and must be evaluated.
    let out = g.handle(seeking(2.0));
    assert_eq!(
        out.commands,
        vec![Command::SeekTo {
            position: Seconds(10.0)
        }]
    );
}

#[test]
fn test_interleaved_out_of_range_timeupdate_consumes_the_echo() {
    // Known design point: the echo tracker absorbs the first timeupdate
    // after a correction even if the engine reports a stale out-of-range
    // position. The next report is evaluated normally.
    let mut g = guard();
    g.handle(seeking(20.0));
    assert!(g.handle(timeupdate(16.0)).is_empty());

    let out = g.handle(timeupdate(16.0));
    assert_eq!(
        out.commands,
        vec![
            Command::Pause,
            Command::SeekTo {
                position: Seconds(10.0)
            },
        ]
    );
}

#[test]
fn test_load_never_consumes_a_pending_echo() {
    let mut g = guard();
    g.handle(seeking(3.0));
    // A (re)load arrives before the echo. Load re-clamps and re-arms.
    let out = g.handle(PlayerEvent::Load);
    assert_eq!(out.commands.len(), 2);
    assert_eq!(g.echo_state(), EchoState::AwaitingSeekEcho);
}

#[test]
fn test_boundary_rewind_echoes_are_evaluated_not_absorbed() {
    // The rewind deliberately leaves the tracker idle; its echoes land on
    // start and pass the checks on their own merits.
    let mut g = guard();
    g.handle(timeupdate(15.3));
    assert_eq!(g.echo_state(), EchoState::Idle);
    assert!(g.handle(seeking(10.0)).is_empty());
    assert!(g.handle(timeupdate(10.0)).is_empty());
}
