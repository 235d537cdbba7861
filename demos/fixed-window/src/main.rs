//! Offline walkthrough of a guarded playback session.
//!
//! Uses the simulated engine, so it runs without the real authorisation
//! service or a display: establish a session, load, let the viewer fight
//! the guard, and play out to the boundary.

use playfence::establish;
use playfence_guard::PlayerSession;
use playfence_otp::{Authorizer, Credentials, OtpError};
use playfence_player::{Player, PlayerEvent, Seconds, SimulatedPlayer};
use tracing_subscriber::EnvFilter;

/// Hands out canned credentials so the demo runs offline.
struct CannedAuthorizer;

impl Authorizer for CannedAuthorizer {
    async fn authorize(&self) -> Result<Credentials, OtpError> {
        Ok(Credentials {
            otp: "demo-otp".into(),
            playback_info: "demo-playback-info".into(),
        })
    }
}

/// Drains the engine's queued notifications through the session,
/// printing every status change the guard decides.
fn pump(session: &mut PlayerSession<SimulatedPlayer>) {
    while let Some(event) = session.player_mut().next_event() {
        let notice = match event {
            PlayerEvent::Load => session.notify_load(),
            PlayerEvent::TimeUpdate { .. } => session.notify_timeupdate(),
            PlayerEvent::Seeking { .. } => session.notify_seeking(),
        };
        if let Some(notice) = notice {
            println!("status: {notice}");
        }
    }
}

/// Runs playback in engine-sized steps until the guard pauses it at the
/// boundary (or the step budget runs out).
fn play_out(session: &mut PlayerSession<SimulatedPlayer>) {
    for _ in 0..16 {
        if !session.player().is_playing() {
            return;
        }
        session.player_mut().advance(Seconds(0.5));
        pump(session);
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut session = match establish(&CannedAuthorizer, |credentials| {
        tracing::debug!(otp = %credentials.otp, "constructing simulated engine");
        Ok(SimulatedPlayer::new())
    })
    .await
    {
        Ok(session) => session,
        Err(error) => {
            tracing::error!(%error, "player setup failed");
            eprintln!("Unable to start playback. See logs for details.");
            std::process::exit(1);
        }
    };

    // The asset loads at its natural beginning; the guard moves playback
    // into the window and starts it.
    session.player_mut().load();
    pump(&mut session);
    println!("after load: playhead {}", session.player().current_time());

    // Below the window — corrected to its start.
    session.player_mut().user_seek(Seconds(3.0));
    pump(&mut session);
    println!("after drag to 3s: playhead {}", session.player().current_time());

    // Inside the window — untouched.
    session.player_mut().user_seek(Seconds(12.0));
    pump(&mut session);
    println!("after drag to 12s: playhead {}", session.player().current_time());

    // Let playback run out; the guard pauses and rewinds at the boundary.
    play_out(&mut session);
    println!(
        "after playout: playhead {}, playing: {}",
        session.player().current_time(),
        session.player().is_playing()
    );

    // Past the window — clamped to the boundary, and since the boundary
    // is the rewind trigger, the next position report sends playback
    // back to the window start.
    session.player_mut().user_seek(Seconds(20.0));
    pump(&mut session);
    println!("after drag to 20s: playhead {}", session.player().current_time());
}
