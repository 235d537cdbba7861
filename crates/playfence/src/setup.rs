//! Session setup: credentials → player construction → guard attachment.
//!
//! Everything that can fail happens here, before the guard exists. The
//! guard itself is total — if setup succeeds it is attached exactly once
//! and never detached; if any step fails the guard is never attached and
//! the caller surfaces a generic "unable to start playback" state while
//! the underlying cause goes to the logs. No step is retried.

use playfence_guard::{AuthorisedRange, PlayerSession};
use playfence_otp::{Authorizer, Credentials, OtpError};
use playfence_player::{Player, Seconds};

/// First authorised position of this deployment's window.
pub const WINDOW_START: Seconds = Seconds(10.0);

/// Boundary position of this deployment's window.
pub const WINDOW_END: Seconds = Seconds(15.0);

/// The authorised playback window for this deployment.
pub fn authorised_window() -> AuthorisedRange {
    AuthorisedRange::new(WINDOW_START, WINDOW_END)
        .expect("deployment window bounds are ordered")
}

/// Errors that end a session before the guard is attached.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// Credential acquisition failed, or the credentials were unusable.
    #[error(transparent)]
    Authorize(#[from] OtpError),

    /// The player engine could not be constructed from the credentials.
    #[error("player engine construction failed: {0}")]
    Engine(String),
}

/// Establishes a guarded playback session.
///
/// Acquires credentials from `authorizer`, hands them to `build_player`
/// to construct the engine binding, and attaches the range guard for the
/// deployment window. Called once per page load.
///
/// # Errors
/// Any failure along the way — the guard is not attached in that case.
pub async fn establish<P, F>(
    authorizer: &impl Authorizer,
    build_player: F,
) -> Result<PlayerSession<P>, SetupError>
where
    P: Player,
    F: FnOnce(Credentials) -> Result<P, SetupError>,
{
    tracing::info!("requesting playback credentials");
    let credentials = authorizer.authorize().await?;

    // The authorizer already validates its own wire responses; stubs and
    // alternative implementations get the same check here.
    if credentials.otp.is_empty() || credentials.playback_info.is_empty() {
        return Err(SetupError::Authorize(OtpError::MissingFields));
    }

    let player = build_player(credentials)?;
    Ok(PlayerSession::attach(player, authorised_window()))
}
