//! The `Player` trait — the command surface of a media engine.
//!
//! playfence treats the engine (decoding, rendering, DRM) as a black box.
//! A binding wraps whatever the engine exposes — an FFI handle, a channel
//! to a browser shim, the in-process [`SimulatedPlayer`](crate::SimulatedPlayer)
//! — behind this trait, and delivers the engine's `load` / `timeupdate` /
//! `seeking` notifications to the session attached on top.

use crate::Seconds;

/// The command surface every engine binding must expose.
///
/// Commands are fire-and-forget: the engine acknowledges them through its
/// own event stream (a seek is expected to surface as a `Seeking` and/or
/// `TimeUpdate` notification shortly after `seek_to` returns).
///
/// `Send + 'static` so a session holding the binding can live inside an
/// async task.
pub trait Player: Send + 'static {
    /// The engine's current playhead position.
    fn current_time(&self) -> Seconds;

    /// Moves the playhead to `position`.
    fn seek_to(&mut self, position: Seconds);

    /// Begins or resumes playback.
    fn play(&mut self);

    /// Halts playback, keeping the current position.
    fn pause(&mut self);
}
