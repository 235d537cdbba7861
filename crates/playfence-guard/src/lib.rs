//! Authorised-range enforcement for playfence.
//!
//! This crate is the core of the system: a small event-driven state
//! machine that pins playback inside a fixed authorised window of the
//! asset's timeline, no matter what the viewer does with the controls.
//!
//! - [`AuthorisedRange`] — the validated playback window.
//! - [`RangeGuard`] — the pure transition function: feed it a
//!   [`PlayerEvent`](playfence_player::PlayerEvent), get back the commands
//!   to issue. Its only mutable state is the [`EchoState`] that tells the
//!   guard's own corrective seeks apart from viewer-initiated ones.
//! - [`PlayerSession`] — the binding glue: owns one player plus its guard
//!   for the session lifetime and wires engine notifications through the
//!   transition function.
//!
//! # How it fits in the stack
//!
//! ```text
//! Session setup (above)  ← constructs the player, attaches the guard once
//!     ↕
//! Guard layer (this crate)  ← decides corrections, arms/consumes echoes
//!     ↕
//! Player contract (below)  ← events in, commands out
//! ```

mod echo;
mod guard;
mod range;
mod session;

pub use echo::EchoState;
pub use guard::{Notice, Outcome, RangeGuard};
pub use range::{AuthorisedRange, RangeError};
pub use session::PlayerSession;
