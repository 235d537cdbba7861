//! The vocabulary that crosses the player boundary.
//!
//! Events flow from the engine towards the guard, commands flow back.
//! Both are serde-enabled so a binding can deliver them over any carrier
//! (in-process calls, a message channel, or JSON from an embedded player).

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Seconds
// ---------------------------------------------------------------------------

/// A playback position or duration on the media timeline, in seconds.
///
/// Newtype over `f64` — positions reported by engines are fractional and
/// carry no ordering invariant of their own (an engine is free to report a
/// position outside any authorised window; that is exactly what the guard
/// corrects).
///
/// `#[serde(transparent)]` keeps the wire form a plain number.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl Seconds {
    /// The zero position (start of the asset).
    pub const ZERO: Seconds = Seconds(0.0);

    /// Returns the larger of two positions.
    pub fn max(self, other: Seconds) -> Seconds {
        Seconds(self.0.max(other.0))
    }

    /// Returns the smaller of two positions.
    pub fn min(self, other: Seconds) -> Seconds {
        Seconds(self.0.min(other.0))
    }
}

/// Renders whole seconds without a fraction (`10s`), fractional ones
/// as-is (`15.2s`). This is the form user-facing notices use.
impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}s", self.0 as i64)
        } else {
            write!(f, "{}s", self.0)
        }
    }
}

// ---------------------------------------------------------------------------
// PlayerEvent
// ---------------------------------------------------------------------------

/// A notification emitted by the engine.
///
/// The engine decides the cadence — `TimeUpdate` in particular fires at
/// whatever granularity the engine chooses while playback advances.
/// `Seeking` fires when any position change begins, whether the user
/// dragged a scrub bar or a command issued by this system landed; the
/// guard's job is telling those two apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerEvent {
    /// The asset finished loading and the engine is ready to play.
    Load,

    /// Periodic position report while playback advances.
    TimeUpdate { position: Seconds },

    /// A seek began; `position` is where it is landing.
    Seeking { position: Seconds },
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// An instruction issued to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Move the playhead to `position`.
    SeekTo { position: Seconds },

    /// Begin or resume playback.
    Play,

    /// Halt playback, keeping the current position.
    Pause,
}

// =========================================================================
// Tests
// =========================================================================
