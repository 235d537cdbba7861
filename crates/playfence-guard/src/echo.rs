//! Echo tracking: telling the guard's own seeks apart from the viewer's.
//!
//! Every corrective seek the guard issues comes back to it through the
//! player's event stream — the engine emits a `seeking` notification and a
//! `timeupdate` report for the jump, exactly as it would for a viewer drag.
//! Without bookkeeping the guard would evaluate its own correction and, on
//! a hostile ordering, correct it again forever.
//!
//! The original single skip-flag is widened into a tagged state so the
//! event-ordering assumption is explicit instead of implied:
//!
//! ```text
//!           corrective seek issued
//! Idle ────────────────────────────→ AwaitingSeekEcho
//!   ↑                                   │ seeking        │ timeupdate
//!   │                                   ▼                ▼
//!   └───────────────── AwaitingTimeupdateEcho ────────→ Idle
//!                            (timeupdate)
//! ```
//!
//! A `timeupdate` settles the correction from either awaiting state —
//! some engines report the position jump without a distinct seek
//! notification. A `seeking` while only the `timeupdate` echo is pending
//! is NOT absorbed: it means a fresh seek began before the previous
//! correction settled, and it must be evaluated normally.

/// Where the guard stands relative to its last corrective seek.
///
/// Non-[`Idle`](Self::Idle) only between a corrective seek command being
/// issued and its echo notification(s) being observed. One correction is
/// outstanding at a time; a new correction re-arms from whatever state the
/// previous one left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoState {
    /// No correction outstanding — every event is evaluated.
    #[default]
    Idle,

    /// A corrective seek was just issued; its `seeking` notification (or a
    /// bare `timeupdate`, on engines that skip the former) is due next.
    AwaitingSeekEcho,

    /// The `seeking` echo was absorbed; the matching `timeupdate` report
    /// is still due.
    AwaitingTimeupdateEcho,
}

impl EchoState {
    /// Arms the tracker: a corrective seek is about to be issued.
    pub(crate) fn arm(&mut self) {
        *self = EchoState::AwaitingSeekEcho;
    }

    /// Observes a `seeking` event. Returns `true` if it was this
    /// correction's echo and must be absorbed.
    pub(crate) fn observe_seeking(&mut self) -> bool {
        match self {
            EchoState::AwaitingSeekEcho => {
                *self = EchoState::AwaitingTimeupdateEcho;
                true
            }
            // Idle: a genuine seek. AwaitingTimeupdateEcho: a fresh seek
            // started before the previous correction settled — genuine.
            EchoState::Idle | EchoState::AwaitingTimeupdateEcho => false,
        }
    }

    /// Observes a `timeupdate` event. Returns `true` if it was this
    /// correction's echo and must be absorbed.
    pub(crate) fn observe_timeupdate(&mut self) -> bool {
        match self {
            EchoState::AwaitingSeekEcho | EchoState::AwaitingTimeupdateEcho => {
                *self = EchoState::Idle;
                true
            }
            EchoState::Idle => false,
        }
    }
}
