//! Player capability contract for playfence.
//!
//! This crate defines the boundary to the media engine:
//!
//! - **Types** ([`Seconds`], [`PlayerEvent`], [`Command`]) — the vocabulary
//!   that crosses the boundary in both directions.
//! - **Contract** ([`Player`] trait) — the command surface every engine
//!   binding must expose (read position, seek, play, pause).
//! - **Simulation** ([`SimulatedPlayer`]) — a deterministic in-process
//!   engine for demos and tests.
//!
//! # Architecture
//!
//! The guard layer above never talks to a concrete engine. It consumes
//! [`PlayerEvent`]s and issues [`Command`]s through the [`Player`] trait:
//!
//! ```text
//! Engine binding (events) → Guard (decisions) → Player trait (commands)
//! ```

mod player;
mod sim;
mod types;

pub use player::Player;
pub use sim::SimulatedPlayer;
pub use types::{Command, PlayerEvent, Seconds};
