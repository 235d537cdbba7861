//! # playfence
//!
//! Range-restricted playback: a viewer gets exactly the authorised window
//! of an asset — here `[10s, 15s)` — looping back to its start, whatever
//! they do with the player controls.
//!
//! The enforcement core lives in [`playfence_guard`]; the player boundary
//! in [`playfence_player`]; credential acquisition in [`playfence_otp`].
//! This crate ties them together:
//!
//! - [`setup`] — session setup: credentials → player construction → guard
//!   attachment, with the single failure boundary in front of the guard.
//! - [`server`] — the HTTP collaborators: the `/api/otp` endpoint and the
//!   static-asset handler the viewer-facing page is served from.
//! - [`config`] — environment-driven deployment configuration.
//! - [`PlayfenceError`] — one error type over all of the above.

pub mod config;
mod error;
pub mod server;
pub mod setup;

pub use config::ServerConfig;
pub use error::PlayfenceError;
pub use server::{router, AppContext};
pub use setup::{authorised_window, establish, SetupError};
