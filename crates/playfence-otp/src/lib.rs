//! One-time playback token acquisition for playfence.
//!
//! The player engine refuses to decrypt an asset without a short-lived
//! credential pair (the OTP and a playback metadata blob) issued by the
//! upstream authorisation service. This crate owns that exchange:
//!
//! 1. **Seam** — the [`Authorizer`] trait: one operation, fetch
//!    credentials for the deployment's fixed asset. Session setup depends
//!    on the trait, so tests and demos swap in stubs without touching HTTP.
//! 2. **Implementation** — [`VdoCipherAuthorizer`], the HTTP client for
//!    the real service.
//! 3. **Errors** — [`OtpError`], one variant per way the exchange fails,
//!    each mapped to an HTTP status class at the serving boundary.

#![allow(async_fn_in_trait)]

mod client;
mod error;

pub use client::{Authorizer, Credentials, VdoCipherAuthorizer};
pub use error::OtpError;
