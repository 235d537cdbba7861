//! Unified error type for the playfence facade.

use playfence_guard::RangeError;
use playfence_otp::OtpError;

use crate::config::ConfigError;
use crate::setup::SetupError;

/// Top-level error that wraps the crate-specific errors.
///
/// Callers composing the whole system deal with this single type; the
/// `#[from]` impls let `?` lift sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum PlayfenceError {
    /// The environment configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Credential acquisition failed.
    #[error(transparent)]
    Otp(#[from] OtpError),

    /// An authorised window was constructed with invalid bounds.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Session setup failed before the guard was attached.
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// Binding or serving the HTTP listener failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
