//! Error types for the authorisation exchange.

/// Errors that can occur while acquiring playback credentials.
///
/// The serving boundary maps these to HTTP status classes:
/// [`SecretMissing`](Self::SecretMissing) is a deployment problem (500);
/// everything else is an upstream problem (502). The viewer never sees
/// the detail — it is logged and replaced with a generic message.
#[derive(Debug, thiserror::Error)]
pub enum OtpError {
    /// The API secret for the authorisation service is not configured.
    #[error("authorisation API secret is not configured")]
    SecretMissing,

    /// The authorisation service answered with a non-success status.
    #[error("authorisation service returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The request never completed (connection, timeout, malformed body).
    #[error("authorisation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered 2xx but the payload lacks a required field.
    /// Treated exactly like a transport failure by callers.
    #[error("authorisation response is missing required fields")]
    MissingFields,
}
