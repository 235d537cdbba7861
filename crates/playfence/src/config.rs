//! Environment-driven deployment configuration.

use std::env;
use std::path::PathBuf;

/// Everything the server binary needs from its environment.
///
/// The API secret is deliberately optional: a deployment without it still
/// starts and serves static assets, and the OTP endpoint fails
/// per-request until the secret is configured.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind. `HOST`, default `0.0.0.0`.
    pub host: String,

    /// Port to bind. `PORT`, default `3000`.
    pub port: u16,

    /// Root directory static assets are served from.
    /// `PLAYFENCE_PUBLIC_DIR`, default `public`.
    pub public_dir: PathBuf,

    /// Standing credential for the authorisation service.
    /// `VDOCIPHER_API_SECRET`, no default.
    pub api_secret: Option<String>,

    /// Asset to authorise. `VDOCIPHER_VIDEO_ID`, defaulted to the
    /// deployment's fixed asset.
    pub video_id: String,

    /// Authorisation service location. `VDOCIPHER_API_BASE_URL`,
    /// defaulted; a trailing slash is tolerated.
    pub api_base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            public_dir: PathBuf::from("public"),
            api_secret: None,
            video_id: "e19a1e1c5d37cc89dfe44e4badee1ff2".to_string(),
            api_base_url: "https://dev.vdocipher.com/api/videos".to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    /// `from_env` is this with `std::env::var`; tests substitute a map.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort { raw })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            public_dir: lookup("PLAYFENCE_PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            api_secret: lookup("VDOCIPHER_API_SECRET").filter(|s| !s.is_empty()),
            video_id: lookup("VDOCIPHER_VIDEO_ID").unwrap_or(defaults.video_id),
            api_base_url: lookup("VDOCIPHER_API_BASE_URL")
                .unwrap_or(defaults.api_base_url),
        })
    }
}

/// Errors rejecting an unusable environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` was set to something that is not a port number.
    #[error("PORT is not a valid port number: {raw:?}")]
    InvalidPort { raw: String },
}
