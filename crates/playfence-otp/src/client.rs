//! The `Authorizer` seam and the VdoCipher HTTP client behind it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::OtpError;

/// How long to wait for the authorisation service before giving up.
/// No retries follow a timeout — the viewer reloads instead.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// The credential pair the engine needs to start playback.
///
/// Both fields are opaque to this system — they are minted upstream and
/// handed to the player engine untouched. Serialized in the camelCase
/// shape the engine-side consumer expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// The one-time playback token.
    pub otp: String,
    /// The playback metadata blob paired with the token.
    pub playback_info: String,
}

/// Raw wire shape of the service response. Both fields are optional so a
/// short payload parses and fails validation, rather than surfacing as a
/// confusing decode error.
#[derive(Debug, Deserialize)]
struct OtpResponse {
    otp: Option<String>,
    #[serde(rename = "playbackInfo")]
    playback_info: Option<String>,
}

impl TryFrom<OtpResponse> for Credentials {
    type Error = OtpError;

    fn try_from(raw: OtpResponse) -> Result<Self, OtpError> {
        match (raw.otp, raw.playback_info) {
            (Some(otp), Some(playback_info))
                if !otp.is_empty() && !playback_info.is_empty() =>
            {
                Ok(Credentials { otp, playback_info })
            }
            _ => Err(OtpError::MissingFields),
        }
    }
}

// ---------------------------------------------------------------------------
// Authorizer
// ---------------------------------------------------------------------------

/// Acquires playback credentials for the deployment's fixed asset.
///
/// One operation, no parameters — which asset, and with what standing
/// credential, is the implementation's configuration. Session setup calls
/// this exactly once per session and never retries; a failure surfaces as
/// a generic "unable to start playback" state.
pub trait Authorizer: Send + Sync + 'static {
    /// Fetches a fresh credential pair.
    fn authorize(
        &self,
    ) -> impl std::future::Future<Output = Result<Credentials, OtpError>> + Send;
}

// ---------------------------------------------------------------------------
// VdoCipherAuthorizer
// ---------------------------------------------------------------------------

/// [`Authorizer`] backed by the VdoCipher OTP endpoint.
///
/// Issues `POST {base_url}/{video_id}/otp` with
/// `Authorization: Apisecret {secret}`. The secret is optional at
/// construction so a misconfigured deployment still starts and serves its
/// static assets; the OTP path then fails per-request with
/// [`OtpError::SecretMissing`].
pub struct VdoCipherAuthorizer {
    http: reqwest::Client,
    base_url: String,
    video_id: String,
    api_secret: Option<String>,
}

impl VdoCipherAuthorizer {
    /// Creates a client for the given service location and asset.
    ///
    /// A trailing slash on `base_url` is tolerated and trimmed.
    pub fn new(
        base_url: impl Into<String>,
        video_id: impl Into<String>,
        api_secret: Option<String>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to build HTTP client with timeout");
                reqwest::Client::new()
            });

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            video_id: video_id.into(),
            api_secret,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}/otp", self.base_url, self.video_id)
    }
}

impl Authorizer for VdoCipherAuthorizer {
    async fn authorize(&self) -> Result<Credentials, OtpError> {
        let secret = self
            .api_secret
            .as_deref()
            .ok_or(OtpError::SecretMissing)?;

        let endpoint = self.endpoint();
        tracing::debug!(%endpoint, "requesting playback OTP");

        let response = self
            .http
            .post(&endpoint)
            .header("Authorization", format!("Apisecret {secret}"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OtpError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let raw: OtpResponse = response.json().await?;
        Credentials::try_from(raw)
    }
}
