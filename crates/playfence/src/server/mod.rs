//! The HTTP collaborators: the OTP endpoint and static-asset serving.
//!
//! Two routes, read-only from the viewer's perspective:
//!
//! - `GET /api/otp` — runs the configured [`Authorizer`] and returns the
//!   credential pair, or a generic error with the status class encoding
//!   whose fault it was (deployment → 500, upstream → 502).
//! - everything else — the static-asset collaborator ([`statics`]).

mod statics;

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use playfence_otp::{Authorizer, OtpError};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// What the viewer sees when credential acquisition fails, whatever the
/// underlying cause. The cause itself goes to the logs only.
const OTP_ERROR_MESSAGE: &str =
    "Unable to retrieve OTP. Check server logs for details.";

/// Shared request context: the authorizer and the static root.
///
/// Cheap to clone — the authorizer sits behind an `Arc`.
pub struct AppContext<A: Authorizer> {
    pub authorizer: Arc<A>,
    pub public_dir: std::path::PathBuf,
}

impl<A: Authorizer> AppContext<A> {
    /// Builds the context from deployment configuration.
    pub fn new(authorizer: A, config: &ServerConfig) -> Self {
        Self {
            authorizer: Arc::new(authorizer),
            public_dir: config.public_dir.clone(),
        }
    }
}

impl<A: Authorizer> Clone for AppContext<A> {
    fn clone(&self) -> Self {
        Self {
            authorizer: Arc::clone(&self.authorizer),
            public_dir: self.public_dir.clone(),
        }
    }
}

/// Creates the router serving the OTP endpoint and static assets.
pub fn router<A: Authorizer>(ctx: AppContext<A>) -> Router {
    Router::new()
        .route("/api/otp", get(fetch_otp::<A>))
        .fallback(statics::serve::<A>)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// `GET /api/otp` — acquire a fresh credential pair for the viewer.
async fn fetch_otp<A: Authorizer>(
    State(ctx): State<AppContext<A>>,
) -> Response {
    match ctx.authorizer.authorize().await {
        Ok(credentials) => (
            StatusCode::OK,
            // One-time tokens must never be replayed from a cache.
            [(header::CACHE_CONTROL, "no-store")],
            Json(credentials),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "OTP fetch failed");
            let status = match error {
                OtpError::SecretMissing => StatusCode::INTERNAL_SERVER_ERROR,
                OtpError::Upstream { .. }
                | OtpError::Transport(_)
                | OtpError::MissingFields => StatusCode::BAD_GATEWAY,
            };
            (
                status,
                Json(serde_json::json!({ "error": OTP_ERROR_MESSAGE })),
            )
                .into_response()
        }
    }
}
