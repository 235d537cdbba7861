//! playfence server binary: static assets plus the OTP endpoint.

use playfence::{AppContext, PlayfenceError, ServerConfig};
use playfence_otp::VdoCipherAuthorizer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), PlayfenceError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    if config.api_secret.is_none() {
        tracing::warn!(
            "VDOCIPHER_API_SECRET environment variable is not set. \
             OTP requests will fail until it is configured."
        );
    }

    let authorizer = VdoCipherAuthorizer::new(
        config.api_base_url.clone(),
        config.video_id.clone(),
        config.api_secret.clone(),
    );

    let app = playfence::router(AppContext::new(authorizer, &config));

    let listener =
        tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        assets = %config.public_dir.display(),
        "server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
