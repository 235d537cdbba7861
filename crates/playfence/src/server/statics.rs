//! The static-asset collaborator.
//!
//! Read-only GET serving from a fixed root. Request paths are resolved
//! lexically — no component of the request may climb above the root —
//! and extensions map to a short MIME table with a binary fallback.
//! Percent-encoding is deliberately not decoded: an encoded traversal
//! simply fails to match a file.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use playfence_otp::Authorizer;

use super::AppContext;

/// Fallback handler for everything outside `/api`.
pub(super) async fn serve<A: Authorizer>(
    State(ctx): State<AppContext<A>>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET {
        return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
            .into_response();
    }

    let Some(path) = resolve(&ctx.public_dir, uri.path()) else {
        tracing::warn!(path = uri.path(), "rejected path outside asset root");
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    };

    let metadata = match tokio::fs::metadata(&path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return not_found(),
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "failed to stat asset");
            return internal_error();
        }
    };
    if !metadata.is_file() {
        return not_found();
    }

    match tokio::fs::read(&path).await {
        Ok(data) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime_for(&path))],
            data,
        )
            .into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => not_found(),
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "failed to read asset");
            internal_error()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

/// Resolves a request path against the asset root.
///
/// `/` maps to `/index.html`. `..` components pop; popping past the root
/// means the request is climbing out, and resolution fails.
fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let request_path = if request_path == "/" {
        "/index.html"
    } else {
        request_path
    };

    let mut relative = PathBuf::new();
    for component in Path::new(request_path).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::ParentDir => {
                if !relative.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::CurDir => {}
            Component::Prefix(_) => return None,
        }
    }
    Some(root.join(relative))
}

/// Extension → content type. Unknown extensions are served as opaque
/// binary.
fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        _ => "application/octet-stream",
    }
}
