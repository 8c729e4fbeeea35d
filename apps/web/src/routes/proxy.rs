//! Image proxy — rewrites remote profile images to same-origin responses.
//!
//! Remote avatar hosts block hot-linked requests or demand a browser user
//! agent, so the page never embeds an upstream image URL directly. Only hosts
//! on the configured allowlist are fetched.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Deserialize)]
pub struct ProxyImageQuery {
    pub url: String,
}

/// GET /api/proxy-image?url=...
pub async fn handle_proxy_image(
    State(state): State<AppState>,
    Query(query): Query<ProxyImageQuery>,
) -> Result<Response, AppError> {
    let url = reqwest::Url::parse(&query.url)
        .map_err(|_| AppError::BadRequest("invalid image url".to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::BadRequest("unsupported url scheme".to_string()));
    }
    let host = url
        .host_str()
        .ok_or_else(|| AppError::BadRequest("image url has no host".to_string()))?;
    if !host_allowed(host, &state.config.allowed_image_hosts) {
        return Err(AppError::BadRequest(format!(
            "image host '{host}' is not allowed"
        )));
    }

    let response = state
        .http
        .get(url.clone())
        .header(header::USER_AGENT, BROWSER_USER_AGENT)
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("image fetch failed: {e}")))?;

    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "image host returned {}",
            response.status()
        )));
    }

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Upstream(format!("image read failed: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            // images are immutable enough to cache, unlike profile records
            (header::CACHE_CONTROL, "public, max-age=86400".to_string()),
        ],
        bytes,
    )
        .into_response())
}

fn host_allowed(host: &str, allowlist: &[String]) -> bool {
    let host = host.to_ascii_lowercase();
    allowlist.iter().any(|allowed| &host == allowed)
}
