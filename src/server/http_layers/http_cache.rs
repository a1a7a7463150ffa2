//! HTTP caching middleware
//!
//! Stamps responses with a shared-cache directive so a CDN or reverse
//! proxy can serve the aggregate payload while a refresh happens in the
//! background.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::IntoResponse};

/// Cache directive settings for the dashboard payload.
#[derive(Debug, Clone, Copy)]
pub struct HttpCacheSettings {
    pub s_maxage_sec: usize,
    pub stale_while_revalidate_sec: usize,
}

impl Default for HttpCacheSettings {
    fn default() -> Self {
        Self {
            s_maxage_sec: 1800,
            stale_while_revalidate_sec: 3600,
        }
    }
}

pub async fn http_cache(
    State(settings): State<HttpCacheSettings>,
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let response = next.run(request).await.into_response();

    // Error responses (the 503 unavailable body) must not be cached.
    if !response.status().is_success() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    parts.headers.insert(
        "Cache-Control",
        format!(
            "public, s-maxage={}, stale-while-revalidate={}",
            settings.s_maxage_sec, settings.stale_while_revalidate_sec
        )
        .parse()
        .unwrap(),
    );

    axum::http::Response::from_parts(parts, body)
}
