use std::sync::Arc;

use minijinja::Environment;

use crate::config::Config;
use crate::source::ProfileSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable profile source. Default: `HttpProfileSource` against `UPSTREAM_BASE_URL`.
    pub source: Arc<dyn ProfileSource>,
    /// HTTP client used by the image proxy.
    pub http: reqwest::Client,
    /// Compiled template environment; templates are embedded at build time.
    pub templates: Arc<Environment<'static>>,
    pub config: Config,
}
