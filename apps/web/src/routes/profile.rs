use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

use crate::errors::AppError;
use crate::projector::{to_structured_data, PageModel};
use crate::render::{render_not_found, render_profile};
use crate::source::SourceError;
use crate::state::AppState;

/// GET /:identifier
/// Fetches the profile record, projects it, and renders the portfolio page.
pub async fn handle_profile_page(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Response {
    match render_page(&state, &identifier).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            let not_found = render_not_found(&state.templates).ok();
            err.into_page_response(not_found)
        }
    }
}

async fn render_page(state: &AppState, identifier: &str) -> Result<String, AppError> {
    let record = state.source.get_profile(identifier).await.map_err(|e| {
        if let SourceError::Upstream(msg) = &e {
            warn!("Upstream failure for '{identifier}': {msg}");
        }
        // unknown identifier and upstream failure look identical to a visitor
        AppError::NotFound(format!("profile '{identifier}' not found"))
    })?;

    let page = PageModel::project(&record, &state.config.projector);
    let structured_data = to_structured_data(&record);
    render_profile(&state.templates, &page, &structured_data)
}
