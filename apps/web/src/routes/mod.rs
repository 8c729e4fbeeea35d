pub mod health;
pub mod profile;
pub mod proxy;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/proxy-image", get(proxy::handle_proxy_image))
        // catch-all page route: one public identifier per portfolio
        .route("/:identifier", get(profile::handle_profile_page))
        .with_state(state)
}
