use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::state::AppState;

pub fn build_routes() -> Router {
    let state = AppState::new();
    Router::new()
        .route("/", get(handlers::ui::home))
        .route("/reports/new", get(handlers::ui::new_report))
        .route("/database", get(handlers::ui::database))
        .route("/players", post(handlers::players::create))
        .route("/players", get(handlers::players::list))
        .route("/players/search", get(handlers::players::search))
        .route("/players/{id}/report.pdf", get(handlers::reports::download))
        .route("/photos/{file}", get(handlers::players::photo))
        .route("/assets/logo", get(handlers::ui::logo))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}
