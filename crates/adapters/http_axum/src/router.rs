//! Axum router assembly.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use barberhub_app::ports::BarbershopRepository;

use crate::api::{barbershops, meta};
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a permissive
/// [`CorsLayer`] so browser clients can reach the API from any origin.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: BarbershopRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(meta::root))
        .route("/api/hello", get(meta::hello))
        .route("/test", get(meta::diagnostics))
        .route(
            "/api/barbershops",
            get(barbershops::list).post(barbershops::create),
        )
        .route("/api/barbershops/seed", post(barbershops::seed))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
