//! Liveness and diagnostic handlers.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use barberhub_app::ports::BarbershopRepository;

use crate::state::AppState;

/// Plain liveness message body.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Diagnostic payload for the `/test` endpoint.
#[derive(Serialize)]
pub struct DiagnosticsBody {
    pub backend: &'static str,
    pub storage: String,
}

/// `GET /`
pub async fn root() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Barbershop Booking API",
    })
}

/// `GET /api/hello`
pub async fn hello() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Hello from the backend API!",
    })
}

/// `GET /test` — report storage reachability.
///
/// Failures are folded into the payload rather than raised; this endpoint
/// always answers 200.
pub async fn diagnostics<R>(State(state): State<AppState<R>>) -> Json<DiagnosticsBody>
where
    R: BarbershopRepository + Send + Sync + 'static,
{
    let storage = match state.repo.ping().await {
        Ok(()) => "connected".to_string(),
        Err(err) => format!("error: {err}"),
    };

    Json(DiagnosticsBody {
        backend: "running",
        storage,
    })
}
