//! JSON REST handlers for barbershops.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use barberhub_app::ports::BarbershopRepository;
use barberhub_app::services::directory_service::{DEFAULT_LIMIT, ListQuery, ListedBarbershop};
use barberhub_domain::barbershop::Barbershop;
use barberhub_domain::geo::Coordinates;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a barbershop.
#[derive(Deserialize)]
pub struct CreateBarbershopRequest {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub rating: Option<f64>,
    pub reviews: Option<i64>,
    pub phone: Option<String>,
}

/// Request body for seeding sample barbershops around an origin.
#[derive(Deserialize)]
pub struct SeedRequest {
    pub lat: f64,
    pub lng: f64,
}

/// Query parameters for the list endpoint.
///
/// Proximity requires both `lat` and `lng`; a single one is ignored.
#[derive(Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub limit: Option<u32>,
}

#[derive(Serialize)]
pub struct CreatedBody {
    pub id: String,
}

#[derive(Serialize)]
pub struct SeededBody {
    pub created: Vec<String>,
}

#[derive(Serialize)]
pub struct ListBody {
    pub items: Vec<ListedBarbershop>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ListBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CreatedBody>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the seed endpoint.
pub enum SeedResponse {
    Created(Json<SeededBody>),
}

impl IntoResponse for SeedResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /api/barbershops`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<CreateBarbershopRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: BarbershopRepository + Send + Sync + 'static,
{
    let mut builder = Barbershop::builder()
        .name(req.name)
        .address(req.address)
        .coordinates(Coordinates::new(req.lat, req.lng));
    if let Some(rating) = req.rating {
        builder = builder.rating(rating);
    }
    if let Some(reviews) = req.reviews {
        builder = builder.reviews(reviews);
    }
    if let Some(phone) = req.phone {
        builder = builder.phone(phone);
    }

    let record = builder.build()?;
    let id = state.directory_service.create_barbershop(record).await?;
    Ok(CreateResponse::Created(Json(CreatedBody {
        id: id.to_string(),
    })))
}

/// `GET /api/barbershops`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<ListParams>,
) -> Result<ListResponse, ApiError>
where
    R: BarbershopRepository + Send + Sync + 'static,
{
    let near = match (params.lat, params.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
        _ => None,
    };

    let items = state
        .directory_service
        .list_barbershops(ListQuery {
            name_contains: params.q,
            near,
            limit: params.limit.unwrap_or(DEFAULT_LIMIT),
        })
        .await?;

    Ok(ListResponse::Ok(Json(ListBody { items })))
}

/// `POST /api/barbershops/seed`
pub async fn seed<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<SeedRequest>,
) -> Result<SeedResponse, ApiError>
where
    R: BarbershopRepository + Send + Sync + 'static,
{
    let created = state
        .directory_service
        .seed_barbershops(Coordinates::new(req.lat, req.lng))
        .await?;

    Ok(SeedResponse::Created(Json(SeededBody {
        created: created.iter().map(ToString::to_string).collect(),
    })))
}
