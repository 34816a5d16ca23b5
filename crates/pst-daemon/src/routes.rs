//! Axum router and all HTTP handlers for pst-daemon.
//!
//! `build_router` is the single entry point; `main.rs` calls it and attaches
//! middleware layers. Every locker handler resolves its session from the
//! `X-Seed-Key` header before looking at the request body.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use pst_locker::{ErrorClass, LockerError};
use tracing::{info, warn};

use crate::{
    api_types::{
        CellsResponse, CreateOrderRequest, CreateOrderResponse, DepositRequest, DepositResponse,
        ErrorResponse, ExpireResponse, HealthResponse, OpenedResponse, PickupRequest,
        ReturnRequest, RootResponse, SeedCell, SeedItem, SeedResponse,
    },
    state::{uptime_secs, AppState},
};

/// Header carrying the session key returned by `POST /seed`.
pub const SEED_KEY_HEADER: &str = "x-seed-key";

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the complete application router wired to the given shared state.
///
/// Middleware layers (CORS, tracing) are **not** applied here; `main.rs`
/// attaches them after this call so tests can use the bare router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/v1/health", get(health))
        .route("/seed", post(seed))
        .route("/orders", post(create_order))
        .route("/orders/:order_id", get(get_order))
        .route("/deposit", post(deposit))
        .route("/pickup", post(pickup))
        .route("/return/expire", post(return_expire))
        .route("/return/collect", post(return_collect))
        .route("/cells", get(list_cells))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything a locker handler can refuse with.
#[derive(Debug)]
pub enum ApiError {
    Locker(LockerError),
    Body(JsonRejection),
}

impl From<LockerError> for ApiError {
    fn from(e: LockerError) -> Self {
        ApiError::Locker(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::Body(e)
    }
}

/// HTTP status for a locker error class.
pub fn status_for(class: ErrorClass) -> StatusCode {
    match class {
        ErrorClass::Precondition => StatusCode::BAD_REQUEST,
        ErrorClass::NotFound => StatusCode::NOT_FOUND,
        ErrorClass::Conflict => StatusCode::CONFLICT,
        ErrorClass::Forbidden => StatusCode::FORBIDDEN,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Locker(e) => {
                let status = status_for(e.class());
                warn!(status = status.as_u16(), error = %e, "request refused");
                (
                    status,
                    Json(ErrorResponse {
                        detail: e.to_string(),
                    }),
                )
                    .into_response()
            }
            ApiError::Body(rejection) => {
                warn!(status = rejection.status().as_u16(), error = %rejection, "bad request body");
                rejection.into_response()
            }
        }
    }
}

fn seed_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SEED_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
}

// ---------------------------------------------------------------------------
// GET /  and  GET /v1/health
// ---------------------------------------------------------------------------

pub(crate) async fn root(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponse {
            service: st.build.service.to_string(),
            version: st.build.version.to_string(),
            note: "call POST /seed to obtain an X-Seed-Key, then send it as a header".to_string(),
        }),
    )
}

pub(crate) async fn health(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    let sessions = st.sessions.read().await.len();
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            service: st.build.service.to_string(),
            version: st.build.version.to_string(),
            uptime_secs: uptime_secs(),
            sessions,
        }),
    )
}

// ---------------------------------------------------------------------------
// POST /seed
// ---------------------------------------------------------------------------

pub(crate) async fn seed(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    let mut dir = st.sessions.write().await;
    let (key, session) = dir.seed();

    let resp = SeedResponse {
        seed_key: key.to_string(),
        cells: session.list_cells().iter().map(SeedCell::from).collect(),
        items: session
            .inventory()
            .catalog()
            .iter()
            .map(SeedItem::from)
            .collect(),
    };
    drop(dir);

    info!(seed_key = %resp.seed_key, "seed");
    (StatusCode::OK, Json(resp))
}

// ---------------------------------------------------------------------------
// POST /orders
// ---------------------------------------------------------------------------

pub(crate) async fn create_order(
    State(st): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<CreateOrderResponse>, ApiError> {
    let mut dir = st.sessions.write().await;
    let session = dir.resolve_mut(seed_key(&headers))?;
    let Json(body) = body?;

    let created = session.create_order(&body.sku)?;
    info!(order_id = %created.order_id, sku = %body.sku, "orders/create");
    Ok(Json(CreateOrderResponse {
        order_id: created.order_id,
        code: created.code,
    }))
}

// ---------------------------------------------------------------------------
// GET /orders/:order_id
// ---------------------------------------------------------------------------

pub(crate) async fn get_order(
    State(st): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let dir = st.sessions.read().await;
    let session = dir.resolve(seed_key(&headers))?;
    let order = session.get_order(&order_id)?.clone();
    Ok((StatusCode::OK, Json(order)))
}

// ---------------------------------------------------------------------------
// POST /deposit
// ---------------------------------------------------------------------------

pub(crate) async fn deposit(
    State(st): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<DepositRequest>, JsonRejection>,
) -> Result<Json<DepositResponse>, ApiError> {
    let mut dir = st.sessions.write().await;
    let session = dir.resolve_mut(seed_key(&headers))?;
    let Json(body) = body?;

    let d = session.deposit(&body.order_id)?;
    info!(order_id = %body.order_id, cell_id = %d.cell_id, "deposit");
    Ok(Json(DepositResponse {
        cell_id: d.cell_id,
        accepted: d.accepted,
    }))
}

// ---------------------------------------------------------------------------
// POST /pickup
// ---------------------------------------------------------------------------

pub(crate) async fn pickup(
    State(st): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<PickupRequest>, JsonRejection>,
) -> Result<Json<OpenedResponse>, ApiError> {
    let mut dir = st.sessions.write().await;
    let session = dir.resolve_mut(seed_key(&headers))?;
    let Json(body) = body?;

    let out = session.pickup(&body.order_id, &body.code)?;
    info!(order_id = %body.order_id, "pickup");
    Ok(Json(OpenedResponse { opened: out.opened }))
}

// ---------------------------------------------------------------------------
// POST /return/expire
// ---------------------------------------------------------------------------

pub(crate) async fn return_expire(
    State(st): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<ReturnRequest>, JsonRejection>,
) -> Result<Json<ExpireResponse>, ApiError> {
    let mut dir = st.sessions.write().await;
    let session = dir.resolve_mut(seed_key(&headers))?;
    let Json(body) = body?;

    let e = session.return_expire(&body.order_id)?;
    info!(order_id = %e.order_id, "return/expire");
    Ok(Json(ExpireResponse {
        expired_order: e.order_id,
    }))
}

// ---------------------------------------------------------------------------
// POST /return/collect
// ---------------------------------------------------------------------------

pub(crate) async fn return_collect(
    State(st): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<ReturnRequest>, JsonRejection>,
) -> Result<Json<OpenedResponse>, ApiError> {
    let mut dir = st.sessions.write().await;
    let session = dir.resolve_mut(seed_key(&headers))?;
    let Json(body) = body?;

    let out = session.return_collect(&body.order_id)?;
    info!(order_id = %body.order_id, "return/collect");
    Ok(Json(OpenedResponse { opened: out.opened }))
}

// ---------------------------------------------------------------------------
// GET /cells
// ---------------------------------------------------------------------------

pub(crate) async fn list_cells(
    State(st): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<CellsResponse>, ApiError> {
    let dir = st.sessions.read().await;
    let session = dir.resolve(seed_key(&headers))?;
    Ok(Json(CellsResponse {
        cells: session.list_cells().to_vec(),
    }))
}
