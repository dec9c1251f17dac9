use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use isodecay_core::catalog::target_groups;
use isodecay_core::error::{DecayError, RequestError};
use isodecay_core::request::{SimulationRequest, SimulationResponse};
use isodecay_engine::DecayEngine;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

// ── Error helper ─────────────────────────────────────────────────────────────

/// A rejected simulation request, reported as `400 {"error": ...}`.
struct ApiError(String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self.0, "Rejected simulation request");
        (StatusCode::BAD_REQUEST, Json(json!({ "error": self.0 }))).into_response()
    }
}

impl From<RequestError> for ApiError {
    fn from(e: RequestError) -> Self { ApiError(e.to_string()) }
}

impl From<DecayError> for ApiError {
    fn from(e: DecayError) -> Self { ApiError(RequestError::OutOfRange(e).to_string()) }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

// ── Router ───────────────────────────────────────────────────────────────────

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(web_ui))
        .route("/api/isotopes", get(isotopes))
        .route("/api/simulate", post(simulate))
        .layer(cors)
        .with_state(state)
}

const INDEX_HTML: &str = include_str!("static/index.html");

async fn web_ui() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// ── /api/isotopes ────────────────────────────────────────────────────────────

async fn isotopes(State(s): State<AppState>) -> Json<Value> {
    let isotopes: Vec<Value> = s
        .catalog
        .iter()
        .map(|(key, iso)| {
            json!({
                "key":            key,
                "name":           iso.name(),
                "half_life":      iso.half_life(),
                "half_life_unit": iso.half_life_unit(),
                "gamma_emission_probability": iso.gamma_emission_probability(),
            })
        })
        .collect();

    let targets: serde_json::Map<String, Value> = target_groups()
        .iter()
        .map(|(group, members)| (group.to_string(), json!(members)))
        .collect();

    Json(json!({ "isotopes": isotopes, "targets": targets }))
}

// ── /api/simulate ────────────────────────────────────────────────────────────

async fn simulate(State(s): State<AppState>, Json(body): Json<Value>) -> ApiResult<SimulationResponse> {
    let request = SimulationRequest::from_json(body)?;
    let isotope = request.resolve_isotope(s.catalog.as_ref())?;
    let config = request.to_config(&isotope)?;

    let mut engine = match s.config.seed {
        Some(seed) => DecayEngine::seeded(seed),
        None => DecayEngine::from_entropy(),
    };
    let result = engine.simulate(&isotope, &config)?;

    info!(
        isotope = isotope.name(),
        points = result.len(),
        noise = config.noise_percentage,
        "Simulation complete"
    );
    Ok(Json(SimulationResponse::from(&result)))
}
