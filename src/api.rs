//! JSON API consumed by the dashboard front end

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::instrument;

use crate::{
    ClimateConfig, ClimateError,
    comfort::ComfortReading,
    export::{self, ExportFormat},
    forecast::{ForecastReport, ForecastRequest, ForecastService, parse_start_date},
    models::City,
};

/// Shared handler state, cheap to clone per request
#[derive(Debug, Clone)]
pub struct AppState {
    service: ForecastService,
    default_horizon_days: usize,
    preview_days: usize,
}

impl AppState {
    #[must_use]
    pub fn from_config(config: &ClimateConfig) -> Self {
        Self {
            service: ForecastService::new(config.forecast.max_horizon_days),
            default_horizon_days: config.forecast.default_horizon_days,
            preview_days: config.export.preview_days,
        }
    }
}

/// Error body returned by every handler
pub struct ApiError(ClimateError);

impl From<ClimateError> for ApiError {
    fn from(err: ClimateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_invalid_argument() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!("Request failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct ComfortQuery {
    pub temperature: i32,
    pub humidity: i32,
    pub wind: i32,
}

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub location: String,
    pub start: String,
    pub days: Option<usize>,
    pub seed: Option<u64>,
    pub format: Option<String>,
}

#[derive(Serialize)]
pub struct ApiCity {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: String,
}

impl From<&City> for ApiCity {
    fn from(city: &City) -> Self {
        Self {
            name: city.name.to_string(),
            latitude: city.latitude,
            longitude: city.longitude,
            population: city.population.to_string(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cities", get(get_cities))
        .route("/comfort", get(get_comfort))
        .route("/forecast", get(get_forecast))
        .route("/forecast/export", get(export_forecast))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}

async fn get_cities() -> Json<Vec<ApiCity>> {
    Json(City::all().iter().map(ApiCity::from).collect())
}

async fn get_comfort(Query(query): Query<ComfortQuery>) -> Json<ComfortReading> {
    Json(ComfortReading::evaluate(
        query.temperature,
        query.humidity,
        query.wind,
    ))
}

fn run_forecast(state: &AppState, query: &ForecastQuery) -> Result<ForecastReport, ApiError> {
    let start = parse_start_date(&query.start)?;
    let mut request = ForecastRequest::new(query.location.as_str(), start)
        .with_horizon(query.days.unwrap_or(state.default_horizon_days));
    request.seed = query.seed;
    Ok(state.service.forecast(&request)?)
}

#[instrument(skip(state))]
async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Result<Json<ForecastReport>, ApiError> {
    run_forecast(&state, &query).map(Json)
}

#[instrument(skip(state))]
async fn export_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Result<Response, ApiError> {
    let format = match query.format.as_deref() {
        Some(name) => name.parse::<ExportFormat>()?,
        None => ExportFormat::default(),
    };
    let report = run_forecast(&state, &query)?;
    let body = export::render(&report, format, state.preview_days)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::file_name(&report, format)
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
