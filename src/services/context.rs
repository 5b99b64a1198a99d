use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::world_time::{WorldTimeService, WorldTimes};

/// Flat context mapping consumed by the template layer, one key per
/// interpolation slot. `time_error` mirrors the resolver's degraded flag.
#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateContext {
    pub ireland_time: String,
    pub ireland_date: String,
    pub ireland_timezone: String,
    pub ethiopia_time: String,
    pub ethiopia_date: String,
    pub ethiopia_timezone: String,
    pub time_difference: String,
    pub time_error: bool,
}

impl From<WorldTimes> for TemplateContext {
    fn from(times: WorldTimes) -> Self {
        Self {
            ireland_time: times.ireland.time,
            ireland_date: times.ireland.date,
            ireland_timezone: times.ireland.zone_label,
            ethiopia_time: times.ethiopia.time,
            ethiopia_date: times.ethiopia.date,
            ethiopia_timezone: times.ethiopia.zone_label,
            time_difference: times.time_difference,
            time_error: times.degraded,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub world_time: Arc<WorldTimeService>,
    pub start_time: DateTime<Utc>,
}

pub struct ContextService {
    pub router: Router,
}

impl ContextService {
    pub fn new(world_time: Arc<WorldTimeService>) -> Self {
        let state = AppState {
            world_time,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/context/world-time", get(world_time_context))
            .route("/health", get(health_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }
}

/// One resolver invocation per request; no caching, so every page view
/// re-fetches both zones.
async fn world_time_context(State(state): State<AppState>) -> Json<TemplateContext> {
    let times = state.world_time.resolve().await;
    Json(TemplateContext::from(times))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
    })
}

async fn liveness_check() -> Json<&'static str> {
    // Simple liveness check - if this endpoint responds, the service is alive
    Json("alive")
}
