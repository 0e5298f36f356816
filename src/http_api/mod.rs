use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Local, NaiveDate};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::calculations::cost::CostCalculation;
use crate::calculations::timeline::{ScheduleAnchor, TimelineCalculation, phase_state};
use crate::inputs::ProjectInputs;
use crate::labels::EnglishLabels;
use crate::metadata::ProjectMetadata;
use crate::pricing::PricingTier;
use crate::project::Project;

#[derive(Clone)]
pub struct AppState {
    project: Arc<RwLock<Project>>,
}

impl AppState {
    pub fn new(project: Project) -> Self {
        Self {
            project: Arc::new(RwLock::new(project)),
        }
    }

    pub fn with_shared(project: Arc<RwLock<Project>>) -> Self {
        Self { project }
    }

    fn project(&self) -> Arc<RwLock<Project>> {
        self.project.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    Invalid(String),
}

impl ApiError {
    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metadata", get(get_metadata).put(update_metadata))
        .route("/inputs", get(get_inputs).put(update_inputs))
        .route("/tier", get(get_tier).put(update_tier))
        .route("/anchor", get(get_anchor).put(update_anchor))
        .route("/estimate", get(get_estimate))
        .route("/timeline", get(get_timeline))
        .route("/timeline/status", get(get_timeline_status))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, project: Project) -> std::io::Result<()> {
    let state = AppState::new(project);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_metadata(State(state): State<AppState>) -> Json<ProjectMetadata> {
    let project = state.project();
    let metadata = {
        let guard = project.read();
        guard.metadata().clone()
    };
    Json(metadata)
}

async fn update_metadata(
    State(state): State<AppState>,
    Json(metadata): Json<ProjectMetadata>,
) -> Json<ProjectMetadata> {
    let project = state.project();
    let current = {
        let mut guard = project.write();
        guard.set_metadata(metadata);
        guard.metadata().clone()
    };
    Json(current)
}

async fn get_inputs(State(state): State<AppState>) -> Json<ProjectInputs> {
    let project = state.project();
    let inputs = {
        let guard = project.read();
        guard.inputs().clone()
    };
    Json(inputs)
}

async fn update_inputs(
    State(state): State<AppState>,
    Json(inputs): Json<ProjectInputs>,
) -> Result<Json<ProjectInputs>, ApiError> {
    let project = state.project();
    let current = {
        let mut guard = project.write();
        guard
            .set_inputs(inputs)
            .map_err(|err| ApiError::invalid(err.to_string()))?;
        guard.inputs().clone()
    };
    Ok(Json(current))
}

async fn get_tier(State(state): State<AppState>) -> Json<PricingTier> {
    let project = state.project();
    let tier = {
        let guard = project.read();
        guard.tier()
    };
    Json(tier)
}

async fn update_tier(
    State(state): State<AppState>,
    Json(tier): Json<PricingTier>,
) -> Json<PricingTier> {
    let project = state.project();
    let current = {
        let mut guard = project.write();
        guard.set_tier(tier);
        guard.tier()
    };
    Json(current)
}

async fn get_anchor(State(state): State<AppState>) -> Json<ScheduleAnchor> {
    let project = state.project();
    let anchor = {
        let guard = project.read();
        guard.anchor()
    };
    Json(anchor)
}

async fn update_anchor(
    State(state): State<AppState>,
    Json(anchor): Json<ScheduleAnchor>,
) -> Json<ScheduleAnchor> {
    let project = state.project();
    let current = {
        let mut guard = project.write();
        guard.set_anchor(anchor);
        guard.anchor()
    };
    Json(current)
}

async fn get_estimate(State(state): State<AppState>) -> Json<CostCalculation> {
    let project = state.project();
    let estimate = {
        let guard = project.read();
        guard.cost_estimate()
    };
    Json(estimate)
}

async fn get_timeline(State(state): State<AppState>) -> Json<TimelineCalculation> {
    let project = state.project();
    let timeline = {
        let guard = project.read();
        guard.timeline(&EnglishLabels)
    };
    Json(timeline)
}

#[derive(Debug, Deserialize)]
struct StatusQuery {
    now: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct PhaseStatusRow {
    phase_id: String,
    title: String,
    week_start: u32,
    week_end: u32,
    is_active: bool,
    is_urgent: bool,
}

async fn get_timeline_status(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Json<Vec<PhaseStatusRow>> {
    let now = query.now.unwrap_or_else(|| Local::now().date_naive());
    let project = state.project();
    let timeline = {
        let guard = project.read();
        guard.timeline(&EnglishLabels)
    };
    let rows = timeline
        .phases
        .iter()
        .map(|phase| {
            let status = phase_state(phase, now);
            PhaseStatusRow {
                phase_id: phase.id.clone(),
                title: phase.title.clone(),
                week_start: phase.week_start,
                week_end: phase.week_end,
                is_active: status.is_active,
                is_urgent: status.is_urgent,
            }
        })
        .collect();
    Json(rows)
}
