use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    ApproachEvent, CandidateEngineer, EmailTemplate, PeriodStat, SelectionCriteria, TargetType,
};
use super::service::OutreachAdvisor;

#[derive(Debug, Deserialize)]
pub struct EffectivenessRequest {
    pub approach: ApproachEvent,
}

#[derive(Debug, Deserialize)]
pub struct DuplicateRequest {
    pub target_id: String,
    pub target_type: TargetType,
    #[serde(default)]
    pub history: Vec<ApproachEvent>,
    #[serde(default)]
    pub min_interval_days: Option<u32>,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct FreelanceLimitRequest {
    pub freelancer_id: String,
    #[serde(default)]
    pub history: Vec<ApproachEvent>,
    #[serde(default)]
    pub limit_days: Option<u32>,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// Either pre-aggregated periods or raw approaches to roll up hourly.
#[derive(Debug, Deserialize)]
pub struct TimingRequest {
    #[serde(default)]
    pub period_stats: Option<Vec<PeriodStat>>,
    #[serde(default)]
    pub approaches: Option<Vec<ApproachEvent>>,
}

#[derive(Debug, Deserialize)]
pub struct ConversionRequest {
    #[serde(default)]
    pub approaches: Vec<ApproachEvent>,
    #[serde(default)]
    pub templates: Vec<EmailTemplate>,
}

#[derive(Debug, Deserialize)]
pub struct TargetSelectionRequest {
    #[serde(default)]
    pub candidates: Vec<CandidateEngineer>,
    #[serde(default)]
    pub criteria: SelectionCriteria,
    #[serde(default)]
    pub history: Vec<ApproachEvent>,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// Router exposing the outreach components as JSON endpoints.
pub fn outreach_router(advisor: Arc<OutreachAdvisor>) -> Router {
    Router::new()
        .route("/api/v1/outreach/effectiveness", post(effectiveness_handler))
        .route("/api/v1/outreach/cooldown/duplicate", post(duplicate_handler))
        .route("/api/v1/outreach/cooldown/freelance", post(freelance_handler))
        .route("/api/v1/outreach/timing", post(timing_handler))
        .route("/api/v1/outreach/conversion", post(conversion_handler))
        .route("/api/v1/outreach/targets", post(targets_handler))
        .with_state(advisor)
}

pub(crate) async fn effectiveness_handler(
    State(advisor): State<Arc<OutreachAdvisor>>,
    Json(request): Json<EffectivenessRequest>,
) -> impl IntoResponse {
    let score = advisor.effectiveness(&request.approach);
    Json(json!({ "approach_id": request.approach.id, "score": score }))
}

pub(crate) async fn duplicate_handler(
    State(advisor): State<Arc<OutreachAdvisor>>,
    Json(request): Json<DuplicateRequest>,
) -> impl IntoResponse {
    let verdict = advisor.check_duplicate(
        &request.target_id,
        request.target_type,
        &request.history,
        request.min_interval_days,
        request.now.unwrap_or_else(Utc::now),
    );
    Json(verdict)
}

pub(crate) async fn freelance_handler(
    State(advisor): State<Arc<OutreachAdvisor>>,
    Json(request): Json<FreelanceLimitRequest>,
) -> impl IntoResponse {
    let verdict = advisor.check_freelance_limit(
        &request.freelancer_id,
        &request.history,
        request.limit_days,
        request.now.unwrap_or_else(Utc::now),
    );
    Json(verdict)
}

pub(crate) async fn timing_handler(
    State(advisor): State<Arc<OutreachAdvisor>>,
    Json(request): Json<TimingRequest>,
) -> impl IntoResponse {
    match (request.period_stats, request.approaches) {
        (Some(stats), _) => (StatusCode::OK, Json(json!(advisor.optimal_send_time(&stats)))),
        (None, Some(approaches)) => (
            StatusCode::OK,
            Json(json!(advisor.optimal_send_time_from_history(&approaches))),
        ),
        (None, None) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "provide either period_stats or approaches" })),
        ),
    }
}

pub(crate) async fn conversion_handler(
    State(advisor): State<Arc<OutreachAdvisor>>,
    Json(request): Json<ConversionRequest>,
) -> impl IntoResponse {
    Json(advisor.conversion(&request.approaches, &request.templates))
}

pub(crate) async fn targets_handler(
    State(advisor): State<Arc<OutreachAdvisor>>,
    Json(request): Json<TargetSelectionRequest>,
) -> impl IntoResponse {
    let ranked = advisor.select_targets(
        &request.candidates,
        &request.criteria,
        &request.history,
        request.now.unwrap_or_else(Utc::now),
    );
    Json(ranked)
}
