mod rules;

use super::domain::{ApproachEvent, CandidateEngineer, SelectionCriteria};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

pub const RECOMMENDATION_THRESHOLD: f64 = 50.0;

/// Ranked candidate with the reasons behind its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineerSelection {
    pub candidate_id: String,
    pub name: String,
    pub score: f64,
    pub reasons: Vec<String>,
    pub is_recommended: bool,
}

pub fn select_targets(
    candidates: &[CandidateEngineer],
    criteria: &SelectionCriteria,
    approach_history: &[ApproachEvent],
) -> Vec<EngineerSelection> {
    select_targets_at(candidates, criteria, approach_history, Utc::now())
}

/// Scores every candidate against `criteria` and ranks them best first.
/// Equal scores keep their input order.
pub fn select_targets_at(
    candidates: &[CandidateEngineer],
    criteria: &SelectionCriteria,
    approach_history: &[ApproachEvent],
    now: DateTime<Utc>,
) -> Vec<EngineerSelection> {
    let mut ranked: Vec<EngineerSelection> = candidates
        .iter()
        .map(|candidate| {
            let (components, score) =
                rules::score_candidate(candidate, criteria, approach_history, now);
            EngineerSelection {
                candidate_id: candidate.id.clone(),
                name: candidate.name.clone(),
                score,
                reasons: components.into_iter().map(|component| component.note).collect(),
                is_recommended: score >= RECOMMENDATION_THRESHOLD,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        candidates = ranked.len(),
        recommended = ranked.iter().filter(|entry| entry.is_recommended).count(),
        "ranked outreach candidates"
    );

    ranked
}
