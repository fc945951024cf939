use super::super::cooldown::check_duplicate_at;
use super::super::domain::{ApproachEvent, CandidateEngineer, SelectionCriteria, TargetType};
use super::super::policy::DEFAULT_RECENT_DAYS;
use chrono::{DateTime, Utc};

pub(crate) const SKILL_WEIGHT: f64 = 40.0;
pub(crate) const EXPERIENCE_POINTS: f64 = 20.0;
pub(crate) const STATUS_POINTS: f64 = 30.0;
pub(crate) const FRESH_TARGET_POINTS: f64 = 10.0;
pub(crate) const RECENT_APPROACH_PENALTY: f64 = -50.0;

/// One additive contribution to a candidate's score.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreComponent {
    pub points: f64,
    pub note: String,
}

fn skill_component(
    candidate: &CandidateEngineer,
    criteria: &SelectionCriteria,
) -> Option<ScoreComponent> {
    let wanted = criteria.skills.as_deref().filter(|skills| !skills.is_empty())?;

    let owned: Vec<String> = candidate
        .skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .collect();
    let matched: Vec<&str> = wanted
        .iter()
        .filter(|skill| {
            let needle = skill.to_lowercase();
            owned.iter().any(|have| have.contains(&needle))
        })
        .map(String::as_str)
        .collect();

    if matched.is_empty() {
        return None;
    }

    let fraction = matched.len() as f64 / wanted.len() as f64;
    Some(ScoreComponent {
        points: fraction * SKILL_WEIGHT,
        note: format!(
            "Skill match {}/{} ({})",
            matched.len(),
            wanted.len(),
            matched.join(", ")
        ),
    })
}

fn experience_component(
    candidate: &CandidateEngineer,
    criteria: &SelectionCriteria,
) -> Option<ScoreComponent> {
    let required = criteria.experience?;
    (candidate.experience_years >= required).then(|| ScoreComponent {
        points: EXPERIENCE_POINTS,
        note: format!(
            "{} years of experience (requires {required}+)",
            candidate.experience_years
        ),
    })
}

fn status_component(
    candidate: &CandidateEngineer,
    criteria: &SelectionCriteria,
) -> Option<ScoreComponent> {
    let statuses = criteria.status.as_deref()?;
    statuses
        .iter()
        .any(|status| *status == candidate.current_status)
        .then(|| ScoreComponent {
            points: STATUS_POINTS,
            note: format!("Status '{}' matches", candidate.current_status),
        })
}

fn recency_component(
    candidate: &CandidateEngineer,
    criteria: &SelectionCriteria,
    history: &[ApproachEvent],
    now: DateTime<Utc>,
) -> Option<ScoreComponent> {
    if !criteria.exclude_recently_approached {
        return None;
    }

    let window = criteria.recent_days.unwrap_or(DEFAULT_RECENT_DAYS);
    let check = check_duplicate_at(&candidate.id, TargetType::Freelancer, history, window, now);

    let component = match check.days_since_last_approach {
        Some(days) if check.is_duplicate => ScoreComponent {
            points: RECENT_APPROACH_PENALTY,
            note: format!("Approached {days} day(s) ago"),
        },
        _ => ScoreComponent {
            points: FRESH_TARGET_POINTS,
            note: format!("No approach in the last {window} days"),
        },
    };
    Some(component)
}

pub(crate) fn score_candidate(
    candidate: &CandidateEngineer,
    criteria: &SelectionCriteria,
    history: &[ApproachEvent],
    now: DateTime<Utc>,
) -> (Vec<ScoreComponent>, f64) {
    let components: Vec<ScoreComponent> = [
        skill_component(candidate, criteria),
        experience_component(candidate, criteria),
        status_component(candidate, criteria),
        recency_component(candidate, criteria, history, now),
    ]
    .into_iter()
    .flatten()
    .collect();

    let total = components.iter().map(|component| component.points).sum();
    (components, total)
}
