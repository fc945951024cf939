//! Cooldown checks that keep the same target from being contacted too often.

use super::calendar::days_between;
use super::domain::{ApproachEvent, TargetType};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Verdict of the generic duplicate-approach check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateCheck {
    pub is_duplicate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_approach_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_last_approach: Option<i64>,
    pub message: String,
}

/// Verdict of the fixed-window freelancer limiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreelanceLimit {
    pub can_approach: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_approach_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_next_approach: Option<i64>,
    pub message: String,
}

/// Latest approach addressed to the target, in one pass over the history.
pub fn latest_approach<'a>(
    target_id: &str,
    target_type: TargetType,
    history: &'a [ApproachEvent],
) -> Option<&'a ApproachEvent> {
    history
        .iter()
        .filter(|event| event.targets(target_id, target_type))
        .fold(None, |latest: Option<&ApproachEvent>, event| match latest {
            Some(current) if current.sent_at >= event.sent_at => Some(current),
            _ => Some(event),
        })
}

pub fn check_duplicate(
    target_id: &str,
    target_type: TargetType,
    history: &[ApproachEvent],
    min_interval_days: u32,
) -> DuplicateCheck {
    check_duplicate_at(target_id, target_type, history, min_interval_days, Utc::now())
}

/// Flags the target as a duplicate while the latest approach is younger than
/// `min_interval_days` calendar days.
pub fn check_duplicate_at(
    target_id: &str,
    target_type: TargetType,
    history: &[ApproachEvent],
    min_interval_days: u32,
    now: DateTime<Utc>,
) -> DuplicateCheck {
    let Some(latest) = latest_approach(target_id, target_type, history) else {
        return DuplicateCheck {
            is_duplicate: false,
            last_approach_date: None,
            days_since_last_approach: None,
            message: format!("No previous approach to this {}", target_type.label()),
        };
    };

    let days_since = days_between(latest.sent_at, now);
    let is_duplicate = days_since < i64::from(min_interval_days);
    let message = if is_duplicate {
        format!(
            "Approached {days_since} day(s) ago; wait {} more day(s) before contacting again",
            i64::from(min_interval_days) - days_since
        )
    } else {
        format!("Last approached {days_since} day(s) ago, outside the {min_interval_days}-day window")
    };

    DuplicateCheck {
        is_duplicate,
        last_approach_date: Some(latest.sent_at),
        days_since_last_approach: Some(days_since),
        message,
    }
}

pub fn check_freelance_limit(
    freelancer_id: &str,
    history: &[ApproachEvent],
    limit_days: u32,
) -> FreelanceLimit {
    check_freelance_limit_at(freelancer_id, history, limit_days, Utc::now())
}

/// Allows a freelancer approach once `limit_days` calendar days have elapsed
/// since the latest one. The boundary day itself is allowed.
pub fn check_freelance_limit_at(
    freelancer_id: &str,
    history: &[ApproachEvent],
    limit_days: u32,
    now: DateTime<Utc>,
) -> FreelanceLimit {
    let Some(latest) = latest_approach(freelancer_id, TargetType::Freelancer, history) else {
        return FreelanceLimit {
            can_approach: true,
            last_approach_date: None,
            days_until_next_approach: None,
            message: "No previous approach to this freelancer".to_string(),
        };
    };

    let days_since = days_between(latest.sent_at, now);
    let limit = i64::from(limit_days);

    if days_since >= limit {
        return FreelanceLimit {
            can_approach: true,
            last_approach_date: Some(latest.sent_at),
            days_until_next_approach: None,
            message: format!("{days_since} day(s) since the last approach; eligible again"),
        };
    }

    let remaining = limit - days_since;
    FreelanceLimit {
        can_approach: false,
        last_approach_date: Some(latest.sent_at),
        days_until_next_approach: Some(remaining),
        message: format!(
            "Freelancers may be approached once every {limit_days} days; {remaining} day(s) remaining"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::outreach::domain::ApproachStatus;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn event(target_id: &str, target_type: TargetType, days_ago: i64) -> ApproachEvent {
        ApproachEvent {
            id: format!("{target_id}-{days_ago}"),
            target_type,
            target_id: target_id.to_string(),
            template_id: "t-1".to_string(),
            status: ApproachStatus::Sent,
            sent_at: now() - Duration::days(days_ago),
            opened_at: None,
            replied_at: None,
        }
    }

    #[test]
    fn empty_history_is_never_a_duplicate() {
        let check = check_duplicate_at("c-1", TargetType::Company, &[], 30, now());
        assert!(!check.is_duplicate);
        assert!(check.last_approach_date.is_none());
        assert!(check.days_since_last_approach.is_none());
    }

    #[test]
    fn duplicate_uses_latest_matching_event() {
        let history = vec![
            event("c-1", TargetType::Company, 45),
            event("c-1", TargetType::Company, 12),
            event("c-1", TargetType::Freelancer, 1),
            event("c-2", TargetType::Company, 0),
        ];

        let check = check_duplicate_at("c-1", TargetType::Company, &history, 30, now());
        assert!(check.is_duplicate);
        assert_eq!(check.days_since_last_approach, Some(12));
        assert_eq!(check.last_approach_date, Some(history[1].sent_at));
    }

    #[test]
    fn duplicate_window_is_exclusive_at_the_interval() {
        let history = vec![event("c-1", TargetType::Company, 30)];
        let check = check_duplicate_at("c-1", TargetType::Company, &history, 30, now());
        assert!(!check.is_duplicate);
    }

    #[test]
    fn freelance_limit_counts_down_remaining_days() {
        let history = vec![
            event("f-1", TargetType::Freelancer, 95),
            event("f-1", TargetType::Freelancer, 55),
        ];
        let verdict = check_freelance_limit_at("f-1", &history, 90, now());
        assert!(!verdict.can_approach);
        assert_eq!(verdict.days_until_next_approach, Some(35));
    }

    #[test]
    fn freelance_limit_ignores_company_targets_with_same_id() {
        let history = vec![event("f-1", TargetType::Company, 3)];
        let verdict = check_freelance_limit_at("f-1", &history, 90, now());
        assert!(verdict.can_approach);
        assert!(verdict.last_approach_date.is_none());
    }

    #[test]
    fn freelance_limit_boundary_is_inclusive() {
        let history = vec![event("f-1", TargetType::Freelancer, 90)];
        let verdict = check_freelance_limit_at("f-1", &history, 90, now());
        assert!(verdict.can_approach);
        assert!(verdict.days_until_next_approach.is_none());
        assert!(verdict.last_approach_date.is_some());
    }
}
