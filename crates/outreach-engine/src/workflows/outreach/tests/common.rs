use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::outreach::domain::{
    ApproachEvent, ApproachStatus, CandidateEngineer, EmailTemplate, TargetType,
};
use crate::workflows::outreach::{OutreachAdvisor, OutreachPolicy};

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 24, 15, 0, 0).unwrap()
}

pub(super) fn approach(
    id: &str,
    target_type: TargetType,
    target_id: &str,
    days_ago: i64,
    status: ApproachStatus,
) -> ApproachEvent {
    ApproachEvent {
        id: id.to_string(),
        target_type,
        target_id: target_id.to_string(),
        template_id: "tpl-intro".to_string(),
        status,
        sent_at: now() - Duration::days(days_ago),
        opened_at: None,
        replied_at: None,
    }
}

pub(super) fn history() -> Vec<ApproachEvent> {
    vec![
        approach("a-1", TargetType::Freelancer, "eng-2", 12, ApproachStatus::Opened),
        approach("a-2", TargetType::Freelancer, "eng-3", 140, ApproachStatus::Rejected),
        approach("a-3", TargetType::Company, "acme", 5, ApproachStatus::Replied),
    ]
}

pub(super) fn candidates() -> Vec<CandidateEngineer> {
    vec![
        CandidateEngineer {
            id: "eng-1".to_string(),
            name: "Haruka Sato".to_string(),
            skills: vec!["TypeScript".to_string(), "React".to_string()],
            experience_years: 2,
            current_status: "assigned".to_string(),
        },
        CandidateEngineer {
            id: "eng-2".to_string(),
            name: "Daniel Park".to_string(),
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string(), "AWS".to_string()],
            experience_years: 8,
            current_status: "available".to_string(),
        },
        CandidateEngineer {
            id: "eng-3".to_string(),
            name: "Mei Tanaka".to_string(),
            skills: vec!["rust".to_string(), "Kubernetes".to_string()],
            experience_years: 5,
            current_status: "available".to_string(),
        },
    ]
}

pub(super) fn templates() -> Vec<EmailTemplate> {
    vec![EmailTemplate {
        id: "tpl-intro".to_string(),
        name: "Intro".to_string(),
    }]
}

pub(super) fn advisor() -> OutreachAdvisor {
    OutreachAdvisor::new(OutreachPolicy::default())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
