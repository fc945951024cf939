use super::common::*;
use crate::workflows::outreach::domain::{ApproachStatus, SelectionCriteria, TargetType};
use crate::workflows::outreach::{OutreachAdvisor, OutreachPolicy};

#[test]
fn advisor_applies_policy_windows_when_unspecified() {
    let advisor = OutreachAdvisor::new(OutreachPolicy {
        duplicate_interval_days: 3,
        freelance_limit_days: 10,
        recent_days: 7,
    });

    let duplicate = advisor.check_duplicate("acme", TargetType::Company, &history(), None, now());
    assert!(!duplicate.is_duplicate, "5 days exceeds the 3-day policy window");

    let strict = advisor.check_duplicate("acme", TargetType::Company, &history(), Some(30), now());
    assert!(strict.is_duplicate);

    let limit = advisor.check_freelance_limit("eng-2", &history(), None, now());
    assert!(limit.can_approach, "12 days exceeds the 10-day freelance limit");
}

#[test]
fn advisor_fills_recent_days_from_policy() {
    let advisor = OutreachAdvisor::new(OutreachPolicy {
        recent_days: 10,
        ..OutreachPolicy::default()
    });
    let criteria = SelectionCriteria {
        exclude_recently_approached: true,
        ..SelectionCriteria::default()
    };

    let ranked = advisor.select_targets(&candidates(), &criteria, &history(), now());
    let eng_2 = ranked
        .iter()
        .find(|entry| entry.candidate_id == "eng-2")
        .expect("eng-2 ranked");
    assert_eq!(eng_2.score, 10.0, "12 days ago falls outside a 10-day window");
}

#[test]
fn advisor_rolls_up_history_for_timing() {
    let mut approaches = history();
    approaches.push(approach("a-4", TargetType::Company, "globex", 1, ApproachStatus::Accepted));
    let send_time = advisor().optimal_send_time_from_history(&approaches);
    assert!((9..=18).contains(&send_time.hour));
    assert!((1..=5).contains(&send_time.day_of_week));
}

#[test]
fn advisor_summarizes_template_effectiveness() {
    let summary = advisor().template_effectiveness(&history(), &templates());
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].sample_size, 3);
    // opened 20 + rejected 0 + replied 50
    assert!((summary[0].average_score - 70.0 / 3.0).abs() < 1e-9);
}
