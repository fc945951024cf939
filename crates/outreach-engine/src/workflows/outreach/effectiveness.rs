use super::calendar::elapsed_days;
use super::domain::{ApproachEvent, ApproachStatus, EmailTemplate};
use serde::Serialize;
use std::collections::HashMap;

const fn base_score(status: ApproachStatus) -> i32 {
    match status {
        ApproachStatus::Accepted => 100,
        ApproachStatus::Replied => 50,
        ApproachStatus::Opened => 20,
        ApproachStatus::Sent => 5,
        ApproachStatus::Rejected => -10,
    }
}

fn response_bonus(approach: &ApproachEvent) -> i32 {
    let Some(replied_at) = approach.replied_at else {
        return 0;
    };

    let days = elapsed_days(approach.sent_at, replied_at);
    if days <= 1.0 {
        20
    } else if days <= 3.0 {
        10
    } else if days <= 7.0 {
        5
    } else {
        0
    }
}

/// Scores a single approach outcome; never negative.
pub fn score(approach: &ApproachEvent) -> u32 {
    let total = base_score(approach.status) + response_bonus(approach);
    total.max(0) as u32
}

/// Mean effectiveness of the approaches sent with one template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateEffectiveness {
    pub template_id: String,
    pub template_name: String,
    pub sample_size: usize,
    pub average_score: f64,
}

/// Averages [`score`] per template, best first. Templates without approaches are omitted.
pub fn summarize_effectiveness(
    approaches: &[ApproachEvent],
    templates: &[EmailTemplate],
) -> Vec<TemplateEffectiveness> {
    let totals = approaches.iter().fold(
        HashMap::<&str, (usize, u64)>::new(),
        |mut totals, approach| {
            let entry = totals.entry(approach.template_id.as_str()).or_default();
            entry.0 += 1;
            entry.1 += u64::from(score(approach));
            totals
        },
    );

    let mut summary: Vec<TemplateEffectiveness> = templates
        .iter()
        .filter_map(|template| {
            let &(count, sum) = totals.get(template.id.as_str())?;
            Some(TemplateEffectiveness {
                template_id: template.id.clone(),
                template_name: template.name.clone(),
                sample_size: count,
                average_score: if count == 0 {
                    0.0
                } else {
                    sum as f64 / count as f64
                },
            })
        })
        .collect();

    summary.sort_by(|a, b| b.average_score.total_cmp(&a.average_score));
    summary
}
