mod recommendations;

use super::calendar::{day_of_week, hour_of, weekday_label};
use super::domain::{ratio, ApproachEvent, ApproachStatus, EmailTemplate};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    total: u32,
    accepted: u32,
}

impl Tally {
    fn record(mut self, approach: &ApproachEvent) -> Self {
        self.total += 1;
        if approach.status == ApproachStatus::Accepted {
            self.accepted += 1;
        }
        self
    }

    fn rate(&self) -> f64 {
        ratio(self.accepted, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateConversion {
    pub template_id: String,
    pub template_name: String,
    pub total: u32,
    pub accepted: u32,
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSlotConversion {
    pub hour: u32,
    pub total: u32,
    pub accepted: u32,
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOfWeekConversion {
    pub day_of_week: u32,
    pub day_label: &'static str,
    pub total: u32,
    pub accepted: u32,
    pub conversion_rate: f64,
}

/// Retrospective conversion breakdown over a batch of approaches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionAnalysis {
    pub total_approaches: u32,
    pub overall_conversion_rate: f64,
    pub by_template: Vec<TemplateConversion>,
    pub by_time_slot: Vec<TimeSlotConversion>,
    pub by_day_of_week: Vec<DayOfWeekConversion>,
    pub recommendations: Vec<String>,
}

fn sort_by_rate_desc<T>(rows: &mut [T], rate: impl Fn(&T) -> f64) {
    rows.sort_by(|a, b| rate(b).total_cmp(&rate(a)));
}

/// Segments approaches by template, send hour, and weekday.
///
/// Approaches referencing templates missing from `templates` count toward the
/// overall, hourly, and weekday figures but get no template row. Templates
/// without approaches are left out. Each breakdown is sorted by conversion
/// rate, best first; ties keep template order, hour order, or weekday order.
pub fn analyze(approaches: &[ApproachEvent], templates: &[EmailTemplate]) -> ConversionAnalysis {
    let overall = approaches.iter().fold(Tally::default(), Tally::record);

    let per_template = approaches.iter().fold(
        HashMap::<&str, Tally>::new(),
        |mut tallies, approach| {
            let tally = tallies.entry(approach.template_id.as_str()).or_default();
            *tally = tally.record(approach);
            tallies
        },
    );
    let per_hour = approaches.iter().fold(
        BTreeMap::<u32, Tally>::new(),
        |mut tallies, approach| {
            let tally = tallies.entry(hour_of(approach.sent_at)).or_default();
            *tally = tally.record(approach);
            tallies
        },
    );
    let per_weekday = approaches.iter().fold(
        BTreeMap::<u32, Tally>::new(),
        |mut tallies, approach| {
            let tally = tallies.entry(day_of_week(approach.sent_at)).or_default();
            *tally = tally.record(approach);
            tallies
        },
    );

    let mut by_template: Vec<TemplateConversion> = templates
        .iter()
        .filter_map(|template| {
            let tally = per_template.get(template.id.as_str())?;
            Some(TemplateConversion {
                template_id: template.id.clone(),
                template_name: template.name.clone(),
                total: tally.total,
                accepted: tally.accepted,
                conversion_rate: tally.rate(),
            })
        })
        .collect();
    sort_by_rate_desc(&mut by_template, |row| row.conversion_rate);

    let mut by_time_slot: Vec<TimeSlotConversion> = per_hour
        .into_iter()
        .map(|(hour, tally)| TimeSlotConversion {
            hour,
            total: tally.total,
            accepted: tally.accepted,
            conversion_rate: tally.rate(),
        })
        .collect();
    sort_by_rate_desc(&mut by_time_slot, |row| row.conversion_rate);

    let mut by_day_of_week: Vec<DayOfWeekConversion> = per_weekday
        .into_iter()
        .map(|(day, tally)| DayOfWeekConversion {
            day_of_week: day,
            day_label: weekday_label(day),
            total: tally.total,
            accepted: tally.accepted,
            conversion_rate: tally.rate(),
        })
        .collect();
    sort_by_rate_desc(&mut by_day_of_week, |row| row.conversion_rate);

    let mut analysis = ConversionAnalysis {
        total_approaches: overall.total,
        overall_conversion_rate: overall.rate(),
        by_template,
        by_time_slot,
        by_day_of_week,
        recommendations: Vec::new(),
    };
    analysis.recommendations = recommendations::generate(&analysis);

    debug!(
        approaches = analysis.total_approaches,
        templates = analysis.by_template.len(),
        recommendations = analysis.recommendations.len(),
        "analyzed approach conversions"
    );

    analysis
}
