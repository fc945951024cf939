use super::calendar::{day_of_week, hour_of, weekday_label};
use super::domain::PeriodStat;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

pub const DEFAULT_SEND_HOUR: u32 = 10;
pub const DEFAULT_SEND_DAY: u32 = 2;
const BUSINESS_HOURS: std::ops::RangeInclusive<u32> = 9..=18;
const OPEN_WEIGHT: f64 = 0.4;
const REPLY_WEIGHT: f64 = 0.6;

/// Recommended send slot derived from period statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimalSendTime {
    pub hour: u32,
    pub day_of_week: u32,
    pub open_rate: f64,
    pub reply_rate: f64,
    pub recommendation: String,
}

#[derive(Debug, Default, Clone, Copy)]
struct SlotMean {
    samples: u32,
    open_rate: f64,
    reply_rate: f64,
}

impl SlotMean {
    fn push(mut self, open_rate: f64, reply_rate: f64) -> Self {
        let n = self.samples as f64;
        self.open_rate = (self.open_rate * n + open_rate) / (n + 1.0);
        self.reply_rate = (self.reply_rate * n + reply_rate) / (n + 1.0);
        self.samples += 1;
        self
    }

    fn score(&self) -> f64 {
        OPEN_WEIGHT * self.open_rate + REPLY_WEIGHT * self.reply_rate
    }
}

/// Picks the weekday/hour slot with the best weighted open and reply rates.
///
/// Every period counts once regardless of its send volume. Rates inside a
/// slot are folded in sorted order so the result does not depend on the order
/// of `period_stats`. Ties go to the earliest slot (Sunday first, then hour).
pub fn compute(period_stats: &[PeriodStat]) -> OptimalSendTime {
    let samples = period_stats.iter().fold(
        BTreeMap::<(u32, u32), Vec<(f64, f64)>>::new(),
        |mut slots, stat| {
            slots
                .entry((day_of_week(stat.date), hour_of(stat.date)))
                .or_default()
                .push((stat.open_rate(), stat.reply_rate()));
            slots
        },
    );

    let slots: BTreeMap<(u32, u32), SlotMean> = samples
        .into_iter()
        .map(|(slot, mut rates)| {
            rates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
            let mean = rates
                .into_iter()
                .fold(SlotMean::default(), |mean, (open, reply)| mean.push(open, reply));
            (slot, mean)
        })
        .collect();

    let best = slots
        .iter()
        .fold(None, |best: Option<(&(u32, u32), &SlotMean)>, (slot, mean)| match best {
            Some((_, current)) if current.score() >= mean.score() => best,
            _ => Some((slot, mean)),
        })
        .filter(|(_, mean)| mean.score() > 0.0);

    debug!(
        periods = period_stats.len(),
        slots = slots.len(),
        found = best.is_some(),
        "computed send-time slots"
    );

    let Some((&(day, hour), mean)) = best else {
        return OptimalSendTime {
            hour: DEFAULT_SEND_HOUR,
            day_of_week: DEFAULT_SEND_DAY,
            open_rate: 0.0,
            reply_rate: 0.0,
            recommendation: format!(
                "Not enough engagement data yet; send on {} around {}:00",
                weekday_label(DEFAULT_SEND_DAY),
                DEFAULT_SEND_HOUR
            ),
        };
    };

    let hour = if BUSINESS_HOURS.contains(&hour) {
        hour
    } else {
        DEFAULT_SEND_HOUR
    };
    let day_of_week = match day {
        0 => 1,
        6 => 5,
        weekday => weekday,
    };

    OptimalSendTime {
        hour,
        day_of_week,
        open_rate: mean.open_rate,
        reply_rate: mean.reply_rate,
        recommendation: format!(
            "Send on {} around {}:00 (open rate {:.1}%, reply rate {:.1}%)",
            weekday_label(day_of_week),
            hour,
            mean.open_rate * 100.0,
            mean.reply_rate * 100.0
        ),
    }
}
