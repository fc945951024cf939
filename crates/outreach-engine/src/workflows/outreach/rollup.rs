use super::domain::{ApproachEvent, ApproachStatus, PeriodStat};
use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use std::collections::BTreeMap;

fn hour_start(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp
        .duration_trunc(TimeDelta::hours(1))
        .unwrap_or(timestamp)
}

/// Folds raw approaches into one [`PeriodStat`] per UTC hour of `sent_at`,
/// ordered by period start.
pub fn rollup_hourly(events: &[ApproachEvent]) -> Vec<PeriodStat> {
    events
        .iter()
        .fold(BTreeMap::<DateTime<Utc>, PeriodStat>::new(), |mut periods, event| {
            let date = hour_start(event.sent_at);
            let period = periods.entry(date).or_insert_with(|| PeriodStat {
                date,
                sent: 0,
                opened: 0,
                replied: 0,
                accepted: 0,
            });

            period.sent += 1;
            if event.opened_at.is_some() || event.status.implies_opened() {
                period.opened += 1;
            }
            if event.replied_at.is_some() || event.status.implies_replied() {
                period.replied += 1;
            }
            if event.status == ApproachStatus::Accepted {
                period.accepted += 1;
            }
            periods
        })
        .into_values()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::outreach::domain::TargetType;
    use chrono::TimeZone;

    fn event(minute: u32, hour: u32, status: ApproachStatus) -> ApproachEvent {
        ApproachEvent {
            id: format!("a-{hour}-{minute}"),
            target_type: TargetType::Company,
            target_id: "c-1".to_string(),
            template_id: "t-1".to_string(),
            status,
            sent_at: Utc.with_ymd_and_hms(2025, 5, 6, hour, minute, 0).unwrap(),
            opened_at: None,
            replied_at: None,
        }
    }

    #[test]
    fn groups_events_by_sent_hour() {
        let events = vec![
            event(5, 10, ApproachStatus::Sent),
            event(45, 10, ApproachStatus::Accepted),
            event(15, 9, ApproachStatus::Opened),
        ];

        let periods = rollup_hourly(&events);
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].date, Utc.with_ymd_and_hms(2025, 5, 6, 9, 0, 0).unwrap());
        assert_eq!((periods[0].sent, periods[0].opened), (1, 1));
        assert_eq!(
            (periods[1].sent, periods[1].opened, periods[1].replied, periods[1].accepted),
            (2, 1, 1, 1)
        );
    }

    #[test]
    fn rejected_counts_as_opened_only_with_timestamp() {
        let mut rejected = event(0, 14, ApproachStatus::Rejected);
        let bare = rollup_hourly(std::slice::from_ref(&rejected));
        assert_eq!(bare[0].opened, 0);

        rejected.opened_at = Some(rejected.sent_at);
        let opened = rollup_hourly(&[rejected]);
        assert_eq!(opened[0].opened, 1);
    }
}
