use super::conversion::{self, ConversionAnalysis};
use super::cooldown::{self, DuplicateCheck, FreelanceLimit};
use super::domain::{
    ApproachEvent, CandidateEngineer, EmailTemplate, PeriodStat, SelectionCriteria, TargetType,
};
use super::effectiveness::{self, TemplateEffectiveness};
use super::policy::OutreachPolicy;
use super::rollup::rollup_hourly;
use super::selection::{self, EngineerSelection};
use super::timing::{self, OptimalSendTime};
use chrono::{DateTime, Utc};

/// Facade over the outreach components that fills in policy defaults.
///
/// Holds no mutable state, so one instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct OutreachAdvisor {
    policy: OutreachPolicy,
}

impl OutreachAdvisor {
    pub fn new(policy: OutreachPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &OutreachPolicy {
        &self.policy
    }

    pub fn effectiveness(&self, approach: &ApproachEvent) -> u32 {
        effectiveness::score(approach)
    }

    pub fn template_effectiveness(
        &self,
        approaches: &[ApproachEvent],
        templates: &[EmailTemplate],
    ) -> Vec<TemplateEffectiveness> {
        effectiveness::summarize_effectiveness(approaches, templates)
    }

    pub fn check_duplicate(
        &self,
        target_id: &str,
        target_type: TargetType,
        history: &[ApproachEvent],
        min_interval_days: Option<u32>,
        now: DateTime<Utc>,
    ) -> DuplicateCheck {
        cooldown::check_duplicate_at(
            target_id,
            target_type,
            history,
            min_interval_days.unwrap_or(self.policy.duplicate_interval_days),
            now,
        )
    }

    pub fn check_freelance_limit(
        &self,
        freelancer_id: &str,
        history: &[ApproachEvent],
        limit_days: Option<u32>,
        now: DateTime<Utc>,
    ) -> FreelanceLimit {
        cooldown::check_freelance_limit_at(
            freelancer_id,
            history,
            limit_days.unwrap_or(self.policy.freelance_limit_days),
            now,
        )
    }

    pub fn optimal_send_time(&self, period_stats: &[PeriodStat]) -> OptimalSendTime {
        timing::compute(period_stats)
    }

    /// Rolls raw approaches up per hour before picking a send slot.
    pub fn optimal_send_time_from_history(&self, approaches: &[ApproachEvent]) -> OptimalSendTime {
        timing::compute(&rollup_hourly(approaches))
    }

    pub fn conversion(
        &self,
        approaches: &[ApproachEvent],
        templates: &[EmailTemplate],
    ) -> ConversionAnalysis {
        conversion::analyze(approaches, templates)
    }

    pub fn select_targets(
        &self,
        candidates: &[CandidateEngineer],
        criteria: &SelectionCriteria,
        history: &[ApproachEvent],
        now: DateTime<Utc>,
    ) -> Vec<EngineerSelection> {
        let criteria = SelectionCriteria {
            recent_days: criteria.recent_days.or(Some(self.policy.recent_days)),
            ..criteria.clone()
        };
        selection::select_targets_at(candidates, &criteria, history, now)
    }
}
