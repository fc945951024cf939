//! Approach optimization and targeting: whom to approach, when, how often,
//! and what past outcomes say about it.

pub mod calendar;
pub mod conversion;
pub mod cooldown;
pub mod domain;
pub mod effectiveness;
pub mod policy;
pub mod rollup;
pub mod router;
pub mod selection;
pub mod service;
pub mod timing;

#[cfg(test)]
mod tests;

pub use conversion::{
    analyze, ConversionAnalysis, DayOfWeekConversion, TemplateConversion, TimeSlotConversion,
};
pub use cooldown::{
    check_duplicate, check_duplicate_at, check_freelance_limit, check_freelance_limit_at,
    DuplicateCheck, FreelanceLimit,
};
pub use domain::{
    ApproachEvent, ApproachStatus, CandidateEngineer, EmailTemplate, PeriodStat,
    SelectionCriteria, TargetType,
};
pub use effectiveness::{summarize_effectiveness, TemplateEffectiveness};
pub use policy::OutreachPolicy;
pub use rollup::rollup_hourly;
pub use router::outreach_router;
pub use selection::{select_targets, select_targets_at, EngineerSelection};
pub use service::OutreachAdvisor;
pub use timing::OptimalSendTime;
