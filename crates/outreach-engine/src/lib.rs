//! Targeting and analytics core for engineer outreach.
//!
//! Every scoring and analysis function is pure: callers pass in a snapshot of
//! approach history, candidates, and templates and get value objects back.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
