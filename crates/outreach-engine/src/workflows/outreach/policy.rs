use serde::{Deserialize, Serialize};

pub const DEFAULT_DUPLICATE_INTERVAL_DAYS: u32 = 30;
pub const DEFAULT_FREELANCE_LIMIT_DAYS: u32 = 90;
pub const DEFAULT_RECENT_DAYS: u32 = 90;

/// Cooldown windows applied when callers do not pass explicit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutreachPolicy {
    pub duplicate_interval_days: u32,
    pub freelance_limit_days: u32,
    pub recent_days: u32,
}

impl Default for OutreachPolicy {
    fn default() -> Self {
        Self {
            duplicate_interval_days: DEFAULT_DUPLICATE_INTERVAL_DAYS,
            freelance_limit_days: DEFAULT_FREELANCE_LIMIT_DAYS,
            recent_days: DEFAULT_RECENT_DAYS,
        }
    }
}
