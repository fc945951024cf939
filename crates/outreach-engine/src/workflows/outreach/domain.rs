use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of organisation or person an approach is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Company,
    Freelancer,
}

impl TargetType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Freelancer => "freelancer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "company" => Some(Self::Company),
            "freelancer" => Some(Self::Freelancer),
            _ => None,
        }
    }
}

/// Last observed status of an approach. Sequence validity is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproachStatus {
    Sent,
    Opened,
    Replied,
    Accepted,
    Rejected,
}

impl ApproachStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Sent,
            Self::Opened,
            Self::Replied,
            Self::Accepted,
            Self::Rejected,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Opened => "opened",
            Self::Replied => "replied",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|status| status.label() == normalized)
    }

    /// Whether the status implies the recipient at least opened the message.
    pub const fn implies_opened(self) -> bool {
        matches!(self, Self::Opened | Self::Replied | Self::Accepted)
    }

    /// Whether the status implies the recipient replied.
    pub const fn implies_replied(self) -> bool {
        matches!(self, Self::Replied | Self::Accepted)
    }
}

/// A single outreach attempt as recorded by the sending collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproachEvent {
    pub id: String,
    pub target_type: TargetType,
    pub target_id: String,
    pub template_id: String,
    pub status: ApproachStatus,
    pub sent_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opened_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replied_at: Option<DateTime<Utc>>,
}

impl ApproachEvent {
    pub fn targets(&self, target_id: &str, target_type: TargetType) -> bool {
        self.target_type == target_type && self.target_id == target_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub id: String,
    pub name: String,
}

/// Engineer considered for inclusion in an approach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateEngineer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub current_status: String,
}

/// Caller supplied filters for ranking candidates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_recently_approached: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_days: Option<u32>,
}

/// One pre-aggregated bucket of send activity, usually a day or an hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStat {
    pub date: DateTime<Utc>,
    pub sent: u32,
    pub opened: u32,
    pub replied: u32,
    pub accepted: u32,
}

impl PeriodStat {
    pub fn open_rate(&self) -> f64 {
        ratio(self.opened, self.sent)
    }

    pub fn reply_rate(&self) -> f64 {
        ratio(self.replied, self.opened)
    }
}

/// Divides with an explicit zero-denominator guard.
pub fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
