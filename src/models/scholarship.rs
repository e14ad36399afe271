use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display label set independently in the seed data; never derived from
/// the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScholarshipStatus {
    Open,
    ClosingSoon,
    Closed,
    Applied,
}

impl ScholarshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScholarshipStatus::Open => "open",
            ScholarshipStatus::ClosingSoon => "closing-soon",
            ScholarshipStatus::Closed => "closed",
            ScholarshipStatus::Applied => "applied",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "open" => Some(ScholarshipStatus::Open),
            "closing-soon" => Some(ScholarshipStatus::ClosingSoon),
            "closed" => Some(ScholarshipStatus::Closed),
            "applied" => Some(ScholarshipStatus::Applied),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScholarshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarshipRecord {
    pub id: String,
    pub name: String,
    pub provider: String,
    /// Display string, may be a range ("₹50,000 - ₹2,00,000").
    pub amount: String,
    pub deadline: DateTime<Utc>,
    pub status: ScholarshipStatus,
    pub eligibility: Vec<String>,
    pub category: String,
    pub description: String,
    /// 0-100, present only while an application is in progress.
    pub application_progress: Option<u8>,
    pub documents_required: Vec<String>,
    pub beneficiaries: u32,
    pub renewable_years: Option<u8>,
}
