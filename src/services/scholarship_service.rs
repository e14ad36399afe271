use crate::models::scholarship::{ScholarshipRecord, ScholarshipStatus};
use chrono::{DateTime, Utc};
use std::sync::Arc;

const DAY_MS: i64 = 86_400_000;

/// Whole days until `deadline`, rounded up. Negative once the deadline is
/// more than a day in the past; no clamping is applied.
pub fn days_remaining(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = (deadline - now).num_milliseconds();
    ms.div_euclid(DAY_MS) + i64::from(ms.rem_euclid(DAY_MS) != 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ScholarshipStatus),
}

impl StatusFilter {
    /// Accepts the "all" sentinel or one exact status label.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("all") {
            return Some(StatusFilter::All);
        }
        ScholarshipStatus::parse(raw).map(StatusFilter::Only)
    }

    fn accepts(&self, status: ScholarshipStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

#[derive(Clone)]
pub struct ScholarshipService {
    catalog: Arc<Vec<ScholarshipRecord>>,
}

impl ScholarshipService {
    pub fn new(catalog: Vec<ScholarshipRecord>) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn list(&self) -> &[ScholarshipRecord] {
        &self.catalog
    }

    /// A record is returned when the status test and the text test both
    /// hold. The text test is a case-insensitive substring match against
    /// the name or the provider; the empty term matches everything.
    /// Catalog order is preserved.
    pub fn filter(&self, status: StatusFilter, search_term: &str) -> Vec<&ScholarshipRecord> {
        let needle = search_term.to_lowercase();
        self.catalog
            .iter()
            .filter(|record| status.accepts(record.status))
            .filter(|record| {
                record.name.to_lowercase().contains(&needle)
                    || record.provider.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn count_with_status(&self, status: ScholarshipStatus) -> usize {
        self.catalog
            .iter()
            .filter(|record| record.status == status)
            .count()
    }
}
