use serde::{Deserialize, Serialize};

/// Static quiz-result entry shown by the career navigator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub field: String,
    pub match_score: u8,
    pub colleges: u32,
    pub scholarships: String,
    pub duration: String,
    pub description: String,
    pub skills: Vec<String>,
    pub top_colleges: Vec<String>,
    pub average_fees: String,
    pub job_prospects: String,
}
