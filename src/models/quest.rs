use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub is_locked: bool,
    pub reward: String,
    pub estimated_time: String,
}

/// Static catalog entry describing a themed learning path. Display-only;
/// quests carry no engine behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub progress: u8,
    pub total_steps: u32,
    pub completed_steps: u32,
    pub estimated_duration: String,
    pub reward: String,
    pub badge: String,
    pub is_unlocked: bool,
    pub steps: Vec<QuestStep>,
}
