use crate::models::quest::Quest;
use std::sync::Arc;

/// Read-only accessor over the quest catalog. Quests are display data;
/// there is no progression logic to run here.
#[derive(Clone)]
pub struct QuestService {
    quests: Arc<Vec<Quest>>,
}

impl QuestService {
    pub fn new(quests: Vec<Quest>) -> Self {
        Self {
            quests: Arc::new(quests),
        }
    }

    pub fn list(&self) -> &[Quest] {
        &self.quests
    }

    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|quest| quest.id == id)
    }

    pub fn unlocked(&self) -> Vec<&Quest> {
        self.quests.iter().filter(|quest| quest.is_unlocked).collect()
    }
}
