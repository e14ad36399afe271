use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub flag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickQuestion {
    pub text: String,
    pub icon: String,
}
