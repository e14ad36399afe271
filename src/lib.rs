pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use crate::services::{
    chat_service::ChatService, navigator_service::NavigatorService, quest_service::QuestService,
    scholarship_service::ScholarshipService,
};
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub scholarship_service: ScholarshipService,
    pub chat_service: ChatService,
    pub quest_service: QuestService,
    pub navigator_service: NavigatorService,
}

impl AppState {
    pub fn new() -> Self {
        let config = crate::config::get_config();

        let scholarship_service = ScholarshipService::new(catalog::scholarships());
        let chat_service = ChatService::new(
            Duration::from_millis(config.reply_delay_ms),
            Duration::from_millis(config.voice_capture_delay_ms),
            config.default_language.clone(),
        );
        let quest_service = QuestService::new(catalog::quests());
        let navigator_service = NavigatorService::new(catalog::career_paths());

        Self {
            scholarship_service,
            chat_service,
            quest_service,
            navigator_service,
        }
    }
}
