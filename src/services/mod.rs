pub mod chat_service;
pub mod navigator_service;
pub mod quest_service;
pub mod scholarship_service;
