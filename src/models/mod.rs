pub mod career_path;
pub mod language;
pub mod message;
pub mod quest;
pub mod scholarship;
