//! Hand-written seed data. Catalogs are built once at process start and
//! never mutated in place.

mod career_paths;
mod chat;
mod quests;
mod scholarships;

pub use career_paths::career_paths;
pub use chat::{greeting, languages, quick_questions};
pub use quests::quests;
pub use scholarships::scholarships;
