use crate::models::career_path::CareerPath;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizStage {
    #[default]
    Intro,
    Questions,
    Results,
}

/// Two-transition stub mirroring the navigator's quiz flow: an intro
/// screen, a questions screen, and a fixed results page. No answers are
/// recorded; the result set is the static career-path catalog.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    stage: QuizStage,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> QuizStage {
        self.stage
    }

    pub fn start(&mut self) {
        if self.stage == QuizStage::Intro {
            self.stage = QuizStage::Questions;
        }
    }

    pub fn reveal_results(&mut self) {
        self.stage = QuizStage::Results;
    }
}

#[derive(Clone)]
pub struct NavigatorService {
    paths: Arc<Vec<CareerPath>>,
}

impl NavigatorService {
    pub fn new(paths: Vec<CareerPath>) -> Self {
        Self {
            paths: Arc::new(paths),
        }
    }

    pub fn career_paths(&self) -> &[CareerPath] {
        &self.paths
    }
}
