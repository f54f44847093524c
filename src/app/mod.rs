use crate::engine::QuizSession;
use crate::model::{Phase, QuestionBank};

// Submódulos
pub mod actions;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{FinalScore, HeaderInfo, ResultRow};

/// Aplicación eframe: el título del banco, la única sesión de quiz y el
/// estado puramente visual (mensaje, confirmación de reinicio).
pub struct QuizApp {
    pub title: String,
    pub session: QuizSession,
    pub message: String,
    pub confirm_restart: bool,
}

impl QuizApp {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            title: bank.title.clone(),
            session: QuizSession::from_bank(bank),
            message: String::new(),
            confirm_restart: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }
}
