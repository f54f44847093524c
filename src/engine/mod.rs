use crate::error::QuizError;
use crate::model::{AnsweredQuestion, Phase, Question, QuestionBank};
use log::{debug, info};

// Submódulos
pub mod actions;
pub mod queries;
pub mod resets;

/// Estado de una partida. Lo posee quien lo dibuja (`QuizApp`), no hay
/// ningún estado global.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    selected_answer: Option<String>,
    phase: Phase,
    score: usize,
    history: Vec<AnsweredQuestion>,
}

/// Contadores para la cabecera mientras se juega.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Posición 1-based de la pregunta actual.
    pub position: usize,
    pub total: usize,
    pub score: usize,
    /// Preguntas ya contestadas; denominador de la puntuación en curso.
    pub answered: usize,
}

/// Resultado final, sólo disponible en `Phase::Finished`.
#[derive(Debug, Clone, Copy)]
pub struct QuizSummary<'a> {
    pub score: usize,
    pub total: usize,
    pub history: &'a [AnsweredQuestion],
}

impl QuizSummary<'_> {
    /// Porcentaje de aciertos redondeado (0.5 hacia arriba).
    pub fn accuracy_percent(&self) -> usize {
        // total > 0 garantizado por `QuizSession::summary`
        (200 * self.score + self.total) / (2 * self.total)
    }
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        info!("Nueva sesión con {} preguntas", questions.len());
        Self {
            questions,
            current_index: 0,
            selected_answer: None,
            phase: Phase::Answering,
            score: 0,
            history: Vec::new(),
        }
    }

    pub fn from_bank(bank: QuestionBank) -> Self {
        Self::new(bank.questions)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn history(&self) -> &[AnsweredQuestion] {
        &self.history
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!("Fase {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    fn require_phase(&self, expected: Phase, operation: &'static str) -> Result<(), QuizError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(QuizError::invalid_state(operation, self.phase))
        }
    }
}
