use super::*;

impl QuizSession {
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        if self.phase == Phase::Finished {
            return Err(QuizError::invalid_state("current_question", self.phase));
        }
        self.questions
            .get(self.current_index)
            .ok_or_else(|| QuizError::invalid_state("current_question", self.phase))
    }

    /// Respuesta corregida que se está mostrando (sólo en `Revealed`).
    pub fn last_result(&self) -> Option<&AnsweredQuestion> {
        if self.phase == Phase::Revealed {
            self.history.last()
        } else {
            None
        }
    }

    /// `true` si al avanzar desde aquí se termina el quiz.
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn progress(&self) -> Progress {
        let total = self.questions.len();
        Progress {
            position: (self.current_index + 1).min(total),
            total,
            score: self.score,
            answered: self.history.len(),
        }
    }

    pub fn summary(&self) -> Result<QuizSummary<'_>, QuizError> {
        self.require_phase(Phase::Finished, "summary")?;
        if self.questions.is_empty() {
            return Err(QuizError::invalid_state("summary", self.phase));
        }
        Ok(QuizSummary {
            score: self.score,
            total: self.questions.len(),
            history: &self.history,
        })
    }
}
