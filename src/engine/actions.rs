use super::*;

impl QuizSession {
    /// Marca la opción `key` de la pregunta actual. Se puede cambiar tantas
    /// veces como se quiera antes de enviar.
    pub fn select_answer(&mut self, key: &str) -> Result<(), QuizError> {
        self.require_phase(Phase::Answering, "select_answer")?;
        let question = self.current_question()?;
        if !question.options.contains_key(key) {
            return Err(QuizError::InvalidInput {
                key: key.to_string(),
                question_number: question.question_number,
            });
        }
        self.selected_answer = Some(key.to_string());
        Ok(())
    }

    /// Corrige la respuesta marcada, la añade al historial y pasa a `Revealed`.
    pub fn submit(&mut self) -> Result<&AnsweredQuestion, QuizError> {
        self.require_phase(Phase::Answering, "submit")?;
        let Some(answer) = self.selected_answer.clone() else {
            return Err(QuizError::invalid_state("submit", self.phase));
        };
        let question = self.current_question()?.clone();

        let record = AnsweredQuestion::new(question, answer);
        if record.is_correct {
            self.score += 1;
        }
        debug!(
            "Pregunta {} respondida con {} ({})",
            record.question.question_number,
            record.user_answer,
            if record.is_correct { "correcta" } else { "incorrecta" }
        );
        self.history.push(record);
        self.set_phase(Phase::Revealed);

        Ok(&self.history[self.history.len() - 1])
    }

    /// Pasa a la siguiente pregunta, o a `Finished` si era la última.
    pub fn advance(&mut self) -> Result<Phase, QuizError> {
        self.require_phase(Phase::Revealed, "advance")?;
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected_answer = None;
            self.set_phase(Phase::Answering);
        } else {
            self.current_index = self.questions.len();
            self.set_phase(Phase::Finished);
            info!(
                "Quiz terminado: {} / {}",
                self.score,
                self.questions.len()
            );
        }
        Ok(self.phase)
    }
}
