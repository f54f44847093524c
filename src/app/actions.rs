use super::*;
use crate::error::QuizError;
use log::warn;

impl QuizApp {
    pub fn elegir_opcion(&mut self, key: &str) {
        let result = self.session.select_answer(key);
        self.report(result);
    }

    pub fn enviar_respuesta(&mut self) {
        if self.session.selected_answer().is_none() {
            self.message = "⚠ Elige una opción antes de enviar.".into();
            return;
        }
        let result = self.session.submit().map(|_| ());
        self.report(result);
    }

    pub fn siguiente_pregunta(&mut self) {
        let result = self.session.advance().map(|_| ());
        self.report(result);
    }

    pub fn reiniciar(&mut self) {
        self.session.restart();
        self.confirm_restart = false;
        self.message.clear();
    }

    fn report(&mut self, result: Result<(), QuizError>) {
        match result {
            Ok(()) => self.message.clear(),
            Err(err) => {
                warn!("Acción rechazada: {err}");
                self.message = format!("⚠ {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionBank;
    use crate::engine::tests::question;

    fn app() -> QuizApp {
        QuizApp::new(QuestionBank {
            title: "Test".into(),
            questions: vec![question(1, &["A", "B"], "A"), question(2, &["A", "B"], "B")],
        })
    }

    #[test]
    fn submit_without_choice_only_sets_message() {
        let mut app = app();
        app.enviar_respuesta();
        assert!(!app.message.is_empty());
        assert_eq!(app.phase(), Phase::Answering);
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn rejected_action_is_reported_and_cleared_on_success() {
        let mut app = app();
        app.elegir_opcion("Z");
        assert!(app.message.contains("Z"));
        app.elegir_opcion("A");
        assert!(app.message.is_empty());
        app.enviar_respuesta();
        assert_eq!(app.phase(), Phase::Revealed);
    }

    #[test]
    fn restart_clears_confirmation_and_session() {
        let mut app = app();
        app.elegir_opcion("A");
        app.enviar_respuesta();
        app.siguiente_pregunta();
        app.confirm_restart = true;
        app.reiniciar();
        assert!(!app.confirm_restart);
        assert_eq!(app.session.current_index(), 0);
        assert_eq!(app.session.score(), 0);
    }
}
