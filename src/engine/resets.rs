use super::*;

impl QuizSession {
    /// Vuelve a la primera pregunta con el marcador a cero. Siempre funciona.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.selected_answer = None;
        self.score = 0;
        self.history.clear();
        self.set_phase(Phase::Answering);
        info!("Quiz reiniciado");
    }
}
