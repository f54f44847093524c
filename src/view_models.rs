// src/view_models.rs

use crate::engine::{Progress, QuizSummary};
use crate::model::AnsweredQuestion;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderInfo {
    pub position: usize, // 1-based
    pub total: usize,
    pub score: usize,
    pub answered: usize, // denominador de la puntuación en curso
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub question_number: u32,
    pub is_correct: bool,
    pub question_text: String,
    pub user_answer: String,
    pub user_text: String,
    pub correct_answer: String,
    pub correct_text: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalScore {
    pub score: usize,
    pub total: usize,
    pub accuracy: usize,
}

impl From<Progress> for HeaderInfo {
    fn from(p: Progress) -> Self {
        Self {
            position: p.position,
            total: p.total,
            score: p.score,
            answered: p.answered,
        }
    }
}

impl From<&AnsweredQuestion> for ResultRow {
    fn from(a: &AnsweredQuestion) -> Self {
        Self {
            question_number: a.question.question_number,
            is_correct: a.is_correct,
            question_text: a.question.question_text.clone(),
            user_answer: a.user_answer.clone(),
            user_text: a.user_option_text().to_owned(),
            correct_answer: a.question.correct_answer.clone(),
            correct_text: a.question.correct_option_text().to_owned(),
            explanation: a.question.explanation.clone(),
        }
    }
}

impl From<&QuizSummary<'_>> for FinalScore {
    fn from(s: &QuizSummary<'_>) -> Self {
        Self {
            score: s.score,
            total: s.total,
            accuracy: s.accuracy_percent(),
        }
    }
}

impl HeaderInfo {
    pub fn position_label(&self) -> String {
        format!("Pregunta {} / {}", self.position, self.total)
    }

    pub fn score_label(&self) -> String {
        format!("Puntuación actual: {} / {}", self.score, self.answered)
    }
}

impl ResultRow {
    pub fn label(&self) -> String {
        if self.is_correct {
            format!("Pregunta {}: ✅ Correcta", self.question_number)
        } else {
            format!("Pregunta {}: ❌ Incorrecta", self.question_number)
        }
    }
}

impl FinalScore {
    pub fn score_label(&self) -> String {
        format!("Puntuación final: {} / {}", self.score, self.total)
    }

    pub fn accuracy_label(&self) -> String {
        format!("Porcentaje de aciertos: {}%", self.accuracy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::QuizSession;
    use crate::engine::tests::question;

    #[test]
    fn header_labels_use_answered_as_denominator() {
        let mut session = QuizSession::new(vec![
            question(1, &["A", "B"], "A"),
            question(2, &["A", "B"], "A"),
        ]);
        let header = HeaderInfo::from(session.progress());
        assert_eq!(header.position_label(), "Pregunta 1 / 2");
        assert_eq!(header.score_label(), "Puntuación actual: 0 / 0");

        session.select_answer("A").unwrap();
        session.submit().unwrap();
        let header = HeaderInfo::from(session.progress());
        assert_eq!(header.score_label(), "Puntuación actual: 1 / 1");
    }

    #[test]
    fn result_row_carries_both_answers() {
        let answered = AnsweredQuestion::new(question(4, &["A", "B"], "B"), "A".to_string());
        let row = ResultRow::from(&answered);
        assert_eq!(row.label(), "Pregunta 4: ❌ Incorrecta");
        assert_eq!(row.user_text, "opción A");
        assert_eq!(row.correct_text, "opción B");
    }

    #[test]
    fn final_score_labels() {
        let mut session = QuizSession::new(vec![question(1, &["A", "B"], "A")]);
        session.select_answer("A").unwrap();
        session.submit().unwrap();
        session.advance().unwrap();
        let summary = session.summary().unwrap();
        let score = FinalScore::from(&summary);
        assert_eq!(score.score_label(), "Puntuación final: 1 / 1");
        assert_eq!(score.accuracy_label(), "Porcentaje de aciertos: 100%");
    }
}
