// src/data.rs

use crate::error::QuizError;
use crate::model::{Question, QuestionBank};
use log::{debug, info};
use std::collections::HashSet;
use std::path::Path;

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_bank_embedded() -> Result<QuestionBank, QuizError> {
    let file_content = include_str!("data/quiz_questions.yaml");
    parse_bank_yaml(file_content)
}

/// Carga un banco desde disco. `.json` se lee como JSON, el resto como YAML.
pub fn read_bank_from_path(path: &Path) -> Result<QuestionBank, QuizError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| QuizError::malformed(format!("cannot read {}: {e}", path.display())))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let bank = if is_json {
        parse_bank_json(&content)?
    } else {
        parse_bank_yaml(&content)?
    };
    info!(
        "Banco '{}' cargado desde {} ({} preguntas)",
        bank.title,
        path.display(),
        bank.questions.len()
    );
    Ok(bank)
}

pub fn parse_bank_yaml(content: &str) -> Result<QuestionBank, QuizError> {
    let bank: QuestionBank = serde_yaml::from_str(content)?;
    validate_bank(&bank)?;
    Ok(bank)
}

pub fn parse_bank_json(content: &str) -> Result<QuestionBank, QuizError> {
    let bank: QuestionBank = serde_json::from_str(content)?;
    validate_bank(&bank)?;
    Ok(bank)
}

/// Comprueba lo que serde no puede: opciones suficientes, respuesta válida
/// y números de pregunta únicos.
pub fn validate_bank(bank: &QuestionBank) -> Result<(), QuizError> {
    if bank.questions.is_empty() {
        return Err(QuizError::malformed("the bank has no questions"));
    }

    let mut seen = HashSet::new();
    for q in &bank.questions {
        validate_question(q)?;
        if !seen.insert(q.question_number) {
            return Err(QuizError::malformed(format!(
                "question number {} appears more than once",
                q.question_number
            )));
        }
    }
    debug!("Banco validado: {} preguntas", bank.questions.len());
    Ok(())
}

fn validate_question(q: &Question) -> Result<(), QuizError> {
    if q.question_number == 0 {
        return Err(QuizError::malformed("question numbers must be positive"));
    }
    if q.options.len() < 2 {
        return Err(QuizError::malformed(format!(
            "question {} needs at least two options",
            q.question_number
        )));
    }
    if !q.options.contains_key(&q.correct_answer) {
        return Err(QuizError::malformed(format!(
            "question {}: correct answer `{}` is not one of its options",
            q.question_number, q.correct_answer
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_YAML: &str = r#"
title: Mini
questions:
  - question_number: 1
    question_text: "¿Cuánto es 1 + 1?"
    options:
      A: "1"
      B: "2"
    correct_answer: B
    explanation: "Suma básica."
"#;

    #[test]
    fn embedded_bank_loads() {
        let bank = read_bank_embedded().unwrap();
        assert!(!bank.title.is_empty());
        assert!(bank.questions.len() >= 2);
    }

    #[test]
    fn yaml_bank_keeps_option_order() {
        let yaml = r#"
title: Orden
questions:
  - question_number: 7
    question_text: q
    options:
      C: tres
      A: uno
      B: dos
    correct_answer: A
    explanation: e
"#;
        let bank = parse_bank_yaml(yaml).unwrap();
        let keys: Vec<&str> = bank.questions[0].options.keys().collect();
        assert_eq!(keys, vec!["C", "A", "B"]);
        assert_eq!(bank.questions[0].correct_option_text(), "uno");
    }

    #[test]
    fn json_bank_is_accepted() {
        let json = r#"{
            "title": "JSON",
            "questions": [{
                "question_number": 1,
                "question_text": "Use `SELECT 1`",
                "options": {"A": "yes", "B": "no"},
                "correct_answer": "A",
                "explanation": "x"
            }]
        }"#;
        let bank = parse_bank_json(json).unwrap();
        assert_eq!(bank.title, "JSON");
        assert_eq!(bank.questions.len(), 1);
    }

    #[test]
    fn correct_answer_outside_options_is_malformed() {
        let yaml = GOOD_YAML.replace("correct_answer: B", "correct_answer: Z");
        let err = parse_bank_yaml(&yaml).unwrap_err();
        assert!(matches!(err, QuizError::MalformedData(_)));
    }

    #[test]
    fn duplicate_option_key_in_json_is_malformed() {
        let json = r#"{
            "title": "dup",
            "questions": [{
                "question_number": 1,
                "question_text": "q",
                "options": {"A": "x", "A": "y", "B": "z"},
                "correct_answer": "A",
                "explanation": "e"
            }]
        }"#;
        let err = parse_bank_json(json).unwrap_err();
        assert!(matches!(err, QuizError::MalformedData(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn missing_field_is_malformed() {
        let yaml = GOOD_YAML.replace("    explanation: \"Suma básica.\"\n", "");
        let err = parse_bank_yaml(&yaml).unwrap_err();
        assert!(matches!(err, QuizError::MalformedData(_)));
    }

    #[test]
    fn single_option_is_malformed() {
        let yaml = GOOD_YAML.replace("      A: \"1\"\n", "");
        assert!(matches!(
            parse_bank_yaml(&yaml),
            Err(QuizError::MalformedData(_))
        ));
    }

    #[test]
    fn repeated_question_number_is_malformed() {
        let yaml = r#"
title: Rep
questions:
  - question_number: 1
    question_text: a
    options: { A: x, B: y }
    correct_answer: A
    explanation: e
  - question_number: 1
    question_text: b
    options: { A: x, B: y }
    correct_answer: B
    explanation: e
"#;
        assert!(matches!(
            parse_bank_yaml(yaml),
            Err(QuizError::MalformedData(_))
        ));
    }

    #[test]
    fn empty_bank_is_malformed() {
        assert!(matches!(
            parse_bank_yaml("title: Vacío\nquestions: []\n"),
            Err(QuizError::MalformedData(_))
        ));
    }

    #[test]
    fn unreadable_path_is_malformed() {
        let err = read_bank_from_path(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, QuizError::MalformedData(_)));
    }
}
