use thiserror::Error;

use crate::model::Phase;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("`{operation}` is not allowed while the quiz is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: Phase,
    },

    #[error("option `{key}` does not exist in question {question_number}")]
    InvalidInput { key: String, question_number: u32 },

    #[error("malformed question bank: {0}")]
    MalformedData(String),
}

impl QuizError {
    pub(crate) fn invalid_state(operation: &'static str, phase: Phase) -> Self {
        QuizError::InvalidState { operation, phase }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        QuizError::MalformedData(msg.into())
    }
}

impl From<serde_yaml::Error> for QuizError {
    fn from(err: serde_yaml::Error) -> Self {
        QuizError::MalformedData(format!("YAML: {err}"))
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::MalformedData(format!("JSON: {err}"))
    }
}
