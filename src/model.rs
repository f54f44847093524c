use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opciones de una pregunta, en el orden en que aparecen en el banco.
///
/// Se deserializa desde un mapa (YAML o JSON) y rechaza claves repetidas,
/// cosa que un `HashMap` se tragaría en silencio.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionSet(Vec<(String, String)>);

impl OptionSet {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self(entries)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, text)| text.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for OptionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct OptionSetVisitor;

impl<'de> Visitor<'de> for OptionSetVisitor {
    type Value = OptionSet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of option keys to option texts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<OptionSet, A::Error> {
        let mut entries: Vec<(String, String)> = Vec::new();
        while let Some((key, text)) = access.next_entry::<String, String>()? {
            if entries.iter().any(|(k, _)| *k == key) {
                return Err(de::Error::custom(format!("duplicate option key `{key}`")));
            }
            entries.push((key, text));
        }
        Ok(OptionSet(entries))
    }
}

impl<'de> Deserialize<'de> for OptionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OptionSetVisitor)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question_number: u32,
    pub question_text: String,
    pub options: OptionSet,
    pub correct_answer: String,
    pub explanation: String,
}

impl Question {
    /// Texto de la opción correcta (el loader garantiza que existe).
    pub fn correct_option_text(&self) -> &str {
        self.options.get(&self.correct_answer).unwrap_or_default()
    }
}

/// Pregunta ya contestada: copia de la pregunta + lo que respondió el usuario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub question: Question,
    pub user_answer: String,
    pub is_correct: bool,
}

impl AnsweredQuestion {
    pub fn new(question: Question, user_answer: String) -> Self {
        let is_correct = user_answer == question.correct_answer;
        Self {
            question,
            user_answer,
            is_correct,
        }
    }

    pub fn user_option_text(&self) -> &str {
        self.question.options.get(&self.user_answer).unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Answering,
    Revealed,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Answering => "answering",
            Phase::Revealed => "revealed",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}
