// src/markup.rs
//
// Trocea los textos del banco (enunciados, opciones, explicaciones) en texto
// plano y fragmentos de código entre comillas invertidas.

use crate::code_utils::{CodeLanguage, detect_language, format_sql};
use once_cell::sync::Lazy;
use regex::Regex;

const FENCE: &str = "```";
const TICK: &str = "`";

/// Bloque primero; si no, código en línea.
static SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"```[^`]*```|`[^`]+`").unwrap());

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    PlainText(String),
    CodeSpan {
        code: String,
        /// Bloque (``` ```) o en línea (` `). Sólo afecta a cómo se dibuja.
        block: bool,
        language: Option<CodeLanguage>,
    },
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Segment::PlainText(text.into())
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Segment::CodeSpan { .. })
    }
}

/// Convierte `text` en segmentos, en el mismo orden en que aparecen.
///
/// Como un `split` con grupo de captura, el texto entre fragmentos se emite
/// siempre, aunque esté vacío.
pub fn render(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in SPAN.find_iter(text) {
        segments.push(Segment::plain(&text[last..m.start()]));
        segments.push(classify(m.as_str()));
        last = m.end();
    }
    segments.push(Segment::plain(&text[last..]));
    segments
}

fn classify(span: &str) -> Segment {
    if let Some(inner) = strip_delimiters(span, FENCE) {
        return code_span(inner, true);
    }
    if let Some(inner) = strip_delimiters(span, TICK) {
        // ``````: el patrón de bloque casa, pero está vacío
        if !span.starts_with(FENCE) {
            return code_span(inner, false);
        }
    }
    Segment::plain(span)
}

/// Devuelve el contenido entre delimitadores si no está vacío.
fn strip_delimiters<'a>(span: &'a str, delimiter: &str) -> Option<&'a str> {
    let inner = span.strip_prefix(delimiter)?.strip_suffix(delimiter)?;
    (!inner.is_empty()).then_some(inner)
}

fn code_span(raw: &str, block: bool) -> Segment {
    let language = detect_language(raw);
    let code = match language {
        Some(CodeLanguage::Sql) => format_sql(raw),
        None => raw.to_string(),
    };
    Segment::CodeSpan {
        code,
        block,
        language,
    }
}
