use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeLanguage {
    Sql,
}

static SQL_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(CREATE|SELECT|INSERT|UPDATE|DELETE|DROP|ALTER|WITH|MERGE|GRANT|REVOKE|SHOW|DESCRIBE|EXPLAIN)\b",
    )
    .unwrap()
});

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static TRAILING_SEMICOLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*;\s*$").unwrap());

static LINE_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(CREATE|SELECT|FROM|WHERE|INSERT|UPDATE|DELETE|DROP|ALTER|IF NOT EXISTS|LOCATION|DELTA)\b",
    )
    .unwrap()
});

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Adivina el lenguaje de un fragmento por su primera palabra.
/// Sólo se reconoce SQL; el resto se muestra tal cual.
pub fn detect_language(code: &str) -> Option<CodeLanguage> {
    if SQL_START.is_match(code.trim()) {
        Some(CodeLanguage::Sql)
    } else {
        None
    }
}

/// Reparte una sentencia SQL en líneas, una por cláusula principal.
///
/// Es puramente cosmético: no valida nada y aplicarlo dos veces da lo mismo
/// que aplicarlo una.
pub fn format_sql(sql: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(sql, " ");
    let terminated = TRAILING_SEMICOLON.replace(&collapsed, ";");
    let broken = LINE_KEYWORDS.replace_all(&terminated, "\n${1}");
    let compact = BLANK_LINES.replace_all(&broken, "\n");

    compact
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
