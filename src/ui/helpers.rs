// src/ui/helpers.rs
use crate::code_utils::CodeLanguage;
use crate::markup::{Segment, render};
use crate::ui::layout::code_block;
use egui::Ui;
use egui_code_editor::Syntax;

pub fn sql_syntax() -> Syntax {
    Syntax::new("sql")
        .with_comment("--")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "SELECT", "FROM", "WHERE", "GROUP", "BY", "ORDER", "HAVING", "JOIN", "LEFT", "RIGHT",
            "INNER", "OUTER", "ON", "AS", "AND", "OR", "NOT", "IN", "IS", "NULL", "INSERT",
            "INTO", "VALUES", "UPDATE", "SET", "DELETE", "CREATE", "TABLE", "VIEW", "DROP",
            "ALTER", "IF", "EXISTS", "USING", "LOCATION", "MERGE", "WHEN", "MATCHED", "THEN",
            "WITH", "GRANT", "REVOKE", "SHOW", "DESCRIBE", "EXPLAIN", "DELTA", "OVERWRITE",
            "DISTINCT", "LIMIT", "UNION", "ALL",
        ])
        .with_types([
            "INT", "BIGINT", "STRING", "DOUBLE", "FLOAT", "BOOLEAN", "DATE", "TIMESTAMP",
            "DECIMAL",
        ])
}

fn plain_syntax() -> Syntax {
    Syntax::new("text")
}

pub fn syntax_for(language: Option<CodeLanguage>) -> Syntax {
    match language {
        Some(CodeLanguage::Sql) => sql_syntax(),
        None => plain_syntax(),
    }
}

/// Dibuja un texto del banco: el texto plano y el código en línea fluyen en
/// la misma fila; cada bloque de código ocupa su propio editor de sólo lectura.
/// `id` tiene que ser único en la pantalla.
pub fn show_text(ui: &mut Ui, id: &str, text: &str) {
    let segments = render(text);
    let mut inline_run: Vec<&Segment> = Vec::new();
    let mut blocks = 0;

    for segment in &segments {
        match segment {
            Segment::CodeSpan {
                code,
                block: true,
                language,
            } => {
                flush_inline(ui, &mut inline_run);
                code_block(ui, &format!("{id}_block{blocks}"), code, syntax_for(*language));
                blocks += 1;
            }
            other => inline_run.push(other),
        }
    }
    flush_inline(ui, &mut inline_run);
}

fn flush_inline(ui: &mut Ui, run: &mut Vec<&Segment>) {
    if run.iter().all(|s| matches!(s, Segment::PlainText(t) if t.trim().is_empty())) {
        run.clear();
        return;
    }
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for segment in run.iter() {
            match segment {
                Segment::PlainText(t) if t.is_empty() => {}
                Segment::PlainText(t) => {
                    ui.label(t.trim_matches('\n'));
                }
                Segment::CodeSpan { code, .. } => {
                    ui.code(code.as_str());
                }
            }
        }
    });
    run.clear();
}
