use crate::QuizApp;
use crate::ui::helpers::show_text;
use crate::ui::layout::{simple_panel, wide_button};
use egui::{Context, RichText};

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    let Some(score) = app.final_score() else {
        app.message = "No hay resultados que mostrar.".to_owned();
        return;
    };
    let rows = app.result_rows();
    let mut restart = false;

    simple_panel(ctx, 720.0, egui::Margin::symmetric(24, 16), |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("¡Quiz completado!");
            ui.add_space(8.0);
            ui.label(RichText::new(score.score_label()).size(20.0).strong());
            ui.label(score.accuracy_label());
        });
        ui.add_space(12.0);

        ui.strong("Resultados");
        ui.add_space(4.0);
        for (i, row) in rows.iter().enumerate() {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.strong(row.label());
                ui.label(RichText::new("Pregunta:").italics());
                show_text(ui, &format!("r{i}_q"), &row.question_text);
                ui.label(RichText::new(format!("Tu respuesta: {}", row.user_answer)).italics());
                show_text(ui, &format!("r{i}_user"), &row.user_text);
                ui.label(RichText::new(format!("Correcta: {}", row.correct_answer)).italics());
                show_text(ui, &format!("r{i}_ok"), &row.correct_text);
                ui.label(RichText::new("Explicación:").italics());
                show_text(ui, &format!("r{i}_exp"), &row.explanation);
            });
            ui.add_space(6.0);
        }

        ui.add_space(8.0);
        let button_width = ui.available_width() / 2.0;
        restart = wide_button(ui, "Volver a intentarlo", button_width, true);
    });

    if restart {
        app.reiniciar();
    }
}
