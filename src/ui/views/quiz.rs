use crate::QuizApp;
use crate::ui::helpers::show_text;
use crate::ui::layout::{simple_panel, wide_button};
use egui::{Color32, Context, RadioButton, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Copias para dibujar; las acciones se aplican al final del frame
    let Ok(question) = app.session.current_question().cloned() else {
        return;
    };
    let header = app.header_info();
    let selected = app.session.selected_answer().map(str::to_owned);
    let revealed = app.session.is_revealed();
    let last = app.session.last_result().cloned();
    let is_last = app.session.is_last_question();
    let message = app.message.clone();

    let mut chosen: Option<String> = None;
    let mut submit = false;
    let mut next = false;

    simple_panel(ctx, 720.0, egui::Margin::symmetric(24, 16), |ui| {
        ui.horizontal(|ui| {
            ui.label(header.position_label());
            ui.separator();
            ui.label(header.score_label());
        });
        ui.add_space(8.0);

        ui.heading(format!("Pregunta {}", question.question_number));
        ui.add_space(4.0);
        show_text(ui, "question", &question.question_text);
        ui.add_space(10.0);

        for (key, text) in question.options.iter() {
            let checked = selected.as_deref() == Some(key);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!revealed, RadioButton::new(checked, RichText::new(key).strong()))
                    .clicked()
                {
                    chosen = Some(key.to_owned());
                }
                ui.vertical(|ui| show_text(ui, &format!("option_{key}"), text));
            });
        }
        ui.add_space(10.0);

        let panel_width = ui.available_width() / 2.0;
        match (&last, revealed) {
            (Some(result), true) => {
                ui.group(|ui| {
                    if result.is_correct {
                        ui.label(
                            RichText::new("🎉 ¡Correcto!")
                                .heading()
                                .color(Color32::from_rgb(60, 170, 90)),
                        );
                    } else {
                        ui.label(
                            RichText::new("❌ Incorrecto")
                                .heading()
                                .color(Color32::from_rgb(200, 70, 70)),
                        );
                        ui.label(format!("La respuesta correcta es: {}", question.correct_answer));
                        show_text(ui, "correct_option", question.correct_option_text());
                    }
                    ui.add_space(6.0);
                    ui.strong("Explicación:");
                    show_text(ui, "explanation", &question.explanation);
                });
                ui.add_space(8.0);
                let label = if is_last { "Ver resultados" } else { "Siguiente pregunta" };
                next = wide_button(ui, label, panel_width, true);
            }
            _ => {
                submit = wide_button(ui, "Enviar respuesta", panel_width, selected.is_some());
            }
        }

        if !message.is_empty() {
            ui.add_space(8.0);
            ui.label(&message);
        }
    });

    if let Some(key) = chosen {
        app.elegir_opcion(&key);
    }
    if submit {
        app.enviar_respuesta();
    }
    if next {
        app.siguiente_pregunta();
    }
}
