use crate::QuizApp;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, TextStyle, Ui, Visuals};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

const MAX_BLOCK_ROWS: usize = 14;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.strong(&app.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔄 Reiniciar quiz").clicked() {
                    app.confirm_restart = true;
                }
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Modo oscuro").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Modo claro").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

/// Ventana de confirmación antes de tirar la partida en curso.
pub fn confirm_restart_window(app: &mut QuizApp, ctx: &Context) {
    egui::Window::new("Confirmar reinicio")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("¿Seguro que quieres empezar de nuevo? Se perderá la puntuación actual.");
            ui.horizontal(|ui| {
                if ui.button("Sí, reiniciar").clicked() {
                    app.reiniciar();
                }
                if ui.button("No").clicked() {
                    app.confirm_restart = false;
                }
            });
        });
}

/// Panel central con ancho máximo y scroll vertical.
pub fn simple_panel(
    ctx: &Context,
    max_width: f32,
    margin: egui::Margin,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let w = ui.available_width().min(max_width);
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(margin)
                        .show(ui, |ui| {
                            ui.set_width(w);
                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
                        });
                });
            });
    });
}

/// Bloque de código de sólo lectura: se edita una copia que se descarta.
pub fn code_block(ui: &mut Ui, id: &str, code: &str, syntax: Syntax) {
    let fontsize = TextStyle::Monospace.resolve(ui.style()).size;
    let rows = code.lines().count().clamp(1, MAX_BLOCK_ROWS);
    let theme = if ui.visuals().dark_mode {
        ColorTheme::GITHUB_DARK
    } else {
        ColorTheme::GITHUB_LIGHT
    };

    let mut buf = code.to_owned();
    ui.add_space(4.0);
    CodeEditor::default()
        .id_source(id)
        .with_rows(rows)
        .with_fontsize(fontsize)
        .with_theme(theme)
        .with_syntax(syntax)
        .with_numlines(false)
        .vscroll(false)
        .show(ui, &mut buf);
    ui.add_space(4.0);
}

/// Botón ancho centrado. Devuelve si se ha pulsado.
pub fn wide_button(ui: &mut Ui, label: &str, width: f32, enabled: bool) -> bool {
    let mut clicked = false;
    ui.vertical_centered(|ui| {
        clicked = ui
            .add_enabled(enabled, Button::new(label).min_size(egui::vec2(width, 36.0)))
            .clicked();
    });
    clicked
}
