mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::Phase;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, confirm_restart_window, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTÓN SUPERIOR DE REINICIAR (sólo mientras se juega)
        if self.phase() != Phase::Finished {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por fase a las vistas
        match self.phase() {
            Phase::Answering | Phase::Revealed => views::quiz::ui_quiz(self, ctx),
            Phase::Finished => views::summary::ui_summary_view(self, ctx),
        }

        if self.confirm_restart {
            confirm_restart_window(self, ctx);
        }
    }
}
