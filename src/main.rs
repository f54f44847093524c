use eframe::egui;
use log::{error, info};
use sql_quiz::QuizApp;
use sql_quiz::config::AppConfig;
use sql_quiz::data::{read_bank_embedded, read_bank_from_path};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let loaded = match &config.bank_path {
        Some(path) => read_bank_from_path(path),
        None => read_bank_embedded(),
    };
    let bank = match loaded {
        Ok(bank) => bank,
        Err(err) => {
            error!("No se pudo cargar el banco de preguntas: {err}");
            return Err(eframe::Error::AppCreation(Box::new(err)));
        }
    };
    info!("Iniciando '{}' con {} preguntas", bank.title, bank.questions.len());

    let title = bank.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title(title.clone()),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(bank)))),
    )
}
