pub mod app;
pub mod code_utils;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod markup;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use engine::QuizSession;
pub use error::QuizError;
