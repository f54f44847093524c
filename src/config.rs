use std::env;
use std::path::PathBuf;

const DEFAULT_WIDTH: f32 = 760.0;
const DEFAULT_HEIGHT: f32 = 720.0;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Banco externo (YAML o JSON). `None` usa el banco embebido.
    pub bank_path: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bank_path: None,
            window_width: DEFAULT_WIDTH,
            window_height: DEFAULT_HEIGHT,
        }
    }
}

impl AppConfig {
    /// Lee `.env` si existe y luego las variables de entorno.
    /// El primer argumento de la línea de comandos manda sobre `SQL_QUIZ_BANK`.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_sources(
            env::args().nth(1),
            env::var("SQL_QUIZ_BANK").ok(),
            env::var("SQL_QUIZ_WIDTH").ok(),
            env::var("SQL_QUIZ_HEIGHT").ok(),
        )
    }

    fn from_sources(
        arg_bank: Option<String>,
        env_bank: Option<String>,
        width: Option<String>,
        height: Option<String>,
    ) -> Self {
        let bank_path = arg_bank
            .or(env_bank)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Self {
            bank_path,
            window_width: parse_dimension(width).unwrap_or(DEFAULT_WIDTH),
            window_height: parse_dimension(height).unwrap_or(DEFAULT_HEIGHT),
        }
    }
}

fn parse_dimension(value: Option<String>) -> Option<f32> {
    value
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(AppConfig::from_sources(None, None, None, None), AppConfig::default());
    }

    #[test]
    fn argument_wins_over_environment() {
        let cfg = AppConfig::from_sources(
            Some("cli.json".into()),
            Some("env.yaml".into()),
            None,
            None,
        );
        assert_eq!(cfg.bank_path, Some(PathBuf::from("cli.json")));

        let cfg = AppConfig::from_sources(None, Some("env.yaml".into()), None, None);
        assert_eq!(cfg.bank_path, Some(PathBuf::from("env.yaml")));
    }

    #[test]
    fn bad_dimensions_fall_back_to_defaults() {
        let cfg = AppConfig::from_sources(
            None,
            Some("  ".into()),
            Some("ancho".into()),
            Some("-3".into()),
        );
        assert_eq!(cfg.bank_path, None);
        assert_eq!(cfg.window_width, DEFAULT_WIDTH);
        assert_eq!(cfg.window_height, DEFAULT_HEIGHT);

        let cfg = AppConfig::from_sources(None, None, Some("1024".into()), Some(" 800 ".into()));
        assert_eq!(cfg.window_width, 1024.0);
        assert_eq!(cfg.window_height, 800.0);
    }
}
