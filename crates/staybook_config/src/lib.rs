use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::{debug, warn};

pub mod env_vars;
pub mod models;

pub use models::*;

/// Directory holding `default.*` and `{RUN_ENV}.*` configuration files.
pub const CONFIG_DIR_VAR: &str = "STAYBOOK_CONFIG_DIR";

/// Loads the application configuration.
///
/// Sources are layered in this order, later ones winning:
/// `config/default.*`, `config/{RUN_ENV}.*`, then `STAYBOOK__*` environment
/// variables. Afterwards `"secret_from_env"` markers are resolved and missing
/// spreadsheet credentials are taken from the `GOOGLE_*` variables.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env_vars::get_config_prefix();
    let config_dir = PathBuf::from(env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "config".to_string()));

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);
    debug!(
        "Loading configuration from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .separator(env_vars::CONFIG_SEPARATOR)
                .try_parsing(true),
        );

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_overrides(raw_config)
}

/// Resolves `"secret_from_env"` markers and the legacy spreadsheet variables.
pub fn apply_env_overrides(config: AppConfig) -> Result<AppConfig, ConfigError> {
    let mut json = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    for path in env_vars::inject_env_vars(&mut json) {
        warn!("No environment variable found for secret {}", path);
    }
    let mut config: AppConfig = serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to rebuild config: {err}")))?;

    if config.use_sheets {
        let sheets = config.sheets.get_or_insert_with(SheetsConfig::default);
        if env_vars::apply_legacy_sheet_vars(sheets) {
            debug!("Spreadsheet credentials taken from GOOGLE_* environment variables");
        }
    }
    Ok(config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment exactly once.
///
/// `DOTENV_OVERRIDE` selects the file, otherwise a first command line
/// argument starting with `.env`, otherwise `.env`. Returns the path used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
