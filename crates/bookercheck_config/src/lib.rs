use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;

pub mod models;
pub use models::*;

static DOTENV_LOADED: OnceCell<()> = OnceCell::new();

/// Loads `.env` once per process so repeated config loads stay cheap.
pub fn ensure_dotenv_loaded() {
    DOTENV_LOADED.get_or_init(|| {
        let _ = dotenv::dotenv();
    });
}

/// Loads the checker configuration.
///
/// Sources, later ones winning:
/// 1. `config/default` (any format the config crate understands, optional)
/// 2. `config/<RUN_ENV>` (optional, `RUN_ENV` defaults to `debug`)
/// 3. environment variables prefixed with `BOOKERCHECK`, `__` separating
///    levels, e.g. `BOOKERCHECK__BOOKER__BASE_URL`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix("BOOKERCHECK").separator("__"));

    builder.build()?.try_deserialize()
}
