//! Tries to create an `AppConfig` from config files and the environment.
//! Sources are layered with `figment`, later ones override earlier ones:
//! `base.toml`, the environment file (`local.toml` / `production.toml`),
//! the raw provider variables (`GROUP_ID`, `MAILERLITE_API_TOKEN`, read as plain strings)
//! and finally any `APP_` prefixed variable, using `__` to reach nested keys.

mod error;
mod types;

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use tracing::info;

pub use error::{ConfigError, ConfigResult};
pub use types::{AppConfig, Environment, MailerLiteConfig, NetConfig, ProviderCredentials};

/// Read without a prefix, these are the names the deployment already uses.
/// Maps each config key to its env variable.
const PROVIDER_ENV_VARS: [(&str, &str); 2] = [
    ("group_id", "GROUP_ID"),
    ("mailerlite_api_token", "MAILERLITE_API_TOKEN"),
];

impl AppConfig {
    /// Loads the config from the `config` directory in the current DIR.
    /// `APP_ENVIRONMENT` selects the environment file and defaults to `local`.
    pub fn load() -> ConfigResult<Self> {
        let config_dir = std::env::current_dir()?.join("config");

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()?;

        Self::load_from(config_dir, environment)
    }

    pub fn load_from(config_dir: impl AsRef<Path>, environment: Environment) -> ConfigResult<Self> {
        let config_dir = config_dir.as_ref();
        info!(
            "{:<12} - Initializing the configuration for: {}",
            "load_config",
            environment.as_ref()
        );

        let base_file = config_dir.join("base.toml");
        if !base_file.is_file() {
            return Err(ConfigError::MissingConfigFile(
                base_file.display().to_string(),
            ));
        }
        let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

        let mut figment = Figment::new()
            .merge(Toml::file(base_file))
            .merge(Toml::file(config_dir.join(environment_filename)));

        // `Env` would parse `0042` into the integer 42, the credentials have to stay verbatim.
        for (key, var) in PROVIDER_ENV_VARS {
            if let Ok(value) = std::env::var(var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        let config = figment
            .merge(Env::prefixed("APP_").split("__"))
            .extract()?;

        Ok(config)
    }
}
