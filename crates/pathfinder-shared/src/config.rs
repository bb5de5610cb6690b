//! Configuration management
//!
//! Settings come from `config.toml` (or the file named by `PATHFINDER_CONFIG`)
//! layered under `PATHFINDER__SECTION__KEY` environment variables. Keys are
//! accepted in the casing the file uses (`Branding.Title`, `auth.authServerUrl`)
//! as well as lowercase.

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE_ENV, DEFAULT_AUTH_TIMEOUT_SECS, DEFAULT_CONFIG_FILE, DEFAULT_SUBTITLE,
    DEFAULT_TITLE, ENV_PREFIX,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub database: Option<DatabaseSettings>,
    #[serde(default)]
    pub log: LogSettings,
    #[serde(rename = "Branding", alias = "branding", default)]
    pub branding: BrandingSettings,
    #[serde(rename = "Admin", alias = "admin", default)]
    pub admin: AdminSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Static files served at the site root.
    pub public_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub enabled: bool,
    #[serde(rename = "authServerUrl", alias = "authserverurl", alias = "auth_server_url", default)]
    pub auth_server_url: String,
    #[serde(rename = "apiSecret", alias = "apisecret", alias = "api_secret", default)]
    pub api_secret: Option<String>,
    #[serde(default = "default_auth_timeout")]
    pub timeout_secs: u64,
}

fn default_auth_timeout() -> u64 {
    DEFAULT_AUTH_TIMEOUT_SECS
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "info".into(), json: true }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BrandingSettings {
    #[serde(rename = "Title", alias = "title", default)]
    pub title: Option<String>,
    #[serde(rename = "Subtitle", alias = "subtitle", default)]
    pub subtitle: Option<String>,
}

impl BrandingSettings {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn subtitle(&self) -> &str {
        self.subtitle.as_deref().unwrap_or(DEFAULT_SUBTITLE)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AdminSettings {
    #[serde(rename = "PanelUrl", alias = "panelurl", alias = "panel_url", default)]
    pub panel_url: Option<String>,
}

/// Path (without extension) of the configuration file for this process.
pub fn config_file() -> String {
    std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into())
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, AppError> {
    Ok(Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("server.public_dir", "public")?
        .set_default("auth.enabled", false)?
        .set_default("log.level", "info")?
        .set_default("log.json", true)?)
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let config = with_defaults()?
            .add_source(File::with_name(&config_file()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        app_config.check()?;
        Ok(app_config)
    }

    /// Parses an in-memory TOML document on top of the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let config = with_defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        app_config.check()?;
        Ok(app_config)
    }

    fn check(&self) -> Result<(), AppError> {
        if self.auth.enabled && self.database.is_none() {
            return Err(AppError::MissingDatabase);
        }
        Ok(())
    }
}
