//! Configuration layer: typed settings with layered precedence (file → explicit file → env).

use std::{path::Path, str::FromStr, time::Duration};

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

const LOCAL_CONFIG_BASENAME: &str = "storefront";
const ENV_PREFIX: &str = "STOREFRONT";
const DEFAULT_BASE_URL: &str = "https://practice-react.sdetunicorns.com/api/test";
const DEFAULT_SANDBOX_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub admin: Option<AdminCredentials>,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
    pub sandbox_url: Url,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

impl Settings {
    /// Admin credentials for authenticated category calls.
    pub fn admin_credentials(&self) -> Result<&AdminCredentials, LoadError> {
        self.admin.as_ref().ok_or_else(|| {
            LoadError::invalid(
                "admin",
                format!(
                    "set admin.email and admin.password \
                     (or {ENV_PREFIX}__ADMIN__EMAIL and {ENV_PREFIX}__ADMIN__PASSWORD)"
                ),
            )
        })
    }
}

/// Load settings from `storefront.toml` (if present) and `STOREFRONT__*` variables.
pub fn load() -> Result<Settings, LoadError> {
    load_from(None)
}

/// Load settings, layering `path` between the local file and the environment.
pub fn load_from(path: Option<&Path>) -> Result<Settings, LoadError> {
    let mut builder =
        Config::builder().add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let raw: RawSettings = builder.build()?.try_deserialize()?;
    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    api: RawApiSettings,
    admin: RawAdminSettings,
    logging: RawLoggingSettings,
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            api,
            admin,
            logging,
        } = raw;

        let api = build_api_settings(api)?;
        let admin = build_admin_credentials(admin)?;
        let logging = build_logging_settings(logging)?;

        Ok(Self {
            api,
            admin,
            logging,
        })
    }
}

fn build_api_settings(api: RawApiSettings) -> Result<ApiSettings, LoadError> {
    let base_url = parse_http_url(api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
        .map_err(|reason| LoadError::invalid("api.base_url", reason))?;
    let sandbox_url = parse_http_url(api.sandbox_url.as_deref().unwrap_or(DEFAULT_SANDBOX_URL))
        .map_err(|reason| LoadError::invalid("api.sandbox_url", reason))?;

    let timeout_secs = api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(LoadError::invalid(
            "api.timeout_seconds",
            "must be greater than zero",
        ));
    }

    Ok(ApiSettings {
        base_url,
        sandbox_url,
        timeout: Duration::from_secs(timeout_secs),
    })
}

fn build_admin_credentials(
    admin: RawAdminSettings,
) -> Result<Option<AdminCredentials>, LoadError> {
    let email = non_blank(admin.email);
    let password = admin.password.filter(|value| !value.is_empty());

    match (email, password) {
        (Some(email), Some(password)) => Ok(Some(AdminCredentials { email, password })),
        (None, None) => Ok(None),
        (Some(_), None) => Err(LoadError::invalid(
            "admin.password",
            "required when admin.email is set",
        )),
        (None, Some(_)) => Err(LoadError::invalid(
            "admin.email",
            "required when admin.password is set",
        )),
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawApiSettings {
    base_url: Option<String>,
    sandbox_url: Option<String>,
    timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawAdminSettings {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

fn parse_http_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value.trim()).map_err(|err| format!("failed to parse `{value}`: {err}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme `{other}`")),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}
