use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MEDIA_URL: &str = "/media/";
pub const DEFAULT_MEDIA_ROOT: &str = "media";
pub const DEFAULT_PAGE_SIZE: u64 = 50;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_addr: SocketAddr,
    /// URL prefix images are served under, always ending in `/`
    pub media_url: String,
    /// Directory holding uploaded images
    pub media_root: String,
    pub page_size: u64,
    /// Staff account ensured at startup, as `(username, password)`
    pub admin_credentials: Option<(String, String)>,
    pub sync_lookups_on_startup: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let media_url = optional("MEDIA_URL").unwrap_or_else(|| DEFAULT_MEDIA_URL.to_string());

        let admin_credentials =
            admin_credentials(optional("ADMIN_USERNAME"), optional("ADMIN_PASSWORD"))?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_addr: parse("BIND_ADDR", DEFAULT_BIND_ADDR)?,
            media_url: format!("{}/", media_url.trim_end_matches('/')),
            media_root: optional("MEDIA_ROOT").unwrap_or_else(|| DEFAULT_MEDIA_ROOT.to_string()),
            page_size: parse("PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())?,
            admin_credentials,
            sync_lookups_on_startup: parse("SYNC_LOOKUPS_ON_STARTUP", "false")?,
        })
    }
}

fn admin_credentials(
    username: Option<String>,
    password: Option<String>,
) -> Result<Option<(String, String)>, ConfigError> {
    match (username, password) {
        (Some(username), Some(password)) => Ok(Some((username, password))),
        (Some(_), None) => Err(ConfigError::IncompleteAdminCredentials("ADMIN_USERNAME")),
        (None, Some(_)) => Err(ConfigError::IncompleteAdminCredentials("ADMIN_PASSWORD")),
        (None, None) => Ok(None),
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    optional(var).ok_or(ConfigError::MissingEnvVar(var))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

fn parse<T>(var: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = optional(var).unwrap_or_else(|| default.to_string());

    let parsed = value.trim().parse::<T>();

    parsed.map_err(|e| ConfigError::InvalidEnvValue {
        var,
        reason: e.to_string(),
        value,
    })
}
