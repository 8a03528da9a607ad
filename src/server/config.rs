use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Process configuration, loaded once at startup and handed to each component.
pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Technician account created when the database has no technician yet.
    pub admin_username: String,
    /// Password for the seeded technician; seeding is skipped when unset.
    pub admin_password: Option<String>,

    /// Whether the session cookie carries the `Secure` attribute.
    pub secure_cookie: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            admin_username: std::env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
            secure_cookie: parse_bool_var("SESSION_SECURE_COOKIE")?,
        })
    }
}

/// Reads an optional boolean variable, defaulting to `false` when unset.
fn parse_bool_var(name: &str) -> Result<bool, ConfigError> {
    let Ok(value) = std::env::var(name) else {
        return Ok(false);
    };

    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
