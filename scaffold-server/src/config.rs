use std::{path::PathBuf, time::Duration};

pub const DEFAULT_AGENTS_DIR: &str = "./agents";

pub const ENV_APP_NAME: &str = "APP_NAME";
pub const ENV_ALLOW_ORIGINS: &str = "ALLOW_ORIGINS";
pub const ENV_AGENTS_DIR: &str = "AGENTS_DIR";
pub const ENV_PORT: &str = "PORT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key} value '{value}': {reason}")]
    Invalid { key: &'static str, value: String, reason: String },
}

/// Security knobs applied to the services this crate builds.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Maximum request body size in bytes (default: 10MB)
    pub max_body_size: usize,
    /// Request timeout duration (default: 30 seconds)
    pub request_timeout: Duration,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self { max_body_size: 10 * 1024 * 1024, request_timeout: Duration::from_secs(30) }
    }
}

/// Per-scaffold defaults used when the environment leaves a key unset.
#[derive(Clone, Debug)]
pub struct ServiceDefaults {
    pub app_name: String,
    pub port: u16,
}

impl ServiceDefaults {
    pub fn new(app_name: impl Into<String>, port: u16) -> Self {
        Self { app_name: app_name.into(), port }
    }
}

/// Service configuration, read once at process start.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Display name of the service.
    pub app_name: String,
    /// Allowed CORS origins. Empty allows any origin.
    pub allow_origins: Vec<String>,
    /// Directory holding one sub-directory per agent app.
    pub agents_dir: PathBuf,
    pub port: u16,
    pub security: SecurityConfig,
}

impl ServiceConfig {
    pub fn new(defaults: ServiceDefaults) -> Self {
        Self {
            app_name: defaults.app_name,
            allow_origins: Vec::new(),
            agents_dir: PathBuf::from(DEFAULT_AGENTS_DIR),
            port: defaults.port,
            security: SecurityConfig::default(),
        }
    }

    /// Read `APP_NAME`, `ALLOW_ORIGINS`, `AGENTS_DIR` and `PORT` from the
    /// process environment.
    pub fn from_env(defaults: ServiceDefaults) -> Result<Self, ConfigError> {
        Self::from_lookup(defaults, |key| std::env::var(key).ok())
    }

    /// Same as [`ServiceConfig::from_env`] with an arbitrary key lookup.
    /// Blank values count as unset.
    pub fn from_lookup(
        defaults: ServiceDefaults,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::new(defaults);

        if let Some(app_name) = get(ENV_APP_NAME) {
            config.app_name = app_name.trim().to_string();
        }
        if let Some(origins) = get(ENV_ALLOW_ORIGINS) {
            config.allow_origins = parse_origins(&origins)?;
        }
        if let Some(dir) = get(ENV_AGENTS_DIR) {
            config.agents_dir = PathBuf::from(dir.trim());
        }
        if let Some(port) = get(ENV_PORT) {
            config.port = port.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid { key: ENV_PORT, value: port.clone(), reason: e.to_string() }
            })?;
        }

        Ok(config)
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allow_origins = origins;
        self
    }

    pub fn with_agents_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.agents_dir = dir.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }
}

/// Accepts a comma separated list (`http://a,http://b`) or a JSON array
/// (`["http://a", "http://b"]`). A lone `*` means any origin.
pub fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let raw = raw.trim();
    let origins: Vec<String> = if raw.starts_with('[') {
        serde_json::from_str::<Vec<String>>(raw).map_err(|e| ConfigError::Invalid {
            key: ENV_ALLOW_ORIGINS,
            value: raw.to_string(),
            reason: e.to_string(),
        })?
    } else {
        raw.split(',').map(str::to_string).collect()
    };

    let origins: Vec<String> =
        origins.into_iter().map(|o| o.trim().to_string()).filter(|o| !o.is_empty()).collect();

    if origins.iter().any(|o| o == "*") {
        return Ok(Vec::new());
    }
    Ok(origins)
}
