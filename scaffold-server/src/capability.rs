use crate::Service;
use crate::config::ServiceConfig;
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::PathBuf;
use std::sync::Arc;

/// Options the assembler passes to a framework's app factory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactoryOptions {
    pub agents_dir: PathBuf,
    pub enable_web_ui: bool,
    pub allow_origins: Vec<String>,
}

impl FactoryOptions {
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            agents_dir: config.agents_dir.clone(),
            enable_web_ui: true,
            allow_origins: config.allow_origins.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("failed to read agents directory {path}: {source}")]
    AgentsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Scaffold(#[from] scaffold_core::ScaffoldError),

    #[error("app factory panicked: {0}")]
    Panicked(String),
}

/// Entry point of an agent framework that can build a complete service.
pub trait AppFactory: Send + Sync {
    /// Name of the framework package, for logs.
    fn framework(&self) -> &str;

    fn create_app(&self, options: FactoryOptions) -> Result<Service, FactoryError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("{package} not installed")]
    NotInstalled { package: String },

    #[error("{package} failed to load: {reason}")]
    Failed { package: String, reason: String },

    #[error("{package} panicked while loading: {message}")]
    Panicked { package: String, message: String },
}

impl ProbeError {
    pub fn not_installed(package: impl Into<String>) -> Self {
        Self::NotInstalled { package: package.into() }
    }

    pub fn failed(package: impl Into<String>, reason: impl ToString) -> Self {
        Self::Failed { package: package.into(), reason: reason.to_string() }
    }

    pub fn package(&self) -> &str {
        match self {
            Self::NotInstalled { package }
            | Self::Failed { package, .. }
            | Self::Panicked { package, .. } => package,
        }
    }

    /// Message returned to clients of guarded routes.
    pub fn remediation(&self) -> String {
        match self {
            Self::NotInstalled { package } => format!(
                "{package} not installed in server environment; install {package} to enable agent routes"
            ),
            other => format!(
                "{other}; agent routes are disabled until {} loads cleanly",
                other.package()
            ),
        }
    }
}

/// Outcome of probing for the agent framework. Decided once at process
/// start and never changed afterwards.
#[derive(Clone)]
pub enum Capabilities {
    Available(Arc<dyn AppFactory>),
    Unavailable(ProbeError),
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available(factory) => f.debug_tuple("Available").field(&factory.framework()).finish(),
            Self::Unavailable(reason) => f.debug_tuple("Unavailable").field(reason).finish(),
        }
    }
}

impl Capabilities {
    /// Run `resolve` once to acquire the framework's app factory.
    ///
    /// Never fails: an error or a panic inside `resolve` yields
    /// [`Capabilities::Unavailable`] with the reason kept for logging.
    pub fn probe<F>(package: &str, resolve: F) -> Self
    where
        F: FnOnce() -> Result<Arc<dyn AppFactory>, ProbeError>,
    {
        let capabilities = match catch_unwind(AssertUnwindSafe(resolve)) {
            Ok(Ok(factory)) => Self::Available(factory),
            Ok(Err(reason)) => Self::Unavailable(reason),
            Err(payload) => Self::Unavailable(ProbeError::Panicked {
                package: package.to_string(),
                message: panic_message(payload.as_ref()),
            }),
        };

        match &capabilities {
            Self::Available(factory) => {
                tracing::info!(framework = factory.framework(), "agent framework available")
            }
            Self::Unavailable(reason) => {
                tracing::warn!(package, %reason, "agent framework unavailable, using fallback routes")
            }
        }
        capabilities
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn factory(&self) -> Option<&Arc<dyn AppFactory>> {
        match self {
            Self::Available(factory) => Some(factory),
            Self::Unavailable(_) => None,
        }
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
