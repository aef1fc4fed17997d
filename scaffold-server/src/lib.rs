//! # scaffold-server
//!
//! Builds the HTTP service for an agent scaffold.
//!
//! At process start the framework is probed once with
//! [`Capabilities::probe`]. [`build_app`] then either delegates to the
//! framework's [`AppFactory`] or assembles a minimal fallback service with
//! `GET /health` and `POST /run`, where `/run` explains how to enable the
//! framework instead of failing silently.
//!
//! ```rust,ignore
//! use scaffold_server::{Capabilities, ProbeError, ServiceConfig, ServiceDefaults, build_app};
//!
//! let config = ServiceConfig::from_env(ServiceDefaults::new("my-server", 8000))?;
//! let capabilities = Capabilities::probe("scaffold-agents", || {
//!     Err(ProbeError::not_installed("scaffold-agents"))
//! });
//! let service = build_app(&capabilities, &config);
//! ```

pub mod agent_app;
pub mod assembler;
pub mod capability;
pub mod config;
pub mod fallback;
mod layers;

pub use agent_app::AgentAppFactory;
pub use assembler::{Service, build_app, serve};
pub use capability::{AppFactory, Capabilities, FactoryError, FactoryOptions, ProbeError};
pub use config::{ConfigError, SecurityConfig, ServiceConfig, ServiceDefaults};
pub use fallback::{ErrorDetail, HealthStatus, RunMode, RunRequest, fallback_service};
