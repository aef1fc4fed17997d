use crate::cli::ServeArgs;
use anyhow::{Context, Result};
use scaffold_server::{Capabilities, ServiceConfig, build_app, serve};

/// Package the agent routes come from.
pub const FRAMEWORK_PACKAGE: &str = "scaffold-agents";

/// Read the configuration for `args`: preset defaults, then the
/// environment, then command-line flags.
pub fn load_config(args: &ServeArgs) -> Result<ServiceConfig> {
    load_config_with(args, |key| std::env::var(key).ok())
}

/// [`load_config`] with an arbitrary environment lookup.
pub fn load_config_with(args: &ServeArgs, lookup: impl Fn(&str) -> Option<String>) -> Result<ServiceConfig> {
    let config = ServiceConfig::from_lookup(args.preset.defaults(), lookup)
        .context("invalid server configuration in environment")?;
    Ok(match args.port {
        Some(port) => config.with_port(port),
        None => config,
    })
}

/// Probe for the built-in agent framework.
pub fn probe(config: &ServiceConfig) -> Capabilities {
    Capabilities::probe(FRAMEWORK_PACKAGE, || runtime::resolve(config))
}

pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    if let Err(e) = scaffold_telemetry::init_telemetry_with_format(args.preset.app_name(), args.log_format) {
        eprintln!("Failed to initialize telemetry: {e}");
    }

    let config = load_config(&args)?;
    tracing::info!(
        preset = ?args.preset,
        app.name = %config.app_name,
        port = config.port,
        agents_dir = %config.agents_dir.display(),
        "starting scaffold server"
    );

    let capabilities = probe(&config);
    let service = build_app(&capabilities, &config);

    println!("{} starting on http://0.0.0.0:{}", service.name(), config.port);
    println!("Press Ctrl+C to stop");

    serve(service, config.port).await.with_context(|| format!("server on port {} failed", config.port))
}

#[cfg(feature = "agent-runtime")]
mod runtime {
    use super::FRAMEWORK_PACKAGE;
    use scaffold_server::{AgentAppFactory, AppFactory, ProbeError, ServiceConfig};
    use std::sync::Arc;

    pub fn resolve(config: &ServiceConfig) -> Result<Arc<dyn AppFactory>, ProbeError> {
        let registry = scaffold_agents::builtin_registry()
            .map_err(|e| ProbeError::failed(FRAMEWORK_PACKAGE, e))?;
        Ok(Arc::new(AgentAppFactory::new(registry).with_security(config.security.clone())))
    }
}

#[cfg(not(feature = "agent-runtime"))]
mod runtime {
    use super::FRAMEWORK_PACKAGE;
    use scaffold_server::{AppFactory, ProbeError, ServiceConfig};
    use std::sync::Arc;

    pub fn resolve(_config: &ServiceConfig) -> Result<Arc<dyn AppFactory>, ProbeError> {
        Err(ProbeError::not_installed(FRAMEWORK_PACKAGE))
    }
}
