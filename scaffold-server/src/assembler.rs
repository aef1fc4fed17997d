use crate::{
    capability::{Capabilities, FactoryError, FactoryOptions, panic_message},
    config::ServiceConfig,
    fallback::{RunMode, fallback_service},
};
use axum::Router;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// An assembled HTTP service: a display name plus its router.
#[derive(Clone, Debug)]
pub struct Service {
    name: String,
    router: Router,
}

impl Service {
    pub fn new(name: impl Into<String>, router: Router) -> Self {
        Self { name: name.into(), router }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Assemble the service for `config`.
///
/// With the framework available, its factory builds the app and only the
/// display name is replaced. Otherwise, or when the factory fails, the
/// fallback service is returned. Never panics on factory failure.
pub fn build_app(capabilities: &Capabilities, config: &ServiceConfig) -> Service {
    let span = scaffold_telemetry::service_assemble_span(&config.app_name);
    let _enter = span.enter();

    if config.allow_origins.is_empty() {
        tracing::warn!("no ALLOW_ORIGINS configured, CORS allows any origin");
    }

    let factory = match capabilities {
        Capabilities::Available(factory) => factory,
        Capabilities::Unavailable(reason) => {
            tracing::info!(%reason, "serving fallback routes");
            return fallback_service(
                config,
                false,
                RunMode::Unavailable { remediation: reason.remediation() },
            );
        }
    };

    let options = FactoryOptions::from_config(config);
    let created = catch_unwind(AssertUnwindSafe(|| factory.create_app(options)))
        .unwrap_or_else(|payload| Err(FactoryError::Panicked(panic_message(payload.as_ref()))));

    match created {
        Ok(mut service) => {
            service.set_name(config.app_name.clone());
            tracing::info!(framework = factory.framework(), "framework app assembled");
            service
        }
        Err(e) => {
            tracing::error!(framework = factory.framework(), error = %e, "framework app failed to build, serving fallback routes");
            fallback_service(config, true, RunMode::Failed { cause: e.to_string() })
        }
    }
}

/// Bind `service` to `0.0.0.0:port` and serve until Ctrl-C.
pub async fn serve(service: Service, port: u16) -> std::io::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(app.name = service.name(), %addr, "listening");

    axum::serve(listener, service.into_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
