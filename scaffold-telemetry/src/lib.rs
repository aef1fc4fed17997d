//! # Scaffold Telemetry
//!
//! Structured logging for the scaffolds using `tracing`.
//!
//! ## Usage
//!
//! ```rust
//! use scaffold_telemetry::{init_telemetry, info};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_telemetry("my-service")?;
//!     info!("service started");
//!     Ok(())
//! }
//! ```

pub mod init;
pub mod spans;

// Re-export tracing macros for convenience
pub use tracing::{Span, debug, error, info, instrument, trace, warn};

pub use init::{LogFormat, TelemetryError, init_telemetry, init_telemetry_with_format};
pub use spans::*;
