//! # scaffold-cli
//!
//! Command-line launcher for the agent scaffolds.
//!
//! - `serve`: run one of the server presets with the capability-gated
//!   service builder from `scaffold-server`
//! - `agents`: list the built-in agent apps
//! - `call`: execute one agent tool locally and print its JSON result
//!
//! The built-in agents are behind the `agent-runtime` feature (on by
//! default). Building without it gives the fallback service only.

pub mod cli;
pub mod commands;
pub mod presets;
pub mod serve;

pub use cli::{Cli, Commands, ServeArgs};
pub use presets::Preset;
