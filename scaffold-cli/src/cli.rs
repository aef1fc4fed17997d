use crate::presets::Preset;
use clap::{Args, Parser, Subcommand};
use scaffold_telemetry::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "scaffold")]
#[command(about = "Agent scaffold servers and tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start a scaffold server
    Serve(ServeArgs),

    /// List the built-in agent apps and their tools
    Agents,

    /// Execute an agent tool locally and print the result
    Call {
        /// Agent app name, as listed by `agents`
        app: String,

        /// Tool name
        tool: String,

        /// JSON object with the tool arguments
        args: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Server preset: default app name and port
    #[arg(long, value_enum, default_value_t = Preset::A2a)]
    pub preset: Preset,

    /// Listen port; overrides PORT and the preset default
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Console log format (pretty or json)
    #[arg(long, default_value = "pretty")]
    pub log_format: LogFormat,
}
