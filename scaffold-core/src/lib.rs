//! # scaffold-core
//!
//! Core traits and types shared by the agent scaffolds.
//!
//! ## Overview
//!
//! - [`AgentDefinition`] - Static agent configuration (name, model, instruction, tools)
//! - [`Tool`] / [`ToolContext`] - Callback tools exposed by an agent
//! - [`AgentRegistry`] - Lookup of agent definitions by app name
//! - [`ScaffoldError`] / [`Result`] - Unified error handling
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scaffold_core::{AgentDefinition, ModelRef};
//!
//! let agent = AgentDefinition::builder("tool_agent")
//!     .model(ModelRef::gemini("gemini-2.0-flash"))
//!     .description("Tool agent")
//!     .instruction("You are a helpful agent.")
//!     .build()?;
//! ```

pub mod agent;
pub mod agent_loader;
pub mod error;
pub mod model;
pub mod tool;

pub use agent::{AgentCard, AgentDefinition, AgentDefinitionBuilder};
pub use agent_loader::AgentRegistry;
pub use error::{Result, ScaffoldError};
pub use model::ModelRef;
pub use tool::{InvocationToolContext, Tool, ToolContext};
