//! # scaffold-tool
//!
//! Tools that scaffold agents expose to their model.
//!
//! - [`FunctionTool`] - Create tools from async Rust functions
//! - [`GoogleSearchTool`] - Model-side web search grounding
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scaffold_tool::FunctionTool;
//! use scaffold_core::{ToolContext, Result};
//! use serde_json::{json, Value};
//! use std::sync::Arc;
//!
//! async fn get_weather(_ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value> {
//!     let city = args["city"].as_str().unwrap_or("Unknown");
//!     Ok(json!({ "city": city, "condition": "sunny" }))
//! }
//!
//! let tool = FunctionTool::new("get_weather", "Get current weather for a city", get_weather);
//! ```

pub mod builtin;
mod function_tool;

pub use builtin::GoogleSearchTool;
pub use function_tool::{FunctionTool, parse_args};
