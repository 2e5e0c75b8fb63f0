pub mod executor;
pub mod registry;
pub mod types;

pub use executor::{parse_tool_args, typed_args, ToolError, ToolExecutor};
pub use registry::{normalize_tool_name, RegistryError, SharedTool, Tool, ToolRegistry};
pub use types::{FunctionCall, FunctionSchema, ToolCall, ToolResult, ToolSchema};
