use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use trip_core::budget::round_cents;
use trip_core::tools::{typed_args, Tool, ToolError, ToolResult};

/// Tool for adding two amounts
pub struct AddTool;

/// Operands shared by the arithmetic tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperandArgs {
    pub a: f64,
    pub b: f64,
}

impl AddTool {
    pub fn new() -> Self {
        Self
    }

    /// Sum rounded to cents
    pub fn add(a: f64, b: f64) -> f64 {
        round_cents(a + b)
    }
}

impl Default for AddTool {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn operand_schema(first: &str, second: &str) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "a": { "type": "number", "description": first },
            "b": { "type": "number", "description": second }
        },
        "required": ["a", "b"]
    })
}

#[async_trait]
impl Tool for AddTool {
    fn name(&self) -> &str {
        "add"
    }

    fn description(&self) -> &str {
        "Add two numbers. The sum is rounded to 2 decimal places."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        operand_schema("First number", "Second number")
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let operands: OperandArgs = typed_args(args)?;
        Ok(ToolResult::ok(Self::add(operands.a, operands.b).to_string()))
    }
}
