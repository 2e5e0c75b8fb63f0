use async_trait::async_trait;
use trip_core::budget::round_cents;
use trip_core::tools::{typed_args, Tool, ToolError, ToolResult};

use super::add::{operand_schema, OperandArgs};

/// Tool for multiplying two amounts
pub struct MultiplyTool;

impl MultiplyTool {
    pub fn new() -> Self {
        Self
    }

    /// Product rounded to cents
    pub fn multiply(a: f64, b: f64) -> f64 {
        round_cents(a * b)
    }
}

impl Default for MultiplyTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for MultiplyTool {
    fn name(&self) -> &str {
        "multiply"
    }

    fn description(&self) -> &str {
        "Multiply two numbers. The product is rounded to 2 decimal places."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        operand_schema("First factor", "Second factor")
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let operands: OperandArgs = typed_args(args)?;
        Ok(ToolResult::ok(
            Self::multiply(operands.a, operands.b).to_string(),
        ))
    }
}
