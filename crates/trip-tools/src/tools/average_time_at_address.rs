use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use trip_core::estimator::{estimate_visit_hours, SharedEstimator};
use trip_core::tools::{typed_args, Tool, ToolError, ToolResult};

/// Tool estimating how long visitors usually stay at a place
pub struct AverageTimeAtAddressTool {
    estimator: SharedEstimator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageTimeAtAddressArgs {
    /// Address or kind of place, e.g. "museum"
    #[serde(alias = "place_type")]
    pub address: String,
}

impl AverageTimeAtAddressTool {
    pub fn new(estimator: SharedEstimator) -> Self {
        Self { estimator }
    }
}

#[async_trait]
impl Tool for AverageTimeAtAddressTool {
    fn name(&self) -> &str {
        "calculate_average_time_spent_at_an_address"
    }

    fn description(&self) -> &str {
        "Estimate the average time in hours people spend at an address or type of place (e.g. \"museum\"), including a buffer. Falls back to 3 hours when no estimate is available."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "address": {
                    "type": "string",
                    "description": "Address or type of the place to estimate time for"
                }
            },
            "required": ["address"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let time_args: AverageTimeAtAddressArgs = typed_args(args)?;
        if time_args.address.trim().is_empty() {
            return Ok(ToolResult::failed("Address cannot be empty"));
        }

        let hours = estimate_visit_hours(self.estimator.as_ref(), &time_args.address).await;
        Ok(ToolResult::ok(hours.to_string()))
    }
}
