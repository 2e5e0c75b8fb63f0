use async_trait::async_trait;
use serde_json::json;
use trip_core::estimator::{estimate_route_price, RouteSummary, SharedEstimator};
use trip_core::tools::{typed_args, Tool, ToolError, ToolResult};

/// Tool estimating a fair transportation price for a route
pub struct EstimateRoutePriceTool {
    estimator: SharedEstimator,
}

impl EstimateRoutePriceTool {
    pub fn new(estimator: SharedEstimator) -> Self {
        Self { estimator }
    }
}

#[async_trait]
impl Tool for EstimateRoutePriceTool {
    fn name(&self) -> &str {
        "calculate_estimated_route_price"
    }

    fn description(&self) -> &str {
        "Estimate a fair transportation price for a route from its origin, destination, total distance, total duration and step-by-step directions. Returns {\"estimated_price\", \"currency\"}, with \"N/A\" when no estimate is possible."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "origin": { "type": "string", "description": "Starting address" },
                "destination": { "type": "string", "description": "Ending address" },
                "total_distance": { "type": "string", "description": "Total route distance, e.g. \"5 mi\"" },
                "total_duration": { "type": "string", "description": "Total route duration, e.g. \"20 mins\"" },
                "directions": {
                    "type": "array",
                    "description": "Route steps",
                    "items": {
                        "type": "object",
                        "properties": {
                            "instruction": { "type": "string" },
                            "distance": { "type": "string" },
                            "duration": { "type": "string" },
                            "travel_mode": { "type": "string" }
                        },
                        "required": ["instruction"]
                    }
                }
            },
            "required": ["origin", "destination"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let route: RouteSummary = typed_args(args)?;
        let estimate = estimate_route_price(self.estimator.as_ref(), &route).await;

        let value = serde_json::to_value(&estimate)
            .map_err(|e| ToolError::Execution(format!("Failed to encode estimate: {}", e)))?;
        Ok(ToolResult::json(&value))
    }
}
