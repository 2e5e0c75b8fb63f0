use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use trip_core::budget::round_cents;
use trip_core::tools::{typed_args, Tool, ToolError, ToolResult};

/// Tool for estimating the total cost of a hotel stay
pub struct EstimateHotelCostTool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateHotelCostArgs {
    /// Price per night of the selected hotel
    pub price_per_night: f64,
    /// Number of nights
    #[serde(deserialize_with = "super::deserialize_day_count")]
    pub total_days: i64,
}

impl EstimateHotelCostTool {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate(price_per_night: f64, total_days: i64) -> Result<f64, String> {
        if !price_per_night.is_finite() || price_per_night < 0.0 {
            return Err("Price per night must be a non-negative number".to_string());
        }
        if total_days < 0 {
            return Err("Total days cannot be negative".to_string());
        }
        Ok(round_cents(price_per_night * total_days as f64))
    }
}

impl Default for EstimateHotelCostTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for EstimateHotelCostTool {
    fn name(&self) -> &str {
        "estimate_hotel_cost"
    }

    fn description(&self) -> &str {
        "Estimate the total hotel cost from the price per night and the number of days of the stay."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "price_per_night": {
                    "type": "number",
                    "description": "Price per night of the selected hotel in the base currency"
                },
                "total_days": {
                    "type": "integer",
                    "description": "Total number of days the user will stay. Fractional values are truncated."
                }
            },
            "required": ["price_per_night", "total_days"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let cost_args: EstimateHotelCostArgs = typed_args(args)?;

        match Self::estimate(cost_args.price_per_night, cost_args.total_days) {
            Ok(total) => Ok(ToolResult::ok(total.to_string())),
            Err(e) => Ok(ToolResult::failed(e)),
        }
    }
}
