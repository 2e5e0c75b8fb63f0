//! Budget allocation tool.
//!
//! Splits a total trip budget across accommodation, transportation, food,
//! activities and miscellaneous spending, weighted by the trip tier.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use trip_core::budget::{Allocation, BudgetAllocation, BudgetError, CategoryWeights};
use trip_core::tools::{typed_args, Tool, ToolError, ToolResult};
use trip_core::TripTier;

/// Tool for splitting a travel budget into spend categories
pub struct TravelBudgetAllocatorTool;

/// Arguments for the budget allocator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelBudgetAllocatorArgs {
    /// Total budget in any currency
    pub total_budget: f64,
    /// "Low", "Medium" or "High"; anything else counts as "Medium"
    #[serde(default, alias = "trip_type")]
    pub trip_tier: Option<String>,
    /// Trip length in days; `5.0` is read as 5
    #[serde(default, deserialize_with = "super::deserialize_day_count")]
    pub duration_days: i64,
    /// Explicit category weights, replacing the tier weighting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_weights: Option<BTreeMap<String, f64>>,
}

impl TravelBudgetAllocatorTool {
    pub fn new() -> Self {
        Self
    }

    pub fn allocate(args: &TravelBudgetAllocatorArgs) -> Result<Allocation, BudgetError> {
        let tier = TripTier::from_label(args.trip_tier.as_deref().unwrap_or_default());
        let request = match &args.category_weights {
            Some(named) => BudgetAllocation::with_weights(
                args.total_budget,
                tier,
                args.duration_days,
                CategoryWeights::from_named(named)?,
            )?,
            None => BudgetAllocation::new(args.total_budget, tier, args.duration_days)?,
        };
        Ok(request.allocate())
    }
}

impl Default for TravelBudgetAllocatorTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for TravelBudgetAllocatorTool {
    fn name(&self) -> &str {
        "travel_budget_allocator"
    }

    fn description(&self) -> &str {
        "Allocates a travel budget across accommodation, transportation, food, activities and miscellaneous, based on the total budget, the trip tier (Low, Medium or High) and the trip duration in days. Returns the amount for each category, rounded to cents."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "total_budget": {
                    "type": "number",
                    "description": "Total trip budget. Must be greater than zero."
                },
                "trip_tier": {
                    "type": "string",
                    "enum": ["Low", "Medium", "High"],
                    "description": "Spend bracket of the trip. Unrecognized values are treated as Medium."
                },
                "duration_days": {
                    "type": "integer",
                    "description": "Trip length in whole days. Fractional values are truncated."
                },
                "category_weights": {
                    "type": "object",
                    "description": "Optional custom weights per category (accommodation, transportation, food, activities, miscellaneous). Renormalized to sum to 1.",
                    "additionalProperties": { "type": "number" }
                }
            },
            "required": ["total_budget", "trip_tier", "duration_days"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let allocator_args: TravelBudgetAllocatorArgs = typed_args(args)?;

        match Self::allocate(&allocator_args) {
            Ok(allocation) => {
                log::info!(
                    "Allocated budget {} ({} days)",
                    allocator_args.total_budget,
                    allocator_args.duration_days
                );
                Ok(ToolResult::json(&json!(allocation.to_named())))
            }
            Err(e) => Ok(ToolResult::failed(e.to_string())),
        }
    }
}
