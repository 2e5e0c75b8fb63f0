//! Price-level and rating classification tools.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use trip_core::levels::{RatingLevel, TripTier};
use trip_core::tools::{typed_args, Tool, ToolError, ToolResult};

/// Tool mapping a Places API price level to a trip tier
pub struct ClassifyPriceLevelTool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyPriceLevelArgs {
    /// 0 = free, 1 = inexpensive, 2 = moderate, 3 = expensive, 4 = very expensive
    pub price_level: i64,
}

impl ClassifyPriceLevelTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassifyPriceLevelTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for ClassifyPriceLevelTool {
    fn name(&self) -> &str {
        "classify_price_level"
    }

    fn description(&self) -> &str {
        "Map a numeric price level (0 = free to 4 = very expensive) to a trip tier: Low, Medium or High. Use the tier with travel_budget_allocator."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "price_level": {
                    "type": "integer",
                    "description": "Price level from 0 (free) to 4 (very expensive)"
                }
            },
            "required": ["price_level"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let level_args: ClassifyPriceLevelArgs = typed_args(args)?;
        let tier = TripTier::from_price_level(level_args.price_level);

        Ok(ToolResult::json(&json!({
            "tier": tier.label(),
            "min_price_level": tier.min_price_level(),
        })))
    }
}

/// Tool mapping a review rating to a rating level
pub struct ClassifyRatingTool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRatingArgs {
    /// Review rating, usually 1.0 to 5.0
    pub rating: f64,
}

impl ClassifyRatingTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassifyRatingTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for ClassifyRatingTool {
    fn name(&self) -> &str {
        "classify_rating"
    }

    fn description(&self) -> &str {
        "Map a numeric review rating (1.0 to 5.0) to a rating level: Low (below 3.0), Medium (3.0 to 4.0) or High (4.0 and above)."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "rating": {
                    "type": "number",
                    "description": "Review rating, e.g. 4.5"
                }
            },
            "required": ["rating"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let rating_args: ClassifyRatingArgs = typed_args(args)?;
        let level = RatingLevel::from_numerical_rating(rating_args.rating);

        Ok(ToolResult::json(&json!({
            "level": level.label(),
            "min_rating": level.min_rating(),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn result_json(tool: &dyn Tool, args: serde_json::Value) -> serde_json::Value {
        let result = tool.execute(args).await.unwrap();
        assert!(result.success);
        serde_json::from_str(&result.result).unwrap()
    }

    #[tokio::test]
    async fn test_price_level_tiers() {
        let tool = ClassifyPriceLevelTool::new();

        let high = result_json(&tool, json!({"price_level": 4})).await;
        assert_eq!(high, json!({"tier": "High", "min_price_level": 4}));

        let medium = result_json(&tool, json!({"price_level": 3})).await;
        assert_eq!(medium["tier"], "Medium");

        let low = result_json(&tool, json!({"price_level": 1})).await;
        assert_eq!(low["tier"], "Low");
    }

    #[tokio::test]
    async fn test_rating_levels() {
        let tool = ClassifyRatingTool::new();

        let high = result_json(&tool, json!({"rating": 4.6})).await;
        assert_eq!(high, json!({"level": "High", "min_rating": 4.0}));

        let low = result_json(&tool, json!({"rating": 2})).await;
        assert_eq!(low["level"], "Low");
    }

    #[tokio::test]
    async fn test_missing_argument() {
        let result = ClassifyRatingTool::new().execute(json!({})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
