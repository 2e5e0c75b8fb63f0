use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use trip_core::places::{PlaceCandidate, SharedVisitedPlaces};
use trip_core::tools::{typed_args, Tool, ToolError, ToolResult};

/// Tool dropping places already suggested in this planning session
pub struct FilterUnvisitedPlacesTool {
    visited: SharedVisitedPlaces,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterUnvisitedPlacesArgs {
    pub places: Vec<PlaceCandidate>,
}

impl FilterUnvisitedPlacesTool {
    pub fn new(visited: SharedVisitedPlaces) -> Self {
        Self { visited }
    }

    pub fn visited(&self) -> &SharedVisitedPlaces {
        &self.visited
    }
}

#[async_trait]
impl Tool for FilterUnvisitedPlacesTool {
    fn name(&self) -> &str {
        "filter_unvisited_places"
    }

    fn description(&self) -> &str {
        "Remove places already suggested earlier in this conversation from a list of nearby places, remember the rest, and rank them by rating (highest first) then price level (lowest first)."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "places": {
                    "type": "array",
                    "description": "Nearby place candidates",
                    "items": {
                        "type": "object",
                        "properties": {
                            "place_id": { "type": "string" },
                            "name": { "type": "string" },
                            "latitude": { "type": "number" },
                            "longitude": { "type": "number" },
                            "rating": { "type": "number" },
                            "price_level": { "type": "integer" }
                        },
                        "required": ["place_id", "name"]
                    }
                }
            },
            "required": ["places"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let filter_args: FilterUnvisitedPlacesArgs = typed_args(args)?;
        let fresh = self.visited.take_unvisited(filter_args.places);

        let value = serde_json::to_value(&fresh)
            .map_err(|e| ToolError::Execution(format!("Failed to encode places: {}", e)))?;
        Ok(ToolResult::json(&value))
    }
}
