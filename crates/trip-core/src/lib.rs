//! Core of the trip planner: budget allocation, place bookkeeping, the
//! estimator capability and the tool abstraction the planning agent calls.

pub mod budget;
pub mod config;
pub mod estimator;
pub mod levels;
pub mod places;
pub mod tools;

pub use budget::{allocate, Allocation, BudgetAllocation, BudgetCategory, BudgetError, CategoryWeights};
pub use config::{ConfigError, Settings, Units};
pub use estimator::{
    estimate_route_price, estimate_visit_hours, EstimateKind, EstimateRequest, Estimator,
    EstimatorError, FixedEstimator, RoutePriceEstimate, RouteStep, RouteSummary, SharedEstimator,
    UnavailableEstimator,
};
pub use levels::{AccommodationType, PlaceCategory, PlaceType, RatingLevel, TripTier};
pub use places::{PlaceCandidate, SharedVisitedPlaces, VisitedPlaces};
pub use tools::{
    normalize_tool_name, parse_tool_args, typed_args, FunctionCall, FunctionSchema, RegistryError,
    SharedTool, Tool, ToolCall, ToolError, ToolExecutor, ToolRegistry, ToolResult, ToolSchema,
};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
