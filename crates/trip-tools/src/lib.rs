//! Built-in tools for trip planning.
//!
//! Every tool implements the `Tool` trait from `trip-core` and is registered
//! with a `ToolRegistry` by the `TravelToolExecutor`.

mod executor;
pub mod tools;

pub use executor::{
    is_builtin_tool, normalize_tool_ref, TravelToolExecutor, TravelToolExecutorBuilder,
    BUILTIN_TOOL_NAMES,
};

pub use tools::{
    AddTool, AverageTimeAtAddressTool, ClassifyPriceLevelTool, ClassifyRatingTool,
    ConvertUnixDateTool, EstimateHotelCostTool, EstimateRoutePriceTool,
    FilterUnvisitedPlacesTool, MultiplyTool, ToolRegistry, TravelBudgetAllocatorTool,
    UnixDateFormat,
};

#[cfg(test)]
mod registry_tests;
