use std::sync::Arc;

use async_trait::async_trait;
use trip_core::estimator::{SharedEstimator, UnavailableEstimator};
use trip_core::places::{SharedVisitedPlaces, VisitedPlaces};
use trip_core::tools::{
    normalize_tool_name, parse_tool_args, SharedTool, Tool, ToolCall, ToolError, ToolExecutor,
    ToolResult, ToolSchema,
};

use crate::tools::{
    AddTool, AverageTimeAtAddressTool, ClassifyPriceLevelTool, ClassifyRatingTool,
    ConvertUnixDateTool, EstimateHotelCostTool, EstimateRoutePriceTool,
    FilterUnvisitedPlacesTool, MultiplyTool, ToolRegistry, TravelBudgetAllocatorTool,
};

/// List of all built-in tool names
pub const BUILTIN_TOOL_NAMES: [&str; 11] = [
    "travel_budget_allocator",
    "add",
    "multiply",
    "estimate_hotel_cost",
    "convert_unix_to_mmddyyyy",
    "convert_unix_to_yyyymmdd",
    "classify_price_level",
    "classify_rating",
    "calculate_average_time_spent_at_an_address",
    "calculate_estimated_route_price",
    "filter_unvisited_places",
];

/// Normalizes a tool reference to a built-in tool name
///
/// Handles namespaces and legacy aliases like "budget_allocator" ->
/// "travel_budget_allocator". Returns None if the tool is not built in.
pub fn normalize_tool_ref(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let tool_name = match normalize_tool_name(trimmed) {
        "budget_allocator" => "travel_budget_allocator",
        "estimate_route_price" => "calculate_estimated_route_price",
        other => other,
    };
    if BUILTIN_TOOL_NAMES.iter().any(|name| name == &tool_name) {
        Some(tool_name.to_string())
    } else {
        None
    }
}

/// Checks if a tool reference is a built-in tool
pub fn is_builtin_tool(value: &str) -> bool {
    normalize_tool_ref(value).is_some()
}

/// Creates the built-in tool with the given (normalized) name
fn builtin_tool(
    name: &str,
    estimator: &SharedEstimator,
    visited: &SharedVisitedPlaces,
) -> Option<SharedTool> {
    let tool: SharedTool = match name {
        "travel_budget_allocator" => Arc::new(TravelBudgetAllocatorTool::new()),
        "add" => Arc::new(AddTool::new()),
        "multiply" => Arc::new(MultiplyTool::new()),
        "estimate_hotel_cost" => Arc::new(EstimateHotelCostTool::new()),
        "convert_unix_to_mmddyyyy" => Arc::new(ConvertUnixDateTool::mmddyyyy()),
        "convert_unix_to_yyyymmdd" => Arc::new(ConvertUnixDateTool::yyyymmdd()),
        "classify_price_level" => Arc::new(ClassifyPriceLevelTool::new()),
        "classify_rating" => Arc::new(ClassifyRatingTool::new()),
        "calculate_average_time_spent_at_an_address" => {
            Arc::new(AverageTimeAtAddressTool::new(Arc::clone(estimator)))
        }
        "calculate_estimated_route_price" => {
            Arc::new(EstimateRoutePriceTool::new(Arc::clone(estimator)))
        }
        "filter_unvisited_places" => Arc::new(FilterUnvisitedPlacesTool::new(Arc::clone(visited))),
        _ => return None,
    };
    Some(tool)
}

/// Travel tool executor that uses ToolRegistry for dynamic dispatch
///
/// One executor serves one planning session: its `VisitedPlaces` set is
/// shared by every call made through it.
pub struct TravelToolExecutor {
    registry: ToolRegistry,
    visited: SharedVisitedPlaces,
}

impl TravelToolExecutor {
    /// Creates an executor with all built-in tools, no estimator backend and
    /// a fresh session
    pub fn new() -> Self {
        TravelToolExecutorBuilder::new().with_default_tools().build()
    }

    /// Creates an executor with all built-in tools backed by `estimator`
    pub fn with_estimator(estimator: SharedEstimator) -> Self {
        TravelToolExecutorBuilder::new()
            .with_default_tools()
            .with_estimator(estimator)
            .build()
    }

    /// Returns a reference to the internal registry
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Places already suggested during this session
    pub fn visited_places(&self) -> &SharedVisitedPlaces {
        &self.visited
    }

    /// Returns all built-in tool schemas
    pub fn tool_schemas() -> Vec<ToolSchema> {
        Self::new().list_tools()
    }

    /// Registers a custom tool to this executor
    pub fn register_tool<T: Tool + 'static>(&self, tool: T) -> Result<(), ToolError> {
        self.registry
            .register(tool)
            .map_err(|e| ToolError::Execution(e.to_string()))
    }
}

impl Default for TravelToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutor for TravelToolExecutor {
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let args = parse_tool_args(&call.function.arguments)?;
        let tool_name = normalize_tool_name(&call.function.name);

        let tool = self
            .registry
            .get(tool_name)
            .ok_or_else(|| ToolError::NotFound(format!("Tool '{}' not found", tool_name)))?;

        log::debug!("Executing tool '{}' (call {})", tool_name, call.id);
        let result = tool.execute(args).await;
        if let Err(e) = &result {
            log::warn!("Tool '{}' failed: {}", tool_name, e);
        }
        result
    }

    fn list_tools(&self) -> Vec<ToolSchema> {
        self.registry.list_tools()
    }
}

/// Builder for constructing a TravelToolExecutor with custom tool configurations
///
/// Tools are instantiated in `build`, so the estimator and session can be set
/// in any order.
pub struct TravelToolExecutorBuilder {
    tool_names: Vec<String>,
    custom_tools: Vec<SharedTool>,
    estimator: SharedEstimator,
    visited: SharedVisitedPlaces,
}

impl TravelToolExecutorBuilder {
    /// Creates a new builder with no tools registered
    pub fn new() -> Self {
        Self {
            tool_names: Vec::new(),
            custom_tools: Vec::new(),
            estimator: Arc::new(UnavailableEstimator),
            visited: VisitedPlaces::shared(),
        }
    }

    /// Registers all built-in tools
    pub fn with_default_tools(mut self) -> Self {
        self.tool_names = BUILTIN_TOOL_NAMES.iter().map(|name| name.to_string()).collect();
        self
    }

    /// Registers a specific built-in tool by name or alias
    pub fn with_builtin_tool(mut self, name: &str) -> Result<Self, ToolError> {
        let tool_name = normalize_tool_ref(name)
            .ok_or_else(|| ToolError::NotFound(format!("Unknown tool: {}", name)))?;
        if !self.tool_names.contains(&tool_name) {
            self.tool_names.push(tool_name);
        }
        Ok(self)
    }

    /// Registers a custom tool
    pub fn with_tool<T: Tool + 'static>(mut self, tool: T) -> Self {
        self.custom_tools.push(Arc::new(tool));
        self
    }

    /// Backend for the estimation tools
    pub fn with_estimator(mut self, estimator: SharedEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    /// Shares an existing session's visited places
    pub fn with_visited_places(mut self, visited: SharedVisitedPlaces) -> Self {
        self.visited = visited;
        self
    }

    /// Builds the executor
    ///
    /// A custom tool whose name collides with an earlier tool is skipped with a
    /// warning.
    pub fn build(self) -> TravelToolExecutor {
        let registry = ToolRegistry::new();

        let builtins = self
            .tool_names
            .iter()
            .filter_map(|name| builtin_tool(name, &self.estimator, &self.visited));
        for tool in builtins.chain(self.custom_tools) {
            if let Err(e) = registry.register_shared(tool) {
                log::warn!("Skipping tool: {}", e);
            }
        }

        TravelToolExecutor {
            registry,
            visited: self.visited,
        }
    }
}

impl Default for TravelToolExecutorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
