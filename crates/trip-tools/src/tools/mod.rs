mod add;
mod average_time_at_address;
mod classify_level;
mod convert_unix_date;
mod estimate_hotel_cost;
mod estimate_route_price;
mod filter_unvisited_places;
mod multiply;
mod travel_budget_allocator;

pub use add::{AddTool, OperandArgs};
pub use average_time_at_address::{AverageTimeAtAddressArgs, AverageTimeAtAddressTool};
pub use classify_level::{
    ClassifyPriceLevelArgs, ClassifyPriceLevelTool, ClassifyRatingArgs, ClassifyRatingTool,
};
pub use convert_unix_date::{ConvertUnixDateArgs, ConvertUnixDateTool, UnixDateFormat};
pub use estimate_hotel_cost::{EstimateHotelCostArgs, EstimateHotelCostTool};
pub use estimate_route_price::EstimateRoutePriceTool;
pub use filter_unvisited_places::{FilterUnvisitedPlacesArgs, FilterUnvisitedPlacesTool};
pub use multiply::MultiplyTool;
pub use travel_budget_allocator::{TravelBudgetAllocatorArgs, TravelBudgetAllocatorTool};

pub use trip_core::tools::ToolRegistry;

/// Reads a day count sent either as an integer or as a number like `5.0`.
/// Fractions are truncated toward zero.
pub(crate) fn deserialize_day_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde::Deserialize;

    let days = f64::deserialize(deserializer)?;
    if !days.is_finite() {
        return Err(D::Error::custom("day count must be a finite number"));
    }
    Ok(days.trunc() as i64)
}
