//! Estimation capability backed by a language model.
//!
//! Some planning answers (how long people stay at a place, what a route
//! costs) come from a model rather than an API. Tools receive an
//! [`Estimator`] so the backend can be replaced with a fixed stub.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hours assumed when no usable estimate comes back.
pub const DEFAULT_VISIT_HOURS: f64 = 3.0;

/// Placeholder used for unknown route prices and currencies.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimatorError {
    #[error("Estimator unavailable: {0}")]
    Unavailable(String),

    #[error("Estimation failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateKind {
    VisitDuration,
    RoutePrice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub kind: EstimateKind,
    pub prompt: String,
}

impl EstimateRequest {
    pub fn visit_duration(address: &str) -> Self {
        Self {
            kind: EstimateKind::VisitDuration,
            prompt: format!(
                "Estimate the average time people spend at '{}' in a day, plus a buffer. \
                 Reply with a single number of hours and nothing else.",
                address
            ),
        }
    }

    pub fn route_price(route: &RouteSummary) -> Self {
        let directions = route
            .directions
            .iter()
            .map(|step| step.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            kind: EstimateKind::RoutePrice,
            prompt: format!(
                "Estimate a fair transportation price for this route assuming a standard car ride.\n\
                 Origin: {}\nDestination: {}\nTotal Distance: {}\nTotal Duration: {}\n\
                 Directions:\n{}\n\
                 Reply as JSON: {{\"estimated_price\": <number or \"N/A\">, \"currency\": <code or \"N/A\">}}",
                route.origin, route.destination, route.total_distance, route.total_duration, directions
            ),
        }
    }
}

#[async_trait]
pub trait Estimator: Send + Sync {
    async fn estimate(&self, request: &EstimateRequest) -> Result<String, EstimatorError>;
}

pub type SharedEstimator = Arc<dyn Estimator>;

/// Always answers with the same text.
#[derive(Debug, Clone)]
pub struct FixedEstimator {
    response: String,
}

impl FixedEstimator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl Estimator for FixedEstimator {
    async fn estimate(&self, _request: &EstimateRequest) -> Result<String, EstimatorError> {
        Ok(self.response.clone())
    }
}

/// Used when no model backend is configured; every estimate falls back.
#[derive(Debug, Clone, Default)]
pub struct UnavailableEstimator;

#[async_trait]
impl Estimator for UnavailableEstimator {
    async fn estimate(&self, request: &EstimateRequest) -> Result<String, EstimatorError> {
        Err(EstimatorError::Unavailable(format!(
            "no estimator configured for {:?}",
            request.kind
        )))
    }
}

/// One step of a route, as described by a directions lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub instruction: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub travel_mode: String,
}

impl std::fmt::Display for RouteStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "  - {} ({}): Distance: {}, Duration: {}",
            self.instruction, self.travel_mode, self.distance, self.duration
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub total_distance: String,
    #[serde(default)]
    pub total_duration: String,
    #[serde(default)]
    pub directions: Vec<RouteStep>,
}

/// Price answer for a route. Either field may be "N/A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePriceEstimate {
    pub estimated_price: serde_json::Value,
    pub currency: String,
}

impl RoutePriceEstimate {
    pub fn not_available() -> Self {
        Self {
            estimated_price: serde_json::Value::String(NOT_AVAILABLE.to_string()),
            currency: NOT_AVAILABLE.to_string(),
        }
    }

    /// Reads the first JSON object in `response`. Numeric prices given as
    /// strings are converted to numbers.
    pub fn parse(response: &str) -> Option<Self> {
        let start = response.find('{')?;
        let end = response.rfind('}')?;
        if end < start {
            return None;
        }
        let mut estimate: RoutePriceEstimate = serde_json::from_str(&response[start..=end]).ok()?;

        if let Some(text) = estimate.estimated_price.as_str() {
            if let Ok(price) = text.trim().parse::<f64>() {
                estimate.estimated_price = serde_json::json!(price);
            }
        }
        match &estimate.estimated_price {
            serde_json::Value::Number(_) => Some(estimate),
            serde_json::Value::String(text) if text == NOT_AVAILABLE => Some(estimate),
            _ => None,
        }
    }
}

fn number_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").ok())
        .as_ref()
}

/// First non-negative decimal number in a model reply, e.g. "About 2.5 hours".
pub fn parse_hours(response: &str) -> Option<f64> {
    number_pattern()?
        .find(response)
        .and_then(|found| found.as_str().parse::<f64>().ok())
}

/// Average hours spent at `address`, or [`DEFAULT_VISIT_HOURS`] when the
/// estimator fails or answers without a number.
pub async fn estimate_visit_hours(estimator: &dyn Estimator, address: &str) -> f64 {
    match estimator
        .estimate(&EstimateRequest::visit_duration(address))
        .await
    {
        Ok(response) => parse_hours(&response).unwrap_or_else(|| {
            log::warn!("could not read hours from estimate {:?}", response);
            DEFAULT_VISIT_HOURS
        }),
        Err(e) => {
            log::warn!("visit duration estimate failed: {}", e);
            DEFAULT_VISIT_HOURS
        }
    }
}

/// Route price from the estimator, or "N/A" for both fields on any failure.
pub async fn estimate_route_price(estimator: &dyn Estimator, route: &RouteSummary) -> RoutePriceEstimate {
    match estimator.estimate(&EstimateRequest::route_price(route)).await {
        Ok(response) => RoutePriceEstimate::parse(&response).unwrap_or_else(|| {
            log::warn!("could not read route price from estimate {:?}", response);
            RoutePriceEstimate::not_available()
        }),
        Err(e) => {
            log::warn!("route price estimate failed: {}", e);
            RoutePriceEstimate::not_available()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route() -> RouteSummary {
        RouteSummary {
            origin: "A".to_string(),
            destination: "B".to_string(),
            total_distance: "5 mi".to_string(),
            total_duration: "20 mins".to_string(),
            directions: vec![RouteStep {
                instruction: "Head north".to_string(),
                distance: "1 mi".to_string(),
                duration: "5 mins".to_string(),
                travel_mode: "DRIVING".to_string(),
            }],
        }
    }

    #[test]
    fn parse_hours_reads_first_number() {
        assert_eq!(parse_hours("2.5"), Some(2.5));
        assert_eq!(parse_hours(" 4 \n"), Some(4.0));
        assert_eq!(parse_hours("About 1.75 hours, maybe 2"), Some(1.75));
        assert_eq!(parse_hours("a while"), None);
    }

    #[tokio::test]
    async fn visit_hours_uses_estimator_answer() {
        let estimator = FixedEstimator::new("2.5");
        assert_eq!(estimate_visit_hours(&estimator, "museum").await, 2.5);
    }

    #[tokio::test]
    async fn visit_hours_falls_back_on_unparseable_answer() {
        let estimator = FixedEstimator::new("It depends");
        assert_eq!(estimate_visit_hours(&estimator, "museum").await, DEFAULT_VISIT_HOURS);
    }

    #[tokio::test]
    async fn visit_hours_falls_back_when_unavailable() {
        let estimator = UnavailableEstimator;
        assert_eq!(estimate_visit_hours(&estimator, "museum").await, DEFAULT_VISIT_HOURS);
    }

    #[test]
    fn route_price_parse_accepts_embedded_json() {
        let estimate =
            RoutePriceEstimate::parse("Sure: {\"estimated_price\": \"18.50\", \"currency\": \"USD\"}")
                .unwrap();
        assert_eq!(estimate.estimated_price, serde_json::json!(18.5));
        assert_eq!(estimate.currency, "USD");
    }

    #[test]
    fn route_price_parse_accepts_not_available() {
        let estimate =
            RoutePriceEstimate::parse(r#"{"estimated_price": "N/A", "currency": "N/A"}"#).unwrap();
        assert_eq!(estimate, RoutePriceEstimate::not_available());
    }

    #[test]
    fn route_price_parse_rejects_garbage() {
        assert!(RoutePriceEstimate::parse("no idea").is_none());
        assert!(RoutePriceEstimate::parse(r#"{"estimated_price": "cheap", "currency": "USD"}"#).is_none());
        assert!(RoutePriceEstimate::parse("} {").is_none());
    }

    #[tokio::test]
    async fn route_price_falls_back_when_unavailable() {
        let estimate = estimate_route_price(&UnavailableEstimator, &route()).await;
        assert_eq!(estimate, RoutePriceEstimate::not_available());
    }

    #[tokio::test]
    async fn route_price_uses_estimator_answer() {
        let estimator = FixedEstimator::new(r#"{"estimated_price": 22, "currency": "EUR"}"#);
        let estimate = estimate_route_price(&estimator, &route()).await;
        assert_eq!(estimate.estimated_price, serde_json::json!(22));
        assert_eq!(estimate.currency, "EUR");
    }

    #[test]
    fn route_prompt_lists_directions() {
        let request = EstimateRequest::route_price(&route());
        assert_eq!(request.kind, EstimateKind::RoutePrice);
        assert!(request.prompt.contains("Head north (DRIVING)"));
        assert!(request.prompt.contains("Total Distance: 5 mi"));
    }
}
