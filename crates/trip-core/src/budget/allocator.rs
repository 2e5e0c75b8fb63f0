//! Tier-weighted split of a total travel budget.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::levels::TripTier;

use super::types::{round_cents, BudgetCategory, BudgetError, CategoryWeights};

/// Starting weights in `BudgetCategory::ALL` order.
pub const BASE_WEIGHTS: [f64; 5] = [0.35, 0.25, 0.15, 0.15, 0.10];

/// Per-tier adjustment added to the base weights before renormalization.
pub fn tier_delta(tier: TripTier) -> [f64; 5] {
    match tier {
        TripTier::High => [0.10, 0.0, 0.05, 0.0, -0.05],
        TripTier::Medium => [-0.05, 0.10, 0.0, 0.0, 0.0],
        TripTier::Low => [0.0, 0.0, -0.05, 0.0, 0.05],
    }
}

/// Base weights adjusted for `tier` and renormalized to sum to one.
pub fn tier_weights(tier: TripTier) -> CategoryWeights {
    let delta = tier_delta(tier);
    let mut raw = BASE_WEIGHTS;
    for (weight, adjustment) in raw.iter_mut().zip(delta) {
        *weight += adjustment;
    }
    // Every tier delta keeps all weights non-negative.
    CategoryWeights::renormalized(raw)
}

/// A single allocation request. Weights are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAllocation {
    total_budget: f64,
    trip_tier: TripTier,
    duration_days: i64,
    weights: CategoryWeights,
}

impl BudgetAllocation {
    /// Weights derived from `trip_tier`.
    pub fn new(total_budget: f64, trip_tier: TripTier, duration_days: i64) -> Result<Self, BudgetError> {
        validate_total(total_budget)?;
        Ok(Self {
            total_budget,
            trip_tier,
            duration_days,
            weights: tier_weights(trip_tier),
        })
    }

    /// Parses the tier label leniently: anything but "Low", "Medium" or "High"
    /// is treated as "Medium".
    pub fn from_tier_label(
        total_budget: f64,
        trip_tier: &str,
        duration_days: i64,
    ) -> Result<Self, BudgetError> {
        Self::new(total_budget, TripTier::from_label(trip_tier), duration_days)
    }

    /// Explicit weights replace the tier-derived ones; no tier delta is applied.
    pub fn with_weights(
        total_budget: f64,
        trip_tier: TripTier,
        duration_days: i64,
        weights: CategoryWeights,
    ) -> Result<Self, BudgetError> {
        validate_total(total_budget)?;
        Ok(Self {
            total_budget,
            trip_tier,
            duration_days,
            weights,
        })
    }

    pub fn total_budget(&self) -> f64 {
        self.total_budget
    }

    pub fn trip_tier(&self) -> TripTier {
        self.trip_tier
    }

    pub fn duration_days(&self) -> i64 {
        self.duration_days
    }

    pub fn weights(&self) -> &CategoryWeights {
        &self.weights
    }

    /// Consumes the request. Each category is rounded to cents on its own, so
    /// the total can drift from `total_budget` by a few cents.
    pub fn allocate(self) -> Allocation {
        let amounts = self
            .weights
            .iter()
            .map(|(category, weight)| (category, round_cents(weight * self.total_budget)))
            .collect();
        log::debug!(
            "allocated {} across categories for tier {} ({} days)",
            self.total_budget,
            self.trip_tier,
            self.duration_days
        );
        Allocation { amounts }
    }
}

fn validate_total(total_budget: f64) -> Result<(), BudgetError> {
    if !total_budget.is_finite() || total_budget <= 0.0 {
        return Err(BudgetError::InvalidInput(format!(
            "total budget must be a positive number, got {}",
            total_budget
        )));
    }
    Ok(())
}

/// Shorthand for the callable tool contract:
/// `(total_budget, trip_tier, duration_days) -> {category: amount}`.
pub fn allocate(total_budget: f64, trip_tier: &str, duration_days: i64) -> Result<Allocation, BudgetError> {
    Ok(BudgetAllocation::from_tier_label(total_budget, trip_tier, duration_days)?.allocate())
}

/// Amount per category, rounded to cents.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    amounts: BTreeMap<BudgetCategory, f64>,
}

impl Allocation {
    pub fn get(&self, category: BudgetCategory) -> f64 {
        self.amounts.get(&category).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BudgetCategory, f64)> + '_ {
        self.amounts.iter().map(|(category, amount)| (*category, *amount))
    }

    /// Sum of the rounded amounts.
    pub fn total(&self) -> f64 {
        self.amounts.values().sum()
    }

    /// Daily share of every category. `None` unless `duration_days` is positive.
    pub fn per_day(&self, duration_days: i64) -> Option<Allocation> {
        if duration_days <= 0 {
            return None;
        }
        let days = duration_days as f64;
        let amounts = self
            .amounts
            .iter()
            .map(|(category, amount)| (*category, round_cents(amount / days)))
            .collect();
        Some(Allocation { amounts })
    }

    /// Category name → amount, the shape handed back to tool callers.
    pub fn to_named(&self) -> BTreeMap<&'static str, f64> {
        self.iter()
            .map(|(category, amount)| (category.as_str(), amount))
            .collect()
    }
}

impl Serialize for Allocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.amounts.serialize(serializer)
    }
}
