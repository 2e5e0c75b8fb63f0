//! Core types for travel budget allocation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance used when checking that weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Spend category a share of the budget is assigned to.
///
/// Variants are declared in allocation order, which is also the order used
/// when the allocation is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    Accommodation,
    Transportation,
    Food,
    Activities,
    Miscellaneous,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 5] = [
        BudgetCategory::Accommodation,
        BudgetCategory::Transportation,
        BudgetCategory::Food,
        BudgetCategory::Activities,
        BudgetCategory::Miscellaneous,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BudgetCategory::Accommodation => "accommodation",
            BudgetCategory::Transportation => "transportation",
            BudgetCategory::Food => "food",
            BudgetCategory::Activities => "activities",
            BudgetCategory::Miscellaneous => "miscellaneous",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while building or running an allocation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BudgetError {
    /// Input rejected before any weighting took place
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Category name outside the five known categories
    #[error("Unknown budget category: {0}")]
    UnknownCategory(String),
}

/// The five category weights, always renormalized to sum to one.
///
/// Only the renormalizing constructors can build a value, so holding a
/// `CategoryWeights` means the sum invariant already holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryWeights {
    weights: [f64; 5],
}

impl CategoryWeights {
    /// Renormalize raw weights given in `BudgetCategory::ALL` order.
    pub fn normalized(raw: [f64; 5]) -> Result<Self, BudgetError> {
        for (category, weight) in BudgetCategory::ALL.iter().zip(raw) {
            if !weight.is_finite() || weight < 0.0 {
                return Err(BudgetError::InvalidInput(format!(
                    "weight for {} must be a finite non-negative number, got {}",
                    category, weight
                )));
            }
        }

        if raw.iter().all(|weight| *weight == 0.0) {
            return Err(BudgetError::InvalidInput(
                "category weights must have a positive sum".to_string(),
            ));
        }

        Ok(Self::renormalized(raw))
    }

    /// Caller guarantees finite, non-negative weights, at least one positive.
    /// Weights whose sum overflows are scaled down by the largest one first.
    pub(crate) fn renormalized(raw: [f64; 5]) -> Self {
        let total: f64 = raw.iter().sum();
        if total.is_finite() {
            return Self {
                weights: raw.map(|weight| weight / total),
            };
        }

        let largest = raw.iter().copied().fold(0.0, f64::max);
        let scaled = raw.map(|weight| weight / largest);
        let total: f64 = scaled.iter().sum();
        Self {
            weights: scaled.map(|weight| weight / total),
        }
    }

    /// Build weights from a name → fraction map. Missing categories count as zero.
    pub fn from_named(named: &BTreeMap<String, f64>) -> Result<Self, BudgetError> {
        let mut raw = [0.0; 5];
        for (name, weight) in named {
            let category = BudgetCategory::from_name(name)
                .ok_or_else(|| BudgetError::UnknownCategory(name.clone()))?;
            raw[category.index()] = *weight;
        }
        Self::normalized(raw)
    }

    pub fn get(&self, category: BudgetCategory) -> f64 {
        self.weights[category.index()]
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BudgetCategory, f64)> + '_ {
        BudgetCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

/// From here on `amount * 100.0` is already a whole number.
const CENTS_PRECISION_LIMIT: f64 = 4_503_599_627_370_496.0 / 100.0;

/// Round a monetary amount to two decimal places.
pub fn round_cents(amount: f64) -> f64 {
    if !amount.is_finite() || amount.abs() >= CENTS_PRECISION_LIMIT {
        return amount;
    }
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip() {
        for category in BudgetCategory::ALL {
            assert_eq!(BudgetCategory::from_name(category.as_str()), Some(category));
        }
        assert_eq!(BudgetCategory::from_name("Accommodation"), None);
        assert_eq!(BudgetCategory::from_name("flights"), None);
    }

    #[test]
    fn normalized_weights_sum_to_one() {
        let weights = CategoryWeights::normalized([0.45, 0.25, 0.20, 0.15, 0.05]).unwrap();
        assert!((weights.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
        assert!(weights.get(BudgetCategory::Accommodation) > weights.get(BudgetCategory::Food));
    }

    #[test]
    fn normalized_rejects_negative_weight() {
        let err = CategoryWeights::normalized([0.5, -0.1, 0.2, 0.2, 0.2]).unwrap_err();
        assert!(matches!(err, BudgetError::InvalidInput(msg) if msg.contains("transportation")));
    }

    #[test]
    fn normalized_rejects_zero_sum() {
        assert!(CategoryWeights::normalized([0.0; 5]).is_err());
    }

    #[test]
    fn normalized_rejects_nan() {
        assert!(CategoryWeights::normalized([f64::NAN, 0.2, 0.2, 0.2, 0.2]).is_err());
    }

    #[test]
    fn from_named_fills_missing_with_zero() {
        let mut named = BTreeMap::new();
        named.insert("accommodation".to_string(), 3.0);
        named.insert("food".to_string(), 1.0);

        let weights = CategoryWeights::from_named(&named).unwrap();

        assert_eq!(weights.get(BudgetCategory::Accommodation), 0.75);
        assert_eq!(weights.get(BudgetCategory::Food), 0.25);
        assert_eq!(weights.get(BudgetCategory::Transportation), 0.0);
    }

    #[test]
    fn from_named_handles_weights_whose_sum_overflows() {
        let mut named = BTreeMap::new();
        named.insert("accommodation".to_string(), 1e308);
        named.insert("food".to_string(), 1e308);

        let weights = CategoryWeights::from_named(&named).unwrap();

        assert_eq!(weights.get(BudgetCategory::Accommodation), 0.5);
        assert_eq!(weights.get(BudgetCategory::Food), 0.5);
        assert_eq!(weights.get(BudgetCategory::Activities), 0.0);
        assert!((weights.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn round_cents_leaves_huge_amounts_untouched() {
        assert_eq!(round_cents(12.345_6), 12.35);
        assert_eq!(round_cents(1e307), 1e307);
        assert_eq!(round_cents(-1e307), -1e307);
        assert_eq!(round_cents(1e15 + 0.5), 1e15 + 0.5);
    }

    #[test]
    fn from_named_rejects_unknown_category() {
        let mut named = BTreeMap::new();
        named.insert("flights".to_string(), 1.0);

        assert_eq!(
            CategoryWeights::from_named(&named),
            Err(BudgetError::UnknownCategory("flights".to_string()))
        );
    }

    #[test]
    fn round_cents_rounds_half_away_from_zero() {
        assert_eq!(round_cents(818.181818), 818.18);
        assert_eq!(round_cents(454.545454), 454.55);
        assert_eq!(round_cents(0.0), 0.0);
    }
}
