//! Travel budget allocation.
//!
//! A total budget is split across five spend categories. The split starts
//! from fixed base weights, applies a per-tier adjustment and renormalizes
//! so the weights sum to one before any money is assigned.
//!
//! # Key Components
//!
//! - [`types`]: `BudgetCategory`, `CategoryWeights`, `BudgetError`
//! - [`allocator`]: `BudgetAllocation` request and the resulting `Allocation`

pub mod allocator;
pub mod types;

pub use allocator::{allocate, tier_weights, Allocation, BudgetAllocation, BASE_WEIGHTS};
pub use types::{round_cents, BudgetCategory, BudgetError, CategoryWeights};
