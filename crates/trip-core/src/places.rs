//! Nearby-place candidates and the per-session record of places already
//! suggested.

use std::sync::Arc;

use dashmap::DashSet;
use serde::{Deserialize, Serialize};

use crate::levels::{RatingLevel, TripTier};

/// A place returned by a nearby search, reduced to the fields used for ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    #[serde(default)]
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub price_level: i64,
}

impl PlaceCandidate {
    pub fn tier(&self) -> TripTier {
        TripTier::from_price_level(self.price_level)
    }

    pub fn rating_level(&self) -> RatingLevel {
        RatingLevel::from_numerical_rating(self.rating)
    }
}

/// Place ids already suggested during one planning session.
///
/// Scope one instance per conversation and share it with `Arc` between the
/// tools that search for places.
#[derive(Debug, Default)]
pub struct VisitedPlaces {
    ids: DashSet<String>,
}

pub type SharedVisitedPlaces = Arc<VisitedPlaces>;

impl VisitedPlaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedVisitedPlaces {
        Arc::new(Self::new())
    }

    /// Returns true when the id was not seen before.
    pub fn mark(&self, place_id: &str) -> bool {
        self.ids.insert(place_id.to_string())
    }

    pub fn contains(&self, place_id: &str) -> bool {
        self.ids.contains(place_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&self) {
        self.ids.clear();
    }

    /// Keeps the candidates not suggested before, marks them as visited and
    /// ranks them by rating (high first), then price level (cheap first).
    ///
    /// Candidates without a place id are dropped; duplicates inside the batch
    /// are kept once.
    pub fn take_unvisited(&self, candidates: Vec<PlaceCandidate>) -> Vec<PlaceCandidate> {
        let offered = candidates.len();
        let mut fresh: Vec<PlaceCandidate> = candidates
            .into_iter()
            .filter(|candidate| !candidate.place_id.trim().is_empty())
            .filter(|candidate| self.mark(&candidate.place_id))
            .collect();

        fresh.sort_by(|left, right| {
            right
                .rating
                .total_cmp(&left.rating)
                .then_with(|| left.price_level.cmp(&right.price_level))
        });

        log::debug!(
            "kept {} of {} place candidates ({} visited in session)",
            fresh.len(),
            offered,
            self.len()
        );
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(place_id: &str, rating: f64, price_level: i64) -> PlaceCandidate {
        PlaceCandidate {
            place_id: place_id.to_string(),
            name: format!("Place {}", place_id),
            latitude: 40.7128,
            longitude: -74.0060,
            rating,
            price_level,
        }
    }

    #[test]
    fn mark_reports_first_visit_only() {
        let visited = VisitedPlaces::new();
        assert!(visited.mark("a"));
        assert!(!visited.mark("a"));
        assert!(visited.contains("a"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn take_unvisited_ranks_by_rating_then_price() {
        let visited = VisitedPlaces::new();
        let ranked = visited.take_unvisited(vec![
            candidate("1", 4.0, 3),
            candidate("2", 4.8, 2),
            candidate("3", 4.0, 1),
            candidate("4", 3.1, 0),
        ]);

        let ids: Vec<&str> = ranked.iter().map(|place| place.place_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1", "4"]);
    }

    #[test]
    fn take_unvisited_skips_places_seen_in_earlier_calls() {
        let visited = VisitedPlaces::new();
        let first = visited.take_unvisited(vec![candidate("1", 4.0, 1), candidate("2", 3.0, 1)]);
        assert_eq!(first.len(), 2);

        let second = visited.take_unvisited(vec![candidate("2", 3.0, 1), candidate("3", 5.0, 4)]);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].place_id, "3");
        assert_eq!(visited.len(), 3);
    }

    #[test]
    fn take_unvisited_dedups_within_batch_and_drops_missing_ids() {
        let visited = VisitedPlaces::new();
        let ranked = visited.take_unvisited(vec![
            candidate("1", 4.0, 1),
            candidate("1", 4.0, 1),
            candidate("", 5.0, 0),
        ]);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].place_id, "1");
    }

    #[test]
    fn sessions_are_independent() {
        let first = VisitedPlaces::new();
        let second = VisitedPlaces::new();

        first.take_unvisited(vec![candidate("1", 4.0, 1)]);
        let ranked = second.take_unvisited(vec![candidate("1", 4.0, 1)]);

        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn clear_forgets_visits() {
        let visited = VisitedPlaces::new();
        visited.mark("1");
        visited.clear();
        assert!(visited.is_empty());
        assert!(visited.mark("1"));
    }

    #[test]
    fn candidate_defaults_and_levels() {
        let place: PlaceCandidate =
            serde_json::from_value(serde_json::json!({"place_id": "x", "name": "Cafe"})).unwrap();
        assert_eq!(place.rating, 0.0);
        assert_eq!(place.price_level, 0);
        assert_eq!(place.tier(), TripTier::Low);
        assert_eq!(place.rating_level(), RatingLevel::Low);
    }
}
