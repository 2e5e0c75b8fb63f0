//! Qualitative levels and place classifications.
//!
//! Each tag maps to a row in a static lookup table holding its label and the
//! numeric threshold it starts at. Thresholds follow the Places API scales:
//! price levels 0..=4 and ratings 1.0..=5.0.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Row of a level lookup table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelInfo<T> {
    pub label: &'static str,
    pub threshold: T,
}

/// Qualitative spend bracket of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TripTier {
    Low,
    #[default]
    Medium,
    High,
}

const TRIP_TIERS: [(TripTier, LevelInfo<i64>); 3] = [
    (TripTier::Low, LevelInfo { label: "Low", threshold: 0 }),
    (TripTier::Medium, LevelInfo { label: "Medium", threshold: 2 }),
    (TripTier::High, LevelInfo { label: "High", threshold: 4 }),
];

impl TripTier {
    pub fn info(self) -> LevelInfo<i64> {
        TRIP_TIERS
            .iter()
            .find(|(tier, _)| *tier == self)
            .map(|(_, info)| *info)
            .unwrap_or(TRIP_TIERS[1].1)
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Lowest Places API price level belonging to this tier.
    pub fn min_price_level(self) -> i64 {
        self.info().threshold
    }

    /// Case-sensitive match against "Low", "Medium" or "High".
    pub fn parse_strict(label: &str) -> Option<Self> {
        TRIP_TIERS
            .iter()
            .find(|(_, info)| info.label == label)
            .map(|(tier, _)| *tier)
    }

    /// Like [`TripTier::parse_strict`], but unknown labels fall back to `Medium`.
    pub fn from_label(label: &str) -> Self {
        Self::parse_strict(label).unwrap_or_else(|| {
            log::debug!("unrecognized trip tier {:?}, using Medium", label);
            TripTier::Medium
        })
    }

    /// 0 = free .. 4 = very expensive. Values below zero count as `Low`.
    pub fn from_price_level(price_level: i64) -> Self {
        if price_level >= TripTier::High.min_price_level() {
            TripTier::High
        } else if price_level >= TripTier::Medium.min_price_level() {
            TripTier::Medium
        } else {
            TripTier::Low
        }
    }
}

impl fmt::Display for TripTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative bracket of a numerical review rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingLevel {
    Low,
    Medium,
    High,
}

const RATING_LEVELS: [(RatingLevel, LevelInfo<f64>); 3] = [
    (RatingLevel::Low, LevelInfo { label: "Low", threshold: 1.0 }),
    (RatingLevel::Medium, LevelInfo { label: "Medium", threshold: 3.0 }),
    (RatingLevel::High, LevelInfo { label: "High", threshold: 4.0 }),
];

impl RatingLevel {
    pub fn info(self) -> LevelInfo<f64> {
        RATING_LEVELS
            .iter()
            .find(|(level, _)| *level == self)
            .map(|(_, info)| *info)
            .unwrap_or(RATING_LEVELS[0].1)
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn min_rating(self) -> f64 {
        self.info().threshold
    }

    /// Ratings below 3.0, including NaN and non-positive values, are `Low`.
    pub fn from_numerical_rating(rating: f64) -> Self {
        if rating >= RatingLevel::High.min_rating() {
            RatingLevel::High
        } else if rating >= RatingLevel::Medium.min_rating() {
            RatingLevel::Medium
        } else {
            RatingLevel::Low
        }
    }
}

impl fmt::Display for RatingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccommodationType {
    Hotel,
    Airbnb,
}

impl AccommodationType {
    pub fn label(self) -> &'static str {
        match self {
            AccommodationType::Hotel => "Hotel",
            AccommodationType::Airbnb => "Airbnb / Vacation Rental",
        }
    }
}

impl fmt::Display for AccommodationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Broad kind of a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceType {
    Attraction,
    Activity,
    Essential,
}

impl PlaceType {
    pub fn label(self) -> &'static str {
        match self {
            PlaceType::Attraction => "Attraction",
            PlaceType::Activity => "Activity",
            PlaceType::Essential => "Essential Service",
        }
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Places API search type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Cafe,
    Restaurant,
    Museum,
    Supermarket,
    Park,
    Aquarium,
    Bakery,
    TouristAttraction,
    Zoo,
    ArtGallery,
    Other,
}

const PLACE_CATEGORIES: [(PlaceCategory, &str, PlaceType); 11] = [
    (PlaceCategory::Cafe, "cafe", PlaceType::Activity),
    (PlaceCategory::Restaurant, "restaurant", PlaceType::Activity),
    (PlaceCategory::Museum, "museum", PlaceType::Attraction),
    (PlaceCategory::Supermarket, "supermarket", PlaceType::Essential),
    (PlaceCategory::Park, "park", PlaceType::Attraction),
    (PlaceCategory::Aquarium, "aquarium", PlaceType::Activity),
    (PlaceCategory::Bakery, "bakery", PlaceType::Activity),
    (PlaceCategory::TouristAttraction, "tourist_attraction", PlaceType::Attraction),
    (PlaceCategory::Zoo, "zoo", PlaceType::Activity),
    (PlaceCategory::ArtGallery, "art_gallery", PlaceType::Attraction),
    (PlaceCategory::Other, "other", PlaceType::Activity),
];

impl PlaceCategory {
    fn row(self) -> (PlaceCategory, &'static str, PlaceType) {
        PLACE_CATEGORIES
            .iter()
            .copied()
            .find(|(category, _, _)| *category == self)
            .unwrap_or(PLACE_CATEGORIES[PLACE_CATEGORIES.len() - 1])
    }

    /// The Places API type string, e.g. `tourist_attraction`.
    pub fn type_str(self) -> &'static str {
        self.row().1
    }

    pub fn place_type(self) -> PlaceType {
        self.row().2
    }

    /// Unknown type strings map to `Other`.
    pub fn from_type_str(value: &str) -> Self {
        PLACE_CATEGORIES
            .iter()
            .find(|(_, type_str, _)| *type_str == value)
            .map(|(category, _, _)| *category)
            .unwrap_or(PlaceCategory::Other)
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_str())
    }
}
