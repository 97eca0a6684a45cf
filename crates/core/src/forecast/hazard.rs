//! Hazard bands, warning lead time and decision support
//!
//! | Probability | Level    | Lead time |
//! |-------------|----------|-----------|
//! | [0.0, 0.2)  | Normal   | 180 min   |
//! | [0.2, 0.4)  | Elevated | 180 min   |
//! | [0.4, 0.6)  | Watch    | 120 min   |
//! | [0.6, 0.8)  | Warning  | 90 min    |
//! | [0.8, 1.0]  | Imminent | 60 min    |
//!
//! Lead time shrinks as hazard rises: the most imminent threats leave the least warning.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hazard level, ordered by ascending probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardLevel {
    Normal,
    Elevated,
    Watch,
    Warning,
    Imminent,
}

impl HazardLevel {
    /// All levels, least to most severe
    pub const ALL: [HazardLevel; 5] = [
        HazardLevel::Normal,
        HazardLevel::Elevated,
        HazardLevel::Watch,
        HazardLevel::Warning,
        HazardLevel::Imminent,
    ];

    /// Band for a probability
    ///
    /// Bands are half-open except the top one, which includes 1.0. Values below 0 fall in
    /// `Normal`, above 1 in `Imminent`; NaN maps to `Normal`.
    pub fn from_probability(probability: f64) -> Self {
        if probability.is_nan() || probability < 0.2 {
            HazardLevel::Normal
        } else if probability < 0.4 {
            HazardLevel::Elevated
        } else if probability < 0.6 {
            HazardLevel::Watch
        } else if probability < 0.8 {
            HazardLevel::Warning
        } else {
            HazardLevel::Imminent
        }
    }

    /// Probability interval `[low, high)` of the band
    pub fn probability_range(&self) -> (f64, f64) {
        match self {
            HazardLevel::Normal => (0.0, 0.2),
            HazardLevel::Elevated => (0.2, 0.4),
            HazardLevel::Watch => (0.4, 0.6),
            HazardLevel::Warning => (0.6, 0.8),
            HazardLevel::Imminent => (0.8, 1.0),
        }
    }

    /// Lowercase level name (`normal` ... `imminent`)
    pub fn name(&self) -> &'static str {
        match self {
            HazardLevel::Normal => "normal",
            HazardLevel::Elevated => "elevated",
            HazardLevel::Watch => "watch",
            HazardLevel::Warning => "warning",
            HazardLevel::Imminent => "imminent",
        }
    }

    /// Recommended operational action and public message
    pub fn decision_support(&self) -> DecisionSupport {
        match self {
            HazardLevel::Normal => DecisionSupport {
                action: "Routine monitoring",
                public_message: "Normal fire danger conditions",
            },
            HazardLevel::Elevated => DecisionSupport {
                action: "Enhanced situational awareness",
                public_message: "Conditions favor fire growth",
            },
            HazardLevel::Watch => DecisionSupport {
                action: "Pre-positioning, public information",
                public_message: "Very dry fuels and increasing winds",
            },
            HazardLevel::Warning => DecisionSupport {
                action: "Resource mobilization, evacuation preparation",
                public_message: "Conditions favorable for rapid fire spread",
            },
            HazardLevel::Imminent => DecisionSupport {
                action: "Evacuation execution, full response activation",
                public_message: "Rapid fire spread expected - evacuate now",
            },
        }
    }
}

impl fmt::Display for HazardLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Estimated warning lead time before rapid-spread onset (minutes)
pub fn lead_time_minutes(probability: f64) -> u32 {
    if probability >= 0.8 {
        60
    } else if probability >= 0.6 {
        90
    } else if probability >= 0.4 {
        120
    } else {
        180
    }
}

/// Operational recommendation for a hazard level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecisionSupport {
    pub action: &'static str,
    pub public_message: &'static str,
}

/// Decision support for a probability (NaN gets the `Normal` entry)
pub fn decision_support(probability: f64) -> DecisionSupport {
    HazardLevel::from_probability(probability).decision_support()
}
