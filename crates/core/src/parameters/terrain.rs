//! Terrain aspect classes
//!
//! South- and west-facing slopes receive the afternoon sun and dry out first; the quadrant
//! carries a rate-of-spread adjustment used when screening sites.

use serde::{Deserialize, Serialize};

use crate::integration::normalizer::normalize_aspect;

/// Cardinal quadrant of a slope's aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectClass {
    /// [315°, 45°)
    #[serde(rename = "N")]
    North,
    /// [45°, 135°)
    #[serde(rename = "E")]
    East,
    /// [135°, 225°)
    #[serde(rename = "S")]
    South,
    /// [225°, 315°)
    #[serde(rename = "W")]
    West,
}

impl AspectClass {
    /// Quadrant of a bearing (degrees clockwise from north, any winding)
    ///
    /// A NaN bearing carries no exposure signal and is treated as north-facing.
    pub fn from_bearing(bearing_deg: f64) -> Self {
        let bearing = bearing_deg.rem_euclid(360.0);
        if bearing.is_nan() || !(45.0..315.0).contains(&bearing) {
            AspectClass::North
        } else if bearing < 135.0 {
            AspectClass::East
        } else if bearing < 225.0 {
            AspectClass::South
        } else {
            AspectClass::West
        }
    }

    /// Rate-of-spread multiplier for the quadrant
    pub fn ros_adjustment(&self) -> f64 {
        match self {
            AspectClass::North => 0.8,
            AspectClass::East => 0.9,
            AspectClass::South => 1.2,
            AspectClass::West => 1.35,
        }
    }

    /// Single-letter code
    pub fn code(&self) -> &'static str {
        match self {
            AspectClass::North => "N",
            AspectClass::East => "E",
            AspectClass::South => "S",
            AspectClass::West => "W",
        }
    }
}

/// Aspect class, spread adjustment and normalized exposure for one bearing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectAssessment {
    pub aspect_deg: f64,
    pub class: AspectClass,
    pub ros_adjustment: f64,
    /// Same value the RSI uses for `aspect`
    pub normalized: f64,
}

/// Classify a bearing and compute its exposure score
pub fn assess_aspect(aspect_deg: f64) -> AspectAssessment {
    let class = AspectClass::from_bearing(aspect_deg);
    AspectAssessment {
        aspect_deg,
        class,
        ros_adjustment: class.ros_adjustment(),
        normalized: normalize_aspect(aspect_deg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quadrant_edges() {
        assert_eq!(AspectClass::from_bearing(0.0), AspectClass::North);
        assert_eq!(AspectClass::from_bearing(44.9), AspectClass::North);
        assert_eq!(AspectClass::from_bearing(45.0), AspectClass::East);
        assert_eq!(AspectClass::from_bearing(135.0), AspectClass::South);
        assert_eq!(AspectClass::from_bearing(224.9), AspectClass::South);
        assert_eq!(AspectClass::from_bearing(225.0), AspectClass::West);
        assert_eq!(AspectClass::from_bearing(314.9), AspectClass::West);
        assert_eq!(AspectClass::from_bearing(315.0), AspectClass::North);
    }

    #[test]
    fn test_bearings_wrap() {
        assert_eq!(AspectClass::from_bearing(-90.0), AspectClass::West);
        assert_eq!(AspectClass::from_bearing(360.0 + 180.0), AspectClass::South);
        assert_eq!(AspectClass::from_bearing(f64::NAN), AspectClass::North);
    }

    #[test]
    fn test_west_facing_spreads_fastest() {
        let mati = assess_aspect(225.0);
        assert_eq!(mati.class, AspectClass::West);
        assert_eq!(mati.ros_adjustment, 1.35);
        assert_relative_eq!(mati.normalized, 1.0);

        let sheltered = assess_aspect(45.0);
        assert_eq!(sheltered.class.code(), "E");
        assert_eq!(sheltered.ros_adjustment, 0.9);
        assert_relative_eq!(sheltered.normalized, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&AspectClass::South).unwrap(), r#""S""#);
    }
}
