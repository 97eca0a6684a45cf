//! Byram Fireline Intensity (1959)
//!
//! ```text
//! I = H × w × R
//! ```
//!
//! Where:
//! - **I** = Fireline intensity (kW/m)
//! - **H** = Heat content (kJ/kg)
//! - **w** = Fuel consumed (kg/m²)
//! - **R** = Rate of spread (m/s)
//!
//! # References
//! - Byram, G.M. (1959). "Combustion of forest fuels." Forest Fires: Control and Use.

use serde::{Deserialize, Serialize};

/// Calculate Byram fireline intensity (kW/m)
///
/// # Arguments
/// * `heat_content` - Fuel heat content (kJ/kg)
/// * `fuel_consumed` - Fuel consumed in the flaming front (kg/m²)
/// * `rate_of_spread` - Rate of spread (m/s)
pub fn fireline_intensity(heat_content: f64, fuel_consumed: f64, rate_of_spread: f64) -> f64 {
    (heat_content * fuel_consumed * rate_of_spread).max(0.0)
}

/// Fireline intensity from a rate of spread in m/min
pub fn fireline_intensity_from_ros(
    heat_content: f64,
    fuel_consumed: f64,
    ros_m_per_min: f64,
) -> f64 {
    fireline_intensity(heat_content, fuel_consumed, ros_m_per_min / 60.0)
}

/// Flame length (m) from fireline intensity
///
/// ```text
/// L = 0.0775 × I^0.46
/// ```
pub fn flame_length(intensity: f64) -> f64 {
    0.0775 * intensity.max(0.0).powf(0.46)
}

/// Fire behavior class by fireline intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FireBehaviorClass {
    /// < 500 kW/m
    Low,
    /// 500-2000 kW/m
    Moderate,
    /// 2000-4000 kW/m
    High,
    /// 4000-10000 kW/m
    VeryHigh,
    /// 10000-25000 kW/m
    Extreme,
    /// ≥ 25000 kW/m
    Catastrophic,
}

impl FireBehaviorClass {
    /// Class for a fireline intensity (kW/m)
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity < 500.0 {
            FireBehaviorClass::Low
        } else if intensity < 2000.0 {
            FireBehaviorClass::Moderate
        } else if intensity < 4000.0 {
            FireBehaviorClass::High
        } else if intensity < 10000.0 {
            FireBehaviorClass::VeryHigh
        } else if intensity < 25000.0 {
            FireBehaviorClass::Extreme
        } else {
            FireBehaviorClass::Catastrophic
        }
    }
}

/// Intensity, flame length and class together
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FireBehavior {
    pub intensity_kw_m: f64,
    pub flame_length_m: f64,
    pub class: FireBehaviorClass,
}

impl FireBehavior {
    /// Derive flame length and class from intensity (kW/m)
    pub fn from_intensity(intensity: f64) -> Self {
        Self {
            intensity_kw_m: intensity,
            flame_length_m: flame_length(intensity),
            class: FireBehaviorClass::from_intensity(intensity),
        }
    }
}
