//! Per-parameter hazard classes
//!
//! Operational bands for the individual inputs, reported alongside a forecast so a duty
//! officer can see which measurement is driving it. Each band is half-open `[lower, upper)`.
//!
//! A NaN value carries no hazard signal and falls in the lowest band.

use serde::{Deserialize, Serialize};

use crate::core_types::fuel::FuelType;
use crate::core_types::parameters::{ParameterKey, RawParameters};

/// Vapor pressure deficit bands (hPa)
pub mod vpd_ranges {
    use std::ops::{Range, RangeFrom};

    /// "Very Low" below 5.0
    pub const VERY_LOW: Range<f64> = f64::NEG_INFINITY..5.0;
    /// "Low" `[5.0, 10.0)`
    pub const LOW: Range<f64> = 5.0..10.0;
    /// "Moderate" `[10.0, 15.0)`
    pub const MODERATE: Range<f64> = 10.0..15.0;
    /// "High" `[15.0, 25.0)`
    pub const HIGH: Range<f64> = 15.0..25.0;
    /// "Very High" `[25.0, 35.0)`
    pub const VERY_HIGH: Range<f64> = 25.0..35.0;
    /// "Extreme" `[35.0, ∞)`
    pub const EXTREME: RangeFrom<f64> = 35.0..;
}

/// Drought Code bands
pub mod dc_ranges {
    use std::ops::{Range, RangeFrom};

    /// "Very Low" below 100.0
    pub const VERY_LOW: Range<f64> = f64::NEG_INFINITY..100.0;
    /// "Low" `[100.0, 200.0)`
    pub const LOW: Range<f64> = 100.0..200.0;
    /// "Moderate" `[200.0, 300.0)`
    pub const MODERATE: Range<f64> = 200.0..300.0;
    /// "High" `[300.0, 400.0)`
    pub const HIGH: Range<f64> = 300.0..400.0;
    /// "Very High" `[400.0, 500.0)`
    pub const VERY_HIGH: Range<f64> = 400.0..500.0;
    /// "Extreme" `[500.0, ∞)`
    pub const EXTREME: RangeFrom<f64> = 500.0..;
}

/// Canopy bulk density bands (kg/m³); there is no "very high" band
pub mod cbd_ranges {
    use std::ops::{Range, RangeFrom};

    /// "Very Low" below 0.05
    pub const VERY_LOW: Range<f64> = f64::NEG_INFINITY..0.05;
    /// "Low" `[0.05, 0.10)`
    pub const LOW: Range<f64> = 0.05..0.10;
    /// "Moderate" `[0.10, 0.15)`
    pub const MODERATE: Range<f64> = 0.10..0.15;
    /// "High" `[0.15, 0.25)`
    pub const HIGH: Range<f64> = 0.15..0.25;
    /// "Extreme" `[0.25, ∞)`
    pub const EXTREME: RangeFrom<f64> = 0.25..;
}

/// Live fuel moisture bands (%), wettest first
///
/// Hazard rises as moisture falls: above 120 % is very low hazard, below 60 % very high.
pub mod lfm_ranges {
    use std::ops::{Range, RangeFrom};

    /// "Very High" below 60.0
    pub const VERY_HIGH: Range<f64> = f64::NEG_INFINITY..60.0;
    /// "High" `[60.0, 80.0)`
    pub const HIGH: Range<f64> = 60.0..80.0;
    /// "Moderate" `[80.0, 100.0)`
    pub const MODERATE: Range<f64> = 80.0..100.0;
    /// "Low" `[100.0, 120.0)`
    pub const LOW: Range<f64> = 100.0..120.0;
    /// "Very Low" `[120.0, ∞)`
    pub const VERY_LOW: RangeFrom<f64> = 120.0..;
}

/// Hazard class of a single input parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterHazardClass {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl ParameterHazardClass {
    /// Human-readable class name
    pub fn label(&self) -> &'static str {
        match self {
            ParameterHazardClass::VeryLow => "Very Low",
            ParameterHazardClass::Low => "Low",
            ParameterHazardClass::Moderate => "Moderate",
            ParameterHazardClass::High => "High",
            ParameterHazardClass::VeryHigh => "Very High",
            ParameterHazardClass::Extreme => "Extreme",
        }
    }
}

/// Classify vapor pressure deficit (hPa)
pub fn classify_vpd(vpd: f64) -> ParameterHazardClass {
    match vpd {
        _ if vpd_ranges::EXTREME.contains(&vpd) => ParameterHazardClass::Extreme,
        _ if vpd_ranges::VERY_HIGH.contains(&vpd) => ParameterHazardClass::VeryHigh,
        _ if vpd_ranges::HIGH.contains(&vpd) => ParameterHazardClass::High,
        _ if vpd_ranges::MODERATE.contains(&vpd) => ParameterHazardClass::Moderate,
        _ if vpd_ranges::LOW.contains(&vpd) => ParameterHazardClass::Low,
        _ => ParameterHazardClass::VeryLow,
    }
}

/// Classify the Canadian Drought Code
pub fn classify_drought_code(dc: f64) -> ParameterHazardClass {
    match dc {
        _ if dc_ranges::EXTREME.contains(&dc) => ParameterHazardClass::Extreme,
        _ if dc_ranges::VERY_HIGH.contains(&dc) => ParameterHazardClass::VeryHigh,
        _ if dc_ranges::HIGH.contains(&dc) => ParameterHazardClass::High,
        _ if dc_ranges::MODERATE.contains(&dc) => ParameterHazardClass::Moderate,
        _ if dc_ranges::LOW.contains(&dc) => ParameterHazardClass::Low,
        _ => ParameterHazardClass::VeryLow,
    }
}

/// Classify canopy bulk density (kg/m³)
pub fn classify_cbd(cbd: f64) -> ParameterHazardClass {
    match cbd {
        _ if cbd_ranges::EXTREME.contains(&cbd) => ParameterHazardClass::Extreme,
        _ if cbd_ranges::HIGH.contains(&cbd) => ParameterHazardClass::High,
        _ if cbd_ranges::MODERATE.contains(&cbd) => ParameterHazardClass::Moderate,
        _ if cbd_ranges::LOW.contains(&cbd) => ParameterHazardClass::Low,
        _ => ParameterHazardClass::VeryLow,
    }
}

/// Classify live fuel moisture (%)
pub fn classify_lfm(lfm: f64) -> ParameterHazardClass {
    match lfm {
        _ if lfm_ranges::VERY_HIGH.contains(&lfm) => ParameterHazardClass::VeryHigh,
        _ if lfm_ranges::HIGH.contains(&lfm) => ParameterHazardClass::High,
        _ if lfm_ranges::MODERATE.contains(&lfm) => ParameterHazardClass::Moderate,
        _ if lfm_ranges::LOW.contains(&lfm) => ParameterHazardClass::Low,
        _ => ParameterHazardClass::VeryLow,
    }
}

/// Live fuel moisture judged against a fuel type's critical threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LfmAssessment {
    pub lfm: f64,
    pub hazard: ParameterHazardClass,
    /// The fuel's critical LFM (%)
    pub critical_lfm: f64,
    /// `lfm` is strictly below the critical threshold
    pub below_critical: bool,
}

/// Classify live fuel moisture and compare it with the fuel's critical threshold
pub fn assess_lfm(lfm: f64, fuel_type: FuelType) -> LfmAssessment {
    let critical_lfm = fuel_type.profile().critical_lfm;
    LfmAssessment {
        lfm,
        hazard: classify_lfm(lfm),
        critical_lfm,
        below_critical: lfm < critical_lfm,
    }
}

/// Hazard class of every classifiable parameter present, in [`ParameterKey::ALL`] order
///
/// Only `lfm`, `cbd`, `vpd` and `drought_code` have operational bands.
pub fn classify_parameters(raw: &RawParameters) -> Vec<(ParameterKey, ParameterHazardClass)> {
    raw.iter()
        .filter_map(|(key, value)| {
            let class = match key {
                ParameterKey::Lfm => classify_lfm(value),
                ParameterKey::Cbd => classify_cbd(value),
                ParameterKey::Vpd => classify_vpd(value),
                ParameterKey::DroughtCode => classify_drought_code(value),
                _ => return None,
            };
            Some((key, class))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ParameterHazardClass::{Extreme, High, Low, Moderate, VeryHigh, VeryLow};

    #[test]
    fn test_vpd_band_edges() {
        assert_eq!(classify_vpd(0.0), VeryLow);
        assert_eq!(classify_vpd(4.99), VeryLow);
        assert_eq!(classify_vpd(5.0), Low);
        assert_eq!(classify_vpd(10.0), Moderate);
        assert_eq!(classify_vpd(15.0), High);
        assert_eq!(classify_vpd(24.99), High);
        assert_eq!(classify_vpd(25.0), VeryHigh);
        assert_eq!(classify_vpd(35.0), Extreme);
        assert_eq!(classify_vpd(46.7), Extreme);
    }

    #[test]
    fn test_drought_code_band_edges() {
        assert_eq!(classify_drought_code(15.0), VeryLow);
        assert_eq!(classify_drought_code(100.0), Low);
        assert_eq!(classify_drought_code(199.9), Low);
        assert_eq!(classify_drought_code(200.0), Moderate);
        assert_eq!(classify_drought_code(300.0), High);
        assert_eq!(classify_drought_code(400.0), VeryHigh);
        assert_eq!(classify_drought_code(499.9), VeryHigh);
        assert_eq!(classify_drought_code(500.0), Extreme);
    }

    #[test]
    fn test_cbd_band_edges() {
        assert_eq!(classify_cbd(0.0), VeryLow);
        assert_eq!(classify_cbd(0.05), Low);
        assert_eq!(classify_cbd(0.10), Moderate);
        assert_eq!(classify_cbd(0.14), Moderate);
        assert_eq!(classify_cbd(0.15), High);
        assert_eq!(classify_cbd(0.25), Extreme);
        // No very-high band for canopy density
        assert_eq!(classify_cbd(0.249), High);
    }

    #[test]
    fn test_lfm_hazard_rises_as_fuel_dries() {
        assert_eq!(classify_lfm(150.0), VeryLow);
        assert_eq!(classify_lfm(120.0), VeryLow);
        assert_eq!(classify_lfm(119.9), Low);
        assert_eq!(classify_lfm(100.0), Low);
        assert_eq!(classify_lfm(80.0), Moderate);
        assert_eq!(classify_lfm(60.0), High);
        assert_eq!(classify_lfm(59.9), VeryHigh);
        assert_eq!(classify_lfm(30.0), VeryHigh);
    }

    #[test]
    fn test_nan_falls_in_lowest_band() {
        assert_eq!(classify_vpd(f64::NAN), VeryLow);
        assert_eq!(classify_drought_code(f64::NAN), VeryLow);
        assert_eq!(classify_cbd(f64::NAN), VeryLow);
        assert_eq!(classify_lfm(f64::NAN), VeryLow);
    }

    #[test]
    fn test_critical_lfm_per_fuel() {
        let aleppo = assess_lfm(80.0, FuelType::PinusHalepensis);
        assert!(aleppo.below_critical);
        assert_eq!(aleppo.critical_lfm, 85.0);
        assert_eq!(aleppo.hazard, Moderate);

        // Holm oak tolerates drier foliage before becoming critical
        assert!(!assess_lfm(80.0, FuelType::QuercusIlex).below_critical);
        assert!(!assess_lfm(70.0, FuelType::DryGrassland).below_critical);
        assert!(assess_lfm(69.9, FuelType::DryGrassland).below_critical);
        assert_eq!(assess_lfm(75.0, FuelType::MediterraneanMaquis).critical_lfm, 80.0);
        assert_eq!(assess_lfm(75.0, FuelType::PinusPinaster).critical_lfm, 85.0);
    }

    #[test]
    fn test_classify_parameters_skips_unbanded() {
        let raw = RawParameters::try_from_pairs([
            ("lfm", 68.0),
            ("wind_speed", 10.4),
            ("vpd", 46.7),
            ("dc", 487.0),
        ])
        .unwrap();
        assert_eq!(
            classify_parameters(&raw),
            vec![
                (ParameterKey::Lfm, High),
                (ParameterKey::Vpd, Extreme),
                (ParameterKey::DroughtCode, VeryHigh),
            ]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(VeryHigh.label(), "Very High");
        assert_eq!(Extreme.label(), "Extreme");
        assert!(VeryLow < Extreme);
    }
}
