//! Van Wagner Crown Fire Initiation (1977)
//!
//! Decides whether a surface fire can climb into the canopy and whether the canopy is dense
//! enough to carry an active crown fire.
//!
//! # Scientific References
//! - Van Wagner, C.E. (1977). "Conditions for the start and spread of crown fire"
//!   Canadian Journal of Forest Research, 7(1), 23-34

use serde::{Deserialize, Serialize};

/// Minimum canopy bulk density for sustained active crown fire (kg/m³)
pub const MIN_CBD_FOR_ACTIVE_CROWN: f64 = 0.10;

/// Crown fire status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrownFireStatus {
    /// Surface intensity below the initiation threshold
    SurfaceOnly,
    /// Torching possible, canopy too sparse to carry fire
    Passive,
    /// Continuous crown fire spread
    Active,
}

/// Crown fire assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrownFireAssessment {
    pub status: CrownFireStatus,
    /// Critical surface intensity (kW/m)
    pub critical_intensity: f64,
    /// Surface intensity supplied (kW/m)
    pub surface_intensity: f64,
    pub initiation_possible: bool,
    pub active_spread_possible: bool,
}

/// Critical surface fire intensity for crown initiation (kW/m)
///
/// ```text
/// I₀ = (0.010 × CBH × (460 + 25.9 × FMC))^1.5
/// ```
///
/// # Arguments
/// * `canopy_base_height` - Height to live crown base (m)
/// * `foliar_moisture` - Foliar moisture content (%)
pub fn calculate_critical_intensity(canopy_base_height: f64, foliar_moisture: f64) -> f64 {
    (0.010 * canopy_base_height.max(0.0) * (460.0 + 25.9 * foliar_moisture))
        .max(0.0)
        .powf(1.5)
}

/// Assess crown fire potential for a given surface fire
pub fn assess_crown_fire(
    surface_intensity: f64,
    canopy_base_height: f64,
    foliar_moisture: f64,
    canopy_bulk_density: f64,
) -> CrownFireAssessment {
    let critical_intensity = calculate_critical_intensity(canopy_base_height, foliar_moisture);
    let initiation_possible = surface_intensity >= critical_intensity;
    let active_spread_possible = canopy_bulk_density >= MIN_CBD_FOR_ACTIVE_CROWN;

    let status = match (initiation_possible, active_spread_possible) {
        (false, _) => CrownFireStatus::SurfaceOnly,
        (true, false) => CrownFireStatus::Passive,
        (true, true) => CrownFireStatus::Active,
    };

    CrownFireAssessment {
        status,
        critical_intensity,
        surface_intensity,
        initiation_possible,
        active_spread_possible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_intensity() {
        // CBH 4 m, FMC 100%: (0.04 × 3050)^1.5 = 122^1.5 ≈ 1347.5 kW/m
        let i0 = calculate_critical_intensity(4.0, 100.0);
        assert!((i0 - 1347.5).abs() < 1.0, "I0 was {i0}");

        // Higher crowns need hotter surface fires
        assert!(calculate_critical_intensity(8.0, 100.0) > i0);
        // Wetter foliage needs hotter surface fires
        assert!(calculate_critical_intensity(4.0, 120.0) > i0);
        // No canopy gap: any surface fire reaches the crown
        assert_eq!(calculate_critical_intensity(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_crown_fire_status() {
        let surface = assess_crown_fire(500.0, 4.0, 100.0, 0.15);
        assert_eq!(surface.status, CrownFireStatus::SurfaceOnly);
        assert!(!surface.initiation_possible);

        let passive = assess_crown_fire(5000.0, 4.0, 100.0, 0.05);
        assert_eq!(passive.status, CrownFireStatus::Passive);
        assert!(!passive.active_spread_possible);

        let active = assess_crown_fire(5000.0, 4.0, 100.0, 0.15);
        assert_eq!(active.status, CrownFireStatus::Active);
        assert!(active.initiation_possible && active.active_spread_possible);

        // Threshold CBD counts as active
        let edge = assess_crown_fire(5000.0, 4.0, 100.0, MIN_CBD_FOR_ACTIVE_CROWN);
        assert_eq!(edge.status, CrownFireStatus::Active);
    }
}
