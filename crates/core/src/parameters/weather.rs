//! Forecast inputs derived from routine observations
//!
//! - Vapor pressure deficit from air temperature and relative humidity (Magnus form)
//! - Daily Drought Code update from maximum temperature and rainfall
//! - Live fuel moisture from NDWI when no field sample exists
//! - Canopy wind reduction from canopy cover
//!
//! # References
//! - Alduchov, O.A. & Eskridge, R.E. (1996). "Improved Magnus form approximation of
//!   saturation vapor pressure." Journal of Applied Meteorology, 35(4), 601-609.
//! - Van Wagner, C.E. (1987). "Development and structure of the Canadian Forest Fire Weather
//!   Index System." Forestry Technical Report 35.

/// Rain (mm) absorbed by the canopy before reaching deep organic layers
pub const DC_RAIN_THRESHOLD: f64 = 2.8;

/// Fraction of rain above the threshold that recharges the Drought Code layer
pub const DC_RAIN_EFFECTIVENESS: f64 = 0.83;

/// Drought Code floor (fully recharged soil)
pub const DC_MIN: f64 = 15.0;

/// Saturation vapor pressure (hPa) at `temperature` (°C)
pub fn saturation_vapor_pressure(temperature: f64) -> f64 {
    6.1078 * ((17.27 * temperature) / (temperature + 237.3)).exp()
}

/// Vapor pressure deficit (hPa)
///
/// # Arguments
/// * `temperature` - Air temperature (°C)
/// * `humidity` - Relative humidity (%), clipped to [0, 100]
pub fn calculate_vpd(temperature: f64, humidity: f64) -> f64 {
    let e_sat = saturation_vapor_pressure(temperature);
    let e_act = e_sat * humidity.clamp(0.0, 100.0) / 100.0;
    (e_sat - e_act).max(0.0)
}

/// Rain that actually reaches the Drought Code layer (mm)
pub fn effective_precipitation(precipitation: f64) -> f64 {
    let rain = precipitation.max(0.0);
    if rain <= DC_RAIN_THRESHOLD {
        rain
    } else {
        DC_RAIN_THRESHOLD + DC_RAIN_EFFECTIVENESS * (rain - DC_RAIN_THRESHOLD)
    }
}

/// Advance the Drought Code by one day
///
/// ```text
/// DC = DC_prev + 0.5·(T_max + 4) − P_eff,   floored at 15
/// ```
///
/// # Arguments
/// * `previous` - Yesterday's Drought Code
/// * `max_temperature` - Daily maximum temperature (°C)
/// * `precipitation` - 24-hour rainfall (mm)
pub fn update_drought_code(previous: f64, max_temperature: f64, precipitation: f64) -> f64 {
    let dc = previous + 0.5 * (max_temperature + 4.0) - effective_precipitation(precipitation);
    dc.max(DC_MIN)
}

/// Live fuel moisture (%) estimated from the Normalized Difference Water Index
///
/// Linear fit clipped to the 30-200 % range observed in Mediterranean shrubs and pines.
pub fn estimate_lfm_from_ndwi(ndwi: f64) -> f64 {
    (50.0 + ndwi * 100.0).clamp(30.0, 200.0)
}

/// Ratio of mid-flame to open wind speed under a canopy of the given cover fraction
pub fn wind_adjustment_factor(canopy_cover: f64) -> f64 {
    if canopy_cover < 0.2 {
        0.6
    } else if canopy_cover < 0.5 {
        0.4
    } else if canopy_cover < 0.8 {
        0.25
    } else {
        0.15
    }
}
