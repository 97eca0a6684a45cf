//! Parameter normalization onto a hazard-aligned [0, 1] scale
//!
//! Every output is oriented so that 1.0 means maximum fire-spread hazard, whatever the native
//! correlation of the parameter:
//!
//! ```text
//! negative (lfm, dfm):          N = (p100 − x) / (p100 − p10)
//! positive (cbd, sfl, ...):     N = (x − p0) / (p90 − p0)
//! circular (aspect):            N = (1 + cos(θ − 225°)) / 2
//! ```
//!
//! All results are clipped to [0, 1]. A degenerate anchor range yields 0.0 ("no signal").
//! Anchors are the same for every fuel type; only the RSI weights are fuel-specific.

use crate::core_types::parameters::{NormalizedParameters, ParameterKey, RawParameters};

/// Aspect of maximum hazard: south-west slopes get the most afternoon solar heating and
/// face the prevailing summer wind in the Mediterranean basin.
pub const HAZARD_ASPECT_DEG: f64 = 225.0;

/// How a raw parameter maps onto the hazard scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizationRule {
    /// Lower values are more hazardous; `p100` is the wet/safe end
    Negative { p10: f64, p100: f64 },
    /// Higher values are more hazardous; saturates at `p90`
    Positive { p0: f64, p90: f64 },
    /// Raised cosine around a target bearing (degrees)
    Circular { target_deg: f64 },
}

impl NormalizationRule {
    /// Fixed reference anchors for each parameter
    pub fn for_parameter(key: ParameterKey) -> NormalizationRule {
        match key {
            ParameterKey::Lfm => NormalizationRule::Negative {
                p10: 70.0,
                p100: 200.0,
            },
            ParameterKey::Dfm => NormalizationRule::Negative {
                p10: 6.0,
                p100: 30.0,
            },
            ParameterKey::Cbd => NormalizationRule::Positive { p0: 0.0, p90: 0.20 },
            ParameterKey::Sfl => NormalizationRule::Positive { p0: 0.0, p90: 40.0 },
            ParameterKey::Fbd => NormalizationRule::Positive { p0: 0.0, p90: 0.6 },
            ParameterKey::WindSpeed => NormalizationRule::Positive { p0: 0.0, p90: 10.0 },
            ParameterKey::Vpd => NormalizationRule::Positive { p0: 0.0, p90: 30.0 },
            ParameterKey::Aspect => NormalizationRule::Circular {
                target_deg: HAZARD_ASPECT_DEG,
            },
            ParameterKey::DroughtCode => NormalizationRule::Positive {
                p0: 0.0,
                p90: 400.0,
            },
        }
    }

    /// Normalize a raw value with this rule
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            NormalizationRule::Negative { p10, p100 } => normalize_negative(value, p10, p100),
            NormalizationRule::Positive { p0, p90 } => normalize_positive(value, p90, p0),
            NormalizationRule::Circular { target_deg } => {
                normalize_circular(value, target_deg)
            }
        }
    }
}

/// Normalize a parameter with negative hazard correlation (moisture)
///
/// # Arguments
/// * `value` - Raw value
/// * `p10` - Dry anchor, maps to 1.0
/// * `p100` - Wet anchor, maps to 0.0
pub fn normalize_negative(value: f64, p10: f64, p100: f64) -> f64 {
    if p100 <= p10 {
        return 0.0;
    }
    clip_unit((p100 - value) / (p100 - p10))
}

/// Normalize a parameter with positive hazard correlation
///
/// # Arguments
/// * `value` - Raw value
/// * `p90` - Saturation anchor, maps to 1.0
/// * `p0` - Baseline, maps to 0.0
pub fn normalize_positive(value: f64, p90: f64, p0: f64) -> f64 {
    if p90 <= p0 {
        return 0.0;
    }
    clip_unit((value - p0) / (p90 - p0))
}

/// Clip to [0, 1]; an undefined ratio (∞/∞ from overflowing anchors) counts as no hazard
fn clip_unit(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Raised-cosine normalization around an arbitrary target bearing
pub fn normalize_circular(bearing_deg: f64, target_deg: f64) -> f64 {
    let delta = bearing_deg.to_radians() - target_deg.to_radians();
    ((1.0 + delta.cos()) / 2.0).clamp(0.0, 1.0)
}

/// Normalize terrain aspect: 1.0 facing south-west (225°), 0.0 facing north-east (45°)
pub fn normalize_aspect(aspect_deg: f64) -> f64 {
    normalize_circular(aspect_deg, HAZARD_ASPECT_DEG)
}

/// Normalize every present parameter; absent parameters stay absent
pub fn normalize_parameters(raw: &RawParameters) -> NormalizedParameters {
    let mut normalized = NormalizedParameters::new();
    for (key, value) in raw.iter() {
        let norm = NormalizationRule::for_parameter(key).apply(value);
        tracing::trace!(parameter = key.name(), raw = value, normalized = norm);
        normalized.insert(key, norm);
    }
    normalized
}
