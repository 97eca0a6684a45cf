//! Mediterranean fuel types and their coefficient profiles
//!
//! Every fuel type owns one immutable [`FuelProfile`]: the RSI weight table, the logistic
//! calibration coefficients and the linear base rate-of-spread model. Profiles are compile-time
//! constants, so any number of forecasters can share them across threads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core_types::parameters::{ParameterKey, RawParameters};

/// Fuel type keying every fuel-specific table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    /// Aleppo pine forest
    PinusHalepensis,
    /// Holm oak woodland
    QuercusIlex,
    /// Evergreen shrubland (maquis)
    MediterraneanMaquis,
    /// Cured annual grassland
    DryGrassland,
    /// Maritime pine forest
    PinusPinaster,
}

impl FuelType {
    /// All fuel types, in table order
    pub const ALL: [FuelType; 5] = [
        FuelType::PinusHalepensis,
        FuelType::QuercusIlex,
        FuelType::MediterraneanMaquis,
        FuelType::DryGrassland,
        FuelType::PinusPinaster,
    ];

    /// Fuel type used for RSI weights and calibration when an identifier is not recognised
    pub const FALLBACK: FuelType = FuelType::PinusHalepensis;

    /// Snake-case identifier (e.g. `pinus_halepensis`)
    pub fn identifier(&self) -> &'static str {
        match self {
            FuelType::PinusHalepensis => "pinus_halepensis",
            FuelType::QuercusIlex => "quercus_ilex",
            FuelType::MediterraneanMaquis => "mediterranean_maquis",
            FuelType::DryGrassland => "dry_grassland",
            FuelType::PinusPinaster => "pinus_pinaster",
        }
    }

    /// Parse an identifier, substituting [`FuelType::FALLBACK`] when it is not recognised
    pub fn resolve(identifier: &str) -> FuelType {
        identifier.parse().unwrap_or_else(|_| {
            tracing::warn!(
                identifier,
                fallback = FuelType::FALLBACK.identifier(),
                "Unknown fuel type, using fallback profile"
            );
            FuelType::FALLBACK
        })
    }

    /// Coefficient profile for this fuel type
    pub fn profile(&self) -> &'static FuelProfile {
        match self {
            FuelType::PinusHalepensis => &FuelProfile::PINUS_HALEPENSIS,
            FuelType::QuercusIlex => &FuelProfile::QUERCUS_ILEX,
            FuelType::MediterraneanMaquis => &FuelProfile::MEDITERRANEAN_MAQUIS,
            FuelType::DryGrassland => &FuelProfile::DRY_GRASSLAND,
            FuelType::PinusPinaster => &FuelProfile::PINUS_PINASTER,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Returned when a string is not one of the five fuel identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFuelType(pub String);

impl fmt::Display for UnknownFuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown fuel type '{}'", self.0)
    }
}

impl std::error::Error for UnknownFuelType {}

impl FromStr for FuelType {
    type Err = UnknownFuelType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.identifier() == s)
            .ok_or_else(|| UnknownFuelType(s.to_string()))
    }
}

/// RSI weights for the nine normalized parameters
///
/// Weights need not sum to 1: the RSI renormalizes by the total weight of the parameters
/// actually present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiWeights {
    pub lfm: f64,
    pub dfm: f64,
    pub cbd: f64,
    pub sfl: f64,
    pub fbd: f64,
    pub wind: f64,
    pub vpd: f64,
    pub aspect: f64,
    pub dc: f64,
}

impl RsiWeights {
    /// Weight for a parameter
    pub fn weight(&self, key: ParameterKey) -> f64 {
        match key {
            ParameterKey::Lfm => self.lfm,
            ParameterKey::Dfm => self.dfm,
            ParameterKey::Cbd => self.cbd,
            ParameterKey::Sfl => self.sfl,
            ParameterKey::Fbd => self.fbd,
            ParameterKey::WindSpeed => self.wind,
            ParameterKey::Vpd => self.vpd,
            ParameterKey::Aspect => self.aspect,
            ParameterKey::DroughtCode => self.dc,
        }
    }

    /// Sum of all nine weights
    pub fn total(&self) -> f64 {
        ParameterKey::ALL.iter().map(|&key| self.weight(key)).sum()
    }
}

/// Logistic calibration coefficients
///
/// ```text
/// logit = β₀ + β₁·RSI + β₂·RSI² + β₃·C
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationCoefficients {
    /// Intercept
    pub beta_0: f64,
    /// Linear RSI term
    pub beta_1: f64,
    /// Quadratic RSI term
    pub beta_2: f64,
    /// Confidence term
    pub beta_3: f64,
}

/// Linear base rate-of-spread model (m/min)
///
/// ```text
/// ROS_base = intercept + wind_coefficient·U − moisture_coefficient·M
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseRosModel {
    pub intercept: f64,
    pub wind_coefficient: f64,
    pub moisture_coefficient: f64,
}

impl BaseRosModel {
    /// Generic model used when the fuel type is not recognised
    ///
    /// Unlike the RSI and calibration tables this does NOT fall back to Aleppo pine.
    pub const GENERIC: BaseRosModel = BaseRosModel {
        intercept: 5.0,
        wind_coefficient: 2.0,
        moisture_coefficient: 0.1,
    };

    /// Base model for an identifier: the fuel's own table, or [`BaseRosModel::GENERIC`]
    pub fn for_identifier(identifier: &str) -> BaseRosModel {
        match identifier.parse::<FuelType>() {
            Ok(fuel) => fuel.profile().base_ros,
            Err(_) => {
                tracing::warn!(identifier, "Unknown fuel type, using generic spread model");
                BaseRosModel::GENERIC
            }
        }
    }

    /// Unadjusted base rate of spread (m/min), may be negative for very wet fuel
    pub fn base_rate(&self, fuel_moisture: f64, wind_speed: f64) -> f64 {
        self.intercept + self.wind_coefficient * wind_speed
            - self.moisture_coefficient * fuel_moisture
    }
}

/// Typical fuel structure for a fuel type, used when a site has no survey data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelStructureDefaults {
    /// Canopy bulk density (kg/m³)
    pub cbd: f64,
    /// Canopy base height (m)
    pub cbh: f64,
    /// Surface fuel load (t/ha)
    pub sfl: f64,
    /// Fuel bed depth (m)
    pub fbd: f64,
}

impl FuelStructureDefaults {
    /// Fill `cbd`, `sfl` and `fbd` where the caller supplied nothing
    ///
    /// Measured values are never overwritten. Note that adding `cbd` also adds it to the
    /// completeness requirement of the confidence estimate.
    pub fn fill_missing(&self, raw: &mut RawParameters) {
        raw.insert_default(ParameterKey::Cbd, self.cbd);
        raw.insert_default(ParameterKey::Sfl, self.sfl);
        raw.insert_default(ParameterKey::Fbd, self.fbd);
    }
}

/// Immutable per-fuel coefficient set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelProfile {
    pub fuel_type: FuelType,
    pub rsi_weights: RsiWeights,
    pub calibration: CalibrationCoefficients,
    pub base_ros: BaseRosModel,
    /// Survey-free structure defaults
    pub structure: FuelStructureDefaults,
    /// Live fuel moisture (%) below which the fuel is considered critically dry
    pub critical_lfm: f64,
}

impl FuelProfile {
    /// Aleppo pine (Mati 2018 calibration reference)
    pub const PINUS_HALEPENSIS: FuelProfile = FuelProfile {
        fuel_type: FuelType::PinusHalepensis,
        rsi_weights: RsiWeights {
            lfm: 0.20,
            dfm: 0.15,
            cbd: 0.12,
            sfl: 0.10,
            fbd: 0.08,
            wind: 0.15,
            vpd: 0.08,
            aspect: 0.06,
            dc: 0.06,
        },
        calibration: CalibrationCoefficients {
            beta_0: -4.8,
            beta_1: 9.2,
            beta_2: -4.1,
            beta_3: 1.4,
        },
        base_ros: BaseRosModel {
            intercept: 5.0,
            wind_coefficient: 2.2,
            moisture_coefficient: 0.15,
        },
        structure: FuelStructureDefaults {
            cbd: 0.15,
            cbh: 4.0,
            sfl: 25.0,
            fbd: 0.6,
        },
        critical_lfm: 85.0,
    };

    /// Holm oak
    pub const QUERCUS_ILEX: FuelProfile = FuelProfile {
        fuel_type: FuelType::QuercusIlex,
        rsi_weights: RsiWeights {
            lfm: 0.18,
            dfm: 0.14,
            cbd: 0.14,
            sfl: 0.12,
            fbd: 0.10,
            wind: 0.14,
            vpd: 0.07,
            aspect: 0.05,
            dc: 0.06,
        },
        calibration: CalibrationCoefficients {
            beta_0: -4.5,
            beta_1: 8.7,
            beta_2: -3.8,
            beta_3: 1.3,
        },
        base_ros: BaseRosModel {
            intercept: 4.0,
            wind_coefficient: 1.8,
            moisture_coefficient: 0.12,
        },
        structure: FuelStructureDefaults {
            cbd: 0.18,
            cbh: 3.0,
            sfl: 35.0,
            fbd: 0.7,
        },
        critical_lfm: 75.0,
    };

    /// Maquis shrubland
    pub const MEDITERRANEAN_MAQUIS: FuelProfile = FuelProfile {
        fuel_type: FuelType::MediterraneanMaquis,
        rsi_weights: RsiWeights {
            lfm: 0.22,
            dfm: 0.16,
            cbd: 0.10,
            sfl: 0.08,
            fbd: 0.06,
            wind: 0.16,
            vpd: 0.09,
            aspect: 0.07,
            dc: 0.06,
        },
        calibration: CalibrationCoefficients {
            beta_0: -4.3,
            beta_1: 8.5,
            beta_2: -3.6,
            beta_3: 1.2,
        },
        base_ros: BaseRosModel {
            intercept: 6.0,
            wind_coefficient: 2.5,
            moisture_coefficient: 0.18,
        },
        structure: FuelStructureDefaults {
            cbd: 0.30,
            cbh: 1.2,
            sfl: 45.0,
            fbd: 2.5,
        },
        critical_lfm: 80.0,
    };

    /// Dry grassland, fastest base spread of the five
    pub const DRY_GRASSLAND: FuelProfile = FuelProfile {
        fuel_type: FuelType::DryGrassland,
        rsi_weights: RsiWeights {
            lfm: 0.15,
            dfm: 0.18,
            cbd: 0.08,
            sfl: 0.12,
            fbd: 0.10,
            wind: 0.18,
            vpd: 0.10,
            aspect: 0.04,
            dc: 0.05,
        },
        calibration: CalibrationCoefficients {
            beta_0: -3.9,
            beta_1: 7.8,
            beta_2: -3.2,
            beta_3: 1.1,
        },
        base_ros: BaseRosModel {
            intercept: 8.0,
            wind_coefficient: 3.0,
            moisture_coefficient: 0.20,
        },
        structure: FuelStructureDefaults {
            cbd: 0.0,
            cbh: 0.0,
            sfl: 4.0,
            fbd: 0.5,
        },
        critical_lfm: 70.0,
    };

    /// Maritime pine (Pedrógão Grande 2017 reference)
    pub const PINUS_PINASTER: FuelProfile = FuelProfile {
        fuel_type: FuelType::PinusPinaster,
        rsi_weights: RsiWeights {
            lfm: 0.19,
            dfm: 0.16,
            cbd: 0.13,
            sfl: 0.11,
            fbd: 0.09,
            wind: 0.16,
            vpd: 0.08,
            aspect: 0.05,
            dc: 0.06,
        },
        calibration: CalibrationCoefficients {
            beta_0: -4.6,
            beta_1: 8.9,
            beta_2: -3.9,
            beta_3: 1.35,
        },
        base_ros: BaseRosModel {
            intercept: 5.5,
            wind_coefficient: 2.4,
            moisture_coefficient: 0.16,
        },
        // Canopy as Aleppo pine; deeper, heavier needle litter
        structure: FuelStructureDefaults {
            cbd: 0.15,
            cbh: 4.0,
            sfl: 30.0,
            fbd: 0.7,
        },
        critical_lfm: 85.0,
    };
}
