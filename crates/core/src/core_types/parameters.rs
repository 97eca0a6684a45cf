//! Forecast parameter keys and the raw/normalized parameter maps

use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ForecastError;

/// The nine parameters combined into the Rapid Spread Index
///
/// Serialized with the raw key names (`wind_speed`, `drought_code`, ...). Normalized maps use
/// [`ParameterKey::short_name`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKey {
    /// Live fuel moisture (%)
    Lfm,
    /// Dead fuel moisture (%)
    Dfm,
    /// Canopy bulk density (kg/m³)
    Cbd,
    /// Surface fuel load (t/ha)
    Sfl,
    /// Fuel bed depth (m)
    Fbd,
    /// Wind speed (m/s)
    WindSpeed,
    /// Vapor pressure deficit (hPa)
    Vpd,
    /// Terrain aspect (degrees clockwise from north)
    Aspect,
    /// Canadian Drought Code
    DroughtCode,
}

impl ParameterKey {
    /// All nine parameters, in table order
    pub const ALL: [ParameterKey; 9] = [
        ParameterKey::Lfm,
        ParameterKey::Dfm,
        ParameterKey::Cbd,
        ParameterKey::Sfl,
        ParameterKey::Fbd,
        ParameterKey::WindSpeed,
        ParameterKey::Vpd,
        ParameterKey::Aspect,
        ParameterKey::DroughtCode,
    ];

    /// Raw input key
    pub fn name(&self) -> &'static str {
        match self {
            ParameterKey::Lfm => "lfm",
            ParameterKey::Dfm => "dfm",
            ParameterKey::Cbd => "cbd",
            ParameterKey::Sfl => "sfl",
            ParameterKey::Fbd => "fbd",
            ParameterKey::WindSpeed => "wind_speed",
            ParameterKey::Vpd => "vpd",
            ParameterKey::Aspect => "aspect",
            ParameterKey::DroughtCode => "drought_code",
        }
    }

    /// Key used in normalized maps and contribution breakdowns
    pub fn short_name(&self) -> &'static str {
        match self {
            ParameterKey::WindSpeed => "wind",
            ParameterKey::DroughtCode => "dc",
            other => other.name(),
        }
    }

    /// Look up a key by raw name (`wind_speed`) or short name (`wind`)
    pub fn from_name(name: &str) -> Option<ParameterKey> {
        ParameterKey::ALL
            .into_iter()
            .find(|key| key.name() == name || key.short_name() == name)
    }
}

/// Raw physical parameter values, as measured
///
/// Only finite values can be stored; out-of-range but finite values are kept as-is and left
/// to normalization and confidence scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawParameters {
    values: FxHashMap<ParameterKey, f64>,
}

impl RawParameters {
    /// Empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs using raw or short parameter names
    ///
    /// # Errors
    /// Returns [`ForecastError::UnknownParameter`] for an unrecognised name and
    /// [`ForecastError::NonFiniteParameter`] for NaN or infinite values.
    pub fn try_from_pairs<'a, I>(pairs: I) -> Result<Self, ForecastError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut params = Self::new();
        for (name, value) in pairs {
            let key = ParameterKey::from_name(name)
                .ok_or_else(|| ForecastError::UnknownParameter(name.to_string()))?;
            params.set(key, value)?;
        }
        Ok(params)
    }

    /// Set a parameter value, replacing any previous value
    ///
    /// # Errors
    /// Returns [`ForecastError::NonFiniteParameter`] for NaN or infinite values.
    pub fn set(&mut self, key: ParameterKey, value: f64) -> Result<(), ForecastError> {
        if !value.is_finite() {
            return Err(ForecastError::NonFiniteParameter {
                name: key.name(),
                value,
            });
        }
        self.values.insert(key, value);
        Ok(())
    }

    /// Builder form of [`RawParameters::set`]
    ///
    /// # Errors
    /// Returns [`ForecastError::NonFiniteParameter`] for NaN or infinite values.
    pub fn with(mut self, key: ParameterKey, value: f64) -> Result<Self, ForecastError> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Insert a table constant unless a value is already present
    pub(crate) fn insert_default(&mut self, key: ParameterKey, value: f64) {
        debug_assert!(value.is_finite());
        self.values.entry(key).or_insert(value);
    }

    /// Raw value of a parameter, if supplied
    pub fn get(&self, key: ParameterKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    /// Whether a parameter was supplied
    pub fn contains(&self, key: ParameterKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Number of supplied parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Present parameters in [`ParameterKey::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, f64)> + '_ {
        ParameterKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
    }
}

/// Hazard-aligned parameter values in [0, 1]
///
/// Absent raw parameters are absent here too, never defaulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedParameters {
    values: FxHashMap<ParameterKey, f64>,
}

impl NormalizedParameters {
    /// Empty normalized set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a normalized value, clipping it to [0, 1]
    pub fn insert(&mut self, key: ParameterKey, value: f64) {
        self.values.insert(key, value.clamp(0.0, 1.0));
    }

    /// Normalized value of a parameter, if present
    pub fn get(&self, key: ParameterKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    /// Number of normalized parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Present parameters in [`ParameterKey::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, f64)> + '_ {
        ParameterKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
    }
}

impl Serialize for NormalizedParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_short_names(self.iter(), self.len(), serializer)
    }
}

/// Each parameter's share of the RSI, `weight·value / RSI`
///
/// Used for ranking drivers; the shares are not a strict partition and need not sum to 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterContributions {
    values: FxHashMap<ParameterKey, f64>,
}

impl ParameterContributions {
    pub(crate) fn insert(&mut self, key: ParameterKey, share: f64) {
        self.values.insert(key, share);
    }

    /// Contribution of a parameter, if present
    pub fn get(&self, key: ParameterKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    /// Number of contributing parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Contributions in [`ParameterKey::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, f64)> + '_ {
        ParameterKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
    }

    /// Parameters sorted by descending contribution
    pub fn ranked(&self) -> Vec<(ParameterKey, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

impl Serialize for ParameterContributions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_short_names(self.iter(), self.len(), serializer)
    }
}

fn serialize_short_names<S, I>(entries: I, len: usize, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    I: Iterator<Item = (ParameterKey, f64)>,
{
    let mut map = serializer.serialize_map(Some(len))?;
    for (key, value) in entries {
        map.serialize_entry(key.short_name(), &value)?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(ParameterKey::WindSpeed.name(), "wind_speed");
        assert_eq!(ParameterKey::WindSpeed.short_name(), "wind");
        assert_eq!(ParameterKey::DroughtCode.short_name(), "dc");
        assert_eq!(ParameterKey::Lfm.short_name(), "lfm");

        assert_eq!(ParameterKey::from_name("wind"), Some(ParameterKey::WindSpeed));
        assert_eq!(
            ParameterKey::from_name("drought_code"),
            Some(ParameterKey::DroughtCode)
        );
        assert_eq!(ParameterKey::from_name("slope"), None);
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let mut params = RawParameters::new();
        assert!(params.set(ParameterKey::Lfm, 90.0).is_ok());

        let err = params.set(ParameterKey::Dfm, f64::NAN).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::NonFiniteParameter { name: "dfm", .. }
        ));
        assert!(params.set(ParameterKey::Vpd, f64::INFINITY).is_err());
        assert!(params.set(ParameterKey::Vpd, f64::NEG_INFINITY).is_err());

        // Rejected values leave the map untouched
        assert_eq!(params.len(), 1);
        assert!(!params.contains(ParameterKey::Dfm));
    }

    #[test]
    fn test_out_of_range_values_are_kept() {
        let params = RawParameters::new()
            .with(ParameterKey::WindSpeed, -3.0)
            .and_then(|p| p.with(ParameterKey::Aspect, 540.0))
            .unwrap();
        assert_eq!(params.get(ParameterKey::WindSpeed), Some(-3.0));
        assert_eq!(params.get(ParameterKey::Aspect), Some(540.0));
    }

    #[test]
    fn test_try_from_pairs() {
        let params =
            RawParameters::try_from_pairs([("lfm", 80.0), ("wind", 6.0), ("dc", 300.0)]).unwrap();
        assert_eq!(params.get(ParameterKey::WindSpeed), Some(6.0));
        assert_eq!(params.get(ParameterKey::DroughtCode), Some(300.0));

        let err = RawParameters::try_from_pairs([("humidity", 20.0)]).unwrap_err();
        assert_eq!(err, ForecastError::UnknownParameter("humidity".to_string()));
    }

    #[test]
    fn test_iter_follows_key_order() {
        let params = RawParameters::try_from_pairs([
            ("drought_code", 300.0),
            ("lfm", 80.0),
            ("wind_speed", 6.0),
        ])
        .unwrap();
        let keys: Vec<_> = params.iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![
                ParameterKey::Lfm,
                ParameterKey::WindSpeed,
                ParameterKey::DroughtCode
            ]
        );
    }

    #[test]
    fn test_normalized_insert_clips() {
        let mut normalized = NormalizedParameters::new();
        normalized.insert(ParameterKey::Lfm, 1.4);
        normalized.insert(ParameterKey::Dfm, -0.2);
        assert_eq!(normalized.get(ParameterKey::Lfm), Some(1.0));
        assert_eq!(normalized.get(ParameterKey::Dfm), Some(0.0));
    }

    #[test]
    fn test_contributions_ranked() {
        let mut contributions = ParameterContributions::default();
        contributions.insert(ParameterKey::Vpd, 0.1);
        contributions.insert(ParameterKey::WindSpeed, 0.4);
        contributions.insert(ParameterKey::Lfm, 0.25);

        let ranked = contributions.ranked();
        assert_eq!(ranked[0].0, ParameterKey::WindSpeed);
        assert_eq!(ranked[1].0, ParameterKey::Lfm);
        assert_eq!(ranked[2].0, ParameterKey::Vpd);
    }
}
