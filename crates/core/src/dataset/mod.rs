use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Destination, DestinationValues, Fuel, FuelValues, Result};

/// Flow magnitudes for a single time unit, usually one year.
///
/// Serialized as `{"year": 1950, "elec": {"res": 1.2, ...}, "solar": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    #[serde(alias = "year", deserialize_with = "deserialize_label")]
    pub label: String,
    /// Magnitude flowing from each fuel into each destination.
    #[serde(flatten)]
    pub magnitudes: FuelValues<DestinationValues<f64>>,
}

impl PeriodRecord {
    pub fn new(label: impl Into<String>, magnitudes: FuelValues<DestinationValues<f64>>) -> Self {
        Self {
            label: label.into(),
            magnitudes,
        }
    }

    /// A period in which every flow is zero.
    pub fn zeroed(label: impl Into<String>) -> Self {
        Self::new(label, FuelValues::default())
    }

    pub fn with_flow(mut self, fuel: Fuel, dest: Destination, magnitude: f64) -> Self {
        self.magnitudes[fuel][dest] = magnitude;
        self
    }

    pub fn magnitude(&self, fuel: Fuel, dest: Destination) -> f64 {
        self.magnitudes[fuel][dest]
    }
}

/// Ordered sequence of periods consumed by a summary build.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub periods: Vec<PeriodRecord>,
}

impl Dataset {
    pub fn new(periods: Vec<PeriodRecord>) -> Self {
        Self { periods }
    }

    /// Parses either a bare array of periods or `{"periods": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let periods = match raw {
            RawDataset::Bare(periods) => periods,
            RawDataset::Wrapped { periods } => periods,
        };
        Ok(Self { periods })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "loading dataset");
        let contents = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&contents)?;
        tracing::debug!(periods = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDataset {
    Bare(Vec<PeriodRecord>),
    Wrapped { periods: Vec<PeriodRecord> },
}

fn deserialize_label<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(label) => Ok(label),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "period label must be a string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period_json(label: &str) -> String {
        let fuels: Vec<String> = Fuel::ALL
            .iter()
            .map(|fuel| format!(r#""{fuel}": {{"res": 1.0}}"#))
            .collect();
        format!("{{{label}, {}}}", fuels.join(", "))
    }

    #[test]
    fn parses_numeric_year_labels() {
        let json = format!("[{}]", period_json(r#""year": 1950"#));
        let dataset = Dataset::from_json_str(&json).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.periods[0].label, "1950");
        assert_eq!(dataset.periods[0].magnitude(Fuel::Coal, Destination::Res), 1.0);
        assert_eq!(dataset.periods[0].magnitude(Fuel::Coal, Destination::Ag), 0.0);
    }

    #[test]
    fn parses_wrapped_periods_with_string_labels() {
        let json = format!(r#"{{"periods": [{}]}}"#, period_json(r#""label": "FY21""#));
        let dataset = Dataset::from_json_str(&json).unwrap();

        assert_eq!(dataset.periods[0].label, "FY21");
    }

    #[test]
    fn missing_fuel_surfaces_as_error() {
        let json = r#"[{"year": 2000, "elec": {"res": 1.0}}]"#;
        assert!(Dataset::from_json_str(json).is_err());
    }

    #[test]
    fn builder_sets_individual_flows() {
        let period = PeriodRecord::zeroed("2001").with_flow(Fuel::Wind, Destination::Indus, 3.5);

        assert_eq!(period.magnitude(Fuel::Wind, Destination::Indus), 3.5);
        assert_eq!(period.magnitude(Fuel::Wind, Destination::Res), 0.0);
    }
}
