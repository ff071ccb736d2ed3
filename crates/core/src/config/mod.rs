use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Result, SourceCatalog, SummaryError};

/// Everything a summary build reads besides the dataset itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub sources: SourceCatalog,
    pub layout: LayoutConfig,
}

impl SummaryConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "loading summary configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks the invariants the build relies on: at most one base source,
    /// no fuel listed twice, and finite non-negative layout constants.
    pub fn validate(&self) -> Result<()> {
        let bases = self
            .sources
            .entries()
            .iter()
            .filter(|entry| entry.base_contribution)
            .count();
        if bases > 1 {
            return Err(SummaryError::invalid_config(format!(
                "source catalog flags {bases} base sources, expected at most one"
            )));
        }

        let mut seen = HashSet::new();
        for entry in self.sources.entries() {
            if !seen.insert(entry.fuel) {
                return Err(SummaryError::invalid_config(format!(
                    "fuel `{}` is listed more than once",
                    entry.fuel
                )));
            }
        }

        self.layout.validate()
    }
}

/// Fixed constants converting magnitudes into diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixels per unit of flow magnitude.
    pub scale: f64,
    /// Gap between stacked source boxes on the left side.
    pub left_gap: f64,
    /// Gap between stacked destination boxes on the right side.
    pub right_gap: f64,
    /// Lower edge of the primary destination's box.
    pub primary_bottom: f64,
    /// Distance from the primary box's lower edge to the first stacked box.
    pub residential_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: 0.02,
            left_gap: 20.0,
            right_gap: 40.0,
            primary_bottom: 150.0,
            residential_offset: 30.0,
        }
    }
}

impl LayoutConfig {
    fn validate(&self) -> Result<()> {
        let constants = [
            ("scale", self.scale),
            ("left_gap", self.left_gap),
            ("right_gap", self.right_gap),
            ("primary_bottom", self.primary_bottom),
            ("residential_offset", self.residential_offset),
        ];

        for (name, value) in constants {
            if !value.is_finite() || value < 0.0 {
                return Err(SummaryError::invalid_config(format!(
                    "layout constant `{name}` must be finite and non-negative, got {value}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Fuel, SourceEntry};

    #[test]
    fn default_config_is_valid() {
        let config = SummaryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layout.residential_offset, 30.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = SummaryConfig::from_json_str(r#"{"layout": {"scale": 1.0}}"#).unwrap();

        assert_eq!(config.layout.scale, 1.0);
        assert_eq!(config.layout.right_gap, LayoutConfig::default().right_gap);
        assert_eq!(config.sources, SourceCatalog::default());
    }

    #[test]
    fn rejects_multiple_base_sources() {
        let config = SummaryConfig {
            sources: SourceCatalog::new(vec![
                SourceEntry::base(Fuel::Elec),
                SourceEntry::base(Fuel::Solar),
            ]),
            layout: LayoutConfig::default(),
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, SummaryError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_duplicate_fuels() {
        let config = SummaryConfig {
            sources: SourceCatalog::new(vec![
                SourceEntry::new(Fuel::Coal),
                SourceEntry::new(Fuel::Coal),
            ]),
            layout: LayoutConfig::default(),
        };

        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("coal"));
    }

    #[test]
    fn rejects_negative_layout_constants() {
        let err = SummaryConfig::from_json_str(r#"{"layout": {"right_gap": -1.0}}"#).unwrap_err();
        assert!(format!("{err}").contains("right_gap"));
    }
}
