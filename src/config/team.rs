//! Team analysis configuration
//!
//! Defaults for new sessions and the dashboard: profile mode, coverage
//! policy and weights, and an optional phase table file.

use serde::Deserialize;
use std::path::PathBuf;

use super::error::{ConfigError, ValidationError};
use crate::domain::analysis::{CoveragePolicy, CoverageWeights, PhaseTable};
use crate::domain::team::ProfileMode;

/// Team analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TeamConfig {
    /// Mode for sessions created without an explicit mode
    #[serde(default)]
    pub profile_mode: ProfileMode,

    /// Coverage policy when the dashboard request names none
    #[serde(default)]
    pub coverage_policy: CoveragePolicy,

    /// Weight of a genius match under the weighted policy
    #[serde(default = "default_genius_weight")]
    pub genius_weight: f64,

    /// Weight of a competency match under the weighted policy
    #[serde(default = "default_competency_weight")]
    pub competency_weight: f64,

    /// YAML phase table; the standard table is used when unset
    pub phase_table_path: Option<PathBuf>,
}

impl TeamConfig {
    /// Coverage weights built from the configured values.
    pub fn weights(&self) -> Result<CoverageWeights, ValidationError> {
        CoverageWeights::new(self.genius_weight, self.competency_weight).map_err(|_| {
            if self.genius_weight.is_finite() && self.genius_weight >= 0.0 {
                ValidationError::InvalidWeight("competency_weight")
            } else {
                ValidationError::InvalidWeight("genius_weight")
            }
        })
    }

    /// Validate team configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.weights().map(|_| ())
    }

    /// Reads the phase table file, or returns the standard table.
    pub fn load_phase_table(&self) -> Result<PhaseTable, ConfigError> {
        let Some(path) = &self.phase_table_path else {
            return Ok(PhaseTable::standard());
        };

        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::PhaseTableIo {
            path: path.display().to_string(),
            source,
        })?;

        PhaseTable::from_yaml_str(&yaml).map_err(|err| ConfigError::InvalidPhaseTable {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
    }
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            profile_mode: ProfileMode::default(),
            coverage_policy: CoveragePolicy::default(),
            genius_weight: default_genius_weight(),
            competency_weight: default_competency_weight(),
            phase_table_path: None,
        }
    }
}

fn default_genius_weight() -> f64 {
    1.0
}

fn default_competency_weight() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_team_config_defaults() {
        let config = TeamConfig::default();
        assert_eq!(config.profile_mode, ProfileMode::Full);
        assert_eq!(config.coverage_policy, CoveragePolicy::WeightedMembers);
        assert_eq!(config.weights().unwrap(), CoverageWeights::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let config = TeamConfig {
            competency_weight: -0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidWeight("competency_weight"))
        ));

        let config = TeamConfig {
            genius_weight: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidWeight("genius_weight"))
        ));
    }

    #[test]
    fn test_load_phase_table_defaults_to_standard() {
        let table = TeamConfig::default().load_phase_table().unwrap();
        assert_eq!(table, PhaseTable::standard());
    }

    #[test]
    fn test_load_phase_table_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "- name: Discovery\n  tags: [W, I]\n- name: Delivery\n  tags: [G, T]").unwrap();

        let config = TeamConfig {
            phase_table_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let table = config.load_phase_table().unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.get("discovery").is_some());
    }

    #[test]
    fn test_load_phase_table_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = TeamConfig {
            phase_table_path: Some(dir.path().join("phases.yaml")),
            ..Default::default()
        };
        assert!(matches!(
            config.load_phase_table(),
            Err(ConfigError::PhaseTableIo { .. })
        ));
    }

    #[test]
    fn test_load_phase_table_invalid_tag() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "- name: Discovery\n  tags: [X]").unwrap();

        let config = TeamConfig {
            phase_table_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            config.load_phase_table(),
            Err(ConfigError::InvalidPhaseTable { .. })
        ));
    }
}
