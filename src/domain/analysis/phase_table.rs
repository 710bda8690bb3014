//! Phase Table - project phases and the tags each one needs.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{Tag, ValidationError};

/// A named project phase and the tags it needs, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRequirement {
    name: String,
    tags: Vec<Tag>,
}

impl PhaseRequirement {
    /// Creates a validated requirement: non-blank name, at least one tag,
    /// no tag listed twice.
    pub fn new(name: impl Into<String>, tags: Vec<Tag>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::invalid_phase_table("phase name cannot be empty"));
        }
        if tags.is_empty() {
            return Err(ValidationError::invalid_phase_table(format!(
                "phase '{}' requires no tags",
                name
            )));
        }
        let mut seen = HashSet::new();
        for tag in &tags {
            if !seen.insert(*tag) {
                return Err(ValidationError::invalid_phase_table(format!(
                    "phase '{}' lists {} more than once",
                    name, tag
                )));
            }
        }
        Ok(Self { name, tags })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// Raw phase entry as written in a config file.
#[derive(Debug, Clone, Deserialize)]
struct RawPhase {
    name: String,
    tags: Vec<String>,
}

/// Ordered list of phase requirements. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhaseTable {
    phases: Vec<PhaseRequirement>,
}

static STANDARD_TABLE: Lazy<PhaseTable> = Lazy::new(|| {
    use Tag::*;

    let phases = [
        ("Ideation", vec![Wonder, Invention]),
        ("Vetting", vec![Discernment]),
        ("Launch Planning", vec![Galvanizing]),
        ("Execution", vec![Galvanizing, Tenacity]),
        ("Stabilization", vec![Enablement, Tenacity]),
    ];

    PhaseTable {
        phases: phases
            .into_iter()
            .map(|(name, tags)| PhaseRequirement {
                name: name.to_string(),
                tags,
            })
            .collect(),
    }
});

impl PhaseTable {
    /// Builds a table, rejecting duplicate phase names.
    pub fn new(phases: Vec<PhaseRequirement>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for phase in &phases {
            if !seen.insert(phase.name.to_lowercase()) {
                return Err(ValidationError::invalid_phase_table(format!(
                    "phase '{}' is defined more than once",
                    phase.name
                )));
            }
        }
        Ok(Self { phases })
    }

    /// Ideation, Vetting, Launch Planning, Execution, Stabilization.
    pub fn standard() -> Self {
        STANDARD_TABLE.clone()
    }

    /// Parses a YAML list of `{name, tags}` entries.
    ///
    /// ```yaml
    /// - name: Ideation
    ///   tags: [W, I]
    /// - name: Vetting
    ///   tags: [D]
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ValidationError> {
        let raw: Vec<RawPhase> = serde_yaml::from_str(yaml)
            .map_err(|e| ValidationError::invalid_phase_table(e.to_string()))?;
        let phases = raw
            .into_iter()
            .map(|entry| {
                let tags = entry
                    .tags
                    .iter()
                    .map(|s| s.parse::<Tag>())
                    .collect::<Result<Vec<_>, _>>()?;
                PhaseRequirement::new(entry.name, tags)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(phases)
    }

    pub fn phases(&self) -> &[PhaseRequirement] {
        &self.phases
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Finds a phase by name, case-insensitive.
    pub fn get(&self, name: &str) -> Option<&PhaseRequirement> {
        self.phases
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for PhaseTable {
    fn default() -> Self {
        Self::standard()
    }
}
