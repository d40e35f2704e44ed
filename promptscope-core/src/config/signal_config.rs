//! Quality-signal threshold configuration.
//!
//! Quality issues and recommendations use separate tables: a convention can
//! trigger a recommendation without being flagged as an issue, and vice
//! versa. All thresholds are percentages in [0, 100] compared against
//! corpus-level convention usage.

use serde::{Deserialize, Serialize};

/// Thresholds for the three signal families, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SignalConfig {
    pub issues: IssueThresholds,
    pub best_practices: BestPracticeThresholds,
    pub recommendations: RecommendationThresholds,
}

impl SignalConfig {
    /// Parse a config from TOML text. Missing keys fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Usage percentages *below* these cutoffs are flagged as quality issues.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IssueThresholds {
    /// Default: 30.0.
    pub anti_hallucination_below: Option<f64>,
    /// Default: 20.0.
    pub examples_below: Option<f64>,
    /// Default: 40.0.
    pub step_by_step_below: Option<f64>,
    /// Default: 50.0.
    pub structured_tags_below: Option<f64>,
}

impl IssueThresholds {
    pub fn effective_anti_hallucination(&self) -> f64 {
        self.anti_hallucination_below.unwrap_or(30.0)
    }

    pub fn effective_examples(&self) -> f64 {
        self.examples_below.unwrap_or(20.0)
    }

    pub fn effective_step_by_step(&self) -> f64 {
        self.step_by_step_below.unwrap_or(40.0)
    }

    pub fn effective_structured_tags(&self) -> f64 {
        self.structured_tags_below.unwrap_or(50.0)
    }
}

/// Usage percentages *above* these cutoffs are reported as best practices.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BestPracticeThresholds {
    /// Default: 70.0.
    pub role_definitions_above: Option<f64>,
    /// Default: 60.0.
    pub instruction_sections_above: Option<f64>,
    /// Default: 60.0.
    pub structured_tags_above: Option<f64>,
}

impl BestPracticeThresholds {
    pub fn effective_role_definitions(&self) -> f64 {
        self.role_definitions_above.unwrap_or(70.0)
    }

    pub fn effective_instruction_sections(&self) -> f64 {
        self.instruction_sections_above.unwrap_or(60.0)
    }

    pub fn effective_structured_tags(&self) -> f64 {
        self.structured_tags_above.unwrap_or(60.0)
    }
}

/// Usage percentages *below* these cutoffs generate recommendations.
///
/// Deliberately laxer than [`IssueThresholds`] so recommendations surface
/// before a convention degrades far enough to be an issue.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecommendationThresholds {
    /// Default: 50.0.
    pub anti_hallucination_below: Option<f64>,
    /// Default: 30.0.
    pub examples_below: Option<f64>,
    /// Default: 40.0.
    pub output_formats_below: Option<f64>,
    /// Default: 50.0.
    pub structured_tags_below: Option<f64>,
}

impl RecommendationThresholds {
    pub fn effective_anti_hallucination(&self) -> f64 {
        self.anti_hallucination_below.unwrap_or(50.0)
    }

    pub fn effective_examples(&self) -> f64 {
        self.examples_below.unwrap_or(30.0)
    }

    pub fn effective_output_formats(&self) -> f64 {
        self.output_formats_below.unwrap_or(40.0)
    }

    pub fn effective_structured_tags(&self) -> f64 {
        self.structured_tags_below.unwrap_or(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_cutoffs() {
        let config = SignalConfig::default();
        assert_eq!(config.issues.effective_anti_hallucination(), 30.0);
        assert_eq!(config.issues.effective_examples(), 20.0);
        assert_eq!(config.issues.effective_step_by_step(), 40.0);
        assert_eq!(config.issues.effective_structured_tags(), 50.0);
        assert_eq!(config.best_practices.effective_role_definitions(), 70.0);
        assert_eq!(config.best_practices.effective_instruction_sections(), 60.0);
        assert_eq!(config.best_practices.effective_structured_tags(), 60.0);
        assert_eq!(config.recommendations.effective_anti_hallucination(), 50.0);
        assert_eq!(config.recommendations.effective_examples(), 30.0);
        assert_eq!(config.recommendations.effective_output_formats(), 40.0);
        assert_eq!(config.recommendations.effective_structured_tags(), 50.0);
    }

    #[test]
    fn issue_and_recommendation_tables_are_independent() {
        let toml = r#"
            [issues]
            anti_hallucination_below = 10.0

            [recommendations]
            anti_hallucination_below = 90.0
        "#;
        let config = SignalConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.issues.effective_anti_hallucination(), 10.0);
        assert_eq!(config.recommendations.effective_anti_hallucination(), 90.0);
        // Untouched keys keep their defaults.
        assert_eq!(config.issues.effective_examples(), 20.0);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = SignalConfig::from_toml_str("").unwrap();
        assert_eq!(config.issues.effective_structured_tags(), 50.0);
    }
}
