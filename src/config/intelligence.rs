//! Intelligence engine configuration

use serde::Deserialize;

use crate::domain::foundation::Tier;
use crate::domain::intelligence::{
    AnalysisThresholds, DEFAULT_MIN_CATEGORY_SIZE, DEFAULT_MIN_SAMPLE_SIZE,
};

use super::error::ValidationError;

/// Statistical thresholds for skew detection
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IntelligenceConfig {
    /// Dimension sample size below which no test is run
    #[serde(default = "default_min_sample_size")]
    pub min_sample_size: usize,

    /// Category size below which a category is never reported as a deviation
    #[serde(default = "default_min_category_size")]
    pub min_category_size: usize,

    /// |z| cutoff for a moderate deviation
    #[serde(default = "default_moderate_z")]
    pub moderate_z: f64,

    /// |z| cutoff for a severe deviation
    #[serde(default = "default_severe_z")]
    pub severe_z: f64,

    /// p-value at or below which a dimension turns yellow
    #[serde(default = "default_yellow_p_value")]
    pub yellow_p_value: f64,

    /// p-value at or below which a medium effect turns a dimension red
    #[serde(default = "default_red_p_value")]
    pub red_p_value: f64,

    /// Cramér's V treated as a medium effect
    #[serde(default = "default_medium_effect_size")]
    pub medium_effect_size: f64,

    /// Tier whose rate is compared per category
    #[serde(default)]
    pub reference_tier: Tier,
}

impl IntelligenceConfig {
    /// Converts to the thresholds the engine consumes
    pub fn to_thresholds(&self) -> AnalysisThresholds {
        AnalysisThresholds {
            min_sample_size: self.min_sample_size,
            min_category_size: self.min_category_size,
            moderate_z: self.moderate_z,
            severe_z: self.severe_z,
            yellow_p_value: self.yellow_p_value,
            red_p_value: self.red_p_value,
            medium_effect_size: self.medium_effect_size,
            reference_tier: self.reference_tier,
        }
    }

    /// Validate threshold consistency
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_sample_size == 0 {
            return Err(ValidationError::ZeroSize("min_sample_size"));
        }
        if self.min_category_size == 0 {
            return Err(ValidationError::ZeroSize("min_category_size"));
        }
        if self.moderate_z.is_nan() || self.moderate_z <= 0.0 {
            return Err(ValidationError::NonPositiveZScore("moderate_z"));
        }
        if self.severe_z.is_nan() || self.severe_z < self.moderate_z {
            return Err(ValidationError::ZScoreOrder {
                moderate: self.moderate_z,
                severe: self.severe_z,
            });
        }
        for (name, value) in [
            ("yellow_p_value", self.yellow_p_value),
            ("red_p_value", self.red_p_value),
        ] {
            if !(0.0..1.0).contains(&value) || value == 0.0 {
                return Err(ValidationError::PValueOutOfRange(name));
            }
        }
        if self.red_p_value > self.yellow_p_value {
            return Err(ValidationError::PValueOrder {
                yellow: self.yellow_p_value,
                red: self.red_p_value,
            });
        }
        if !(0.0..=1.0).contains(&self.medium_effect_size) || self.medium_effect_size == 0.0 {
            return Err(ValidationError::EffectSizeOutOfRange);
        }
        Ok(())
    }
}

impl Default for IntelligenceConfig {
    fn default() -> Self {
        Self {
            min_sample_size: default_min_sample_size(),
            min_category_size: default_min_category_size(),
            moderate_z: default_moderate_z(),
            severe_z: default_severe_z(),
            yellow_p_value: default_yellow_p_value(),
            red_p_value: default_red_p_value(),
            medium_effect_size: default_medium_effect_size(),
            reference_tier: Tier::default(),
        }
    }
}

fn default_min_sample_size() -> usize {
    DEFAULT_MIN_SAMPLE_SIZE
}

fn default_min_category_size() -> usize {
    DEFAULT_MIN_CATEGORY_SIZE
}

fn default_moderate_z() -> f64 {
    2.0
}

fn default_severe_z() -> f64 {
    3.0
}

fn default_yellow_p_value() -> f64 {
    0.05
}

fn default_red_p_value() -> f64 {
    0.01
}

fn default_medium_effect_size() -> f64 {
    0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_engine_defaults() {
        let config = IntelligenceConfig::default();
        assert_eq!(config.to_thresholds(), AnalysisThresholds::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let json = r#"{ "min_sample_size": 25, "reference_tier": "low" }"#;
        let config: IntelligenceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.min_sample_size, 25);
        assert_eq!(config.reference_tier, Tier::Low);
        assert_eq!(config.severe_z, 3.0);
    }

    #[test]
    fn test_zero_sizes_rejected() {
        let config = IntelligenceConfig {
            min_sample_size: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::ZeroSize("min_sample_size"))
        );

        let config = IntelligenceConfig {
            min_category_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_severe_below_moderate_rejected() {
        let config = IntelligenceConfig {
            moderate_z: 3.0,
            severe_z: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::ZScoreOrder { .. })
        ));
    }

    #[test]
    fn test_p_values_outside_unit_interval_rejected() {
        for bad in [0.0, 1.0, -0.2, f64::NAN] {
            let config = IntelligenceConfig {
                yellow_p_value: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted yellow_p_value {}", bad);
        }
    }

    #[test]
    fn test_red_p_above_yellow_rejected() {
        let config = IntelligenceConfig {
            yellow_p_value: 0.01,
            red_p_value: 0.05,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::PValueOrder { .. })
        ));
    }

    #[test]
    fn test_effect_size_range() {
        let config = IntelligenceConfig {
            medium_effect_size: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = IntelligenceConfig {
            medium_effect_size: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EffectSizeOutOfRange));
    }
}
