use serde::{Deserialize, Serialize};

use crate::constants::extract::DEFAULT_PROPERTY_KEY;
use crate::types::PropertyKey;

/// Policy for features lacking a properties bag or lacking the target key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingValuePolicy {
    /// Contribute nothing to the output.
    #[default]
    Skip,
    /// Contribute a JSON null placeholder in the feature's position.
    Null,
    /// Abort extraction with a missing-value error.
    Fail,
}

/// Policy for features whose properties value exists but is not an object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalformedPropertiesPolicy {
    /// Treat the feature as having no bag; the missing-value policy then
    /// decides its disposition.
    #[default]
    Skip,
    /// Abort extraction with a malformed-properties error.
    Fail,
}

/// Top-level extractor configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Property key looked up in each feature's bag.
    pub key: PropertyKey,
    /// Disposition for features without a bag or without the key.
    pub missing: MissingValuePolicy,
    /// Disposition for non-object properties values.
    pub malformed_properties: MalformedPropertiesPolicy,
}

impl ExtractorConfig {
    /// Create a config targeting `key` with default policies.
    pub fn new(key: impl Into<PropertyKey>) -> Self {
        Self {
            key: key.into(),
            missing: MissingValuePolicy::default(),
            malformed_properties: MalformedPropertiesPolicy::default(),
        }
    }

    /// Disposition for features without a bag or without the key.
    pub fn with_missing_policy(mut self, missing: MissingValuePolicy) -> Self {
        self.missing = missing;
        self
    }

    /// Disposition for non-object properties values.
    pub fn with_malformed_properties_policy(
        mut self,
        malformed_properties: MalformedPropertiesPolicy,
    ) -> Self {
        self.malformed_properties = malformed_properties;
        self
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROPERTY_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_observed_key_with_skip_policies() {
        let config = ExtractorConfig::default();
        assert_eq!(config.key, DEFAULT_PROPERTY_KEY);
        assert_eq!(config.missing, MissingValuePolicy::Skip);
        assert_eq!(config.malformed_properties, MalformedPropertiesPolicy::Skip);
    }

    #[test]
    fn builders_override_policies() {
        let config = ExtractorConfig::new("name")
            .with_missing_policy(MissingValuePolicy::Null)
            .with_malformed_properties_policy(MalformedPropertiesPolicy::Fail);
        assert_eq!(config.key, "name");
        assert_eq!(config.missing, MissingValuePolicy::Null);
        assert_eq!(config.malformed_properties, MalformedPropertiesPolicy::Fail);
    }
}
