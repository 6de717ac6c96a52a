//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how WKT polygon text is accepted.
///
/// The defaults match what existing stored values require: `POLYGON EMPTY`
/// is accepted and closing parentheses are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WktConfig {
    /// Accept the `POLYGON EMPTY` literal as a polygon with no vertices.
    #[serde(default = "WktConfig::default_accept_empty")]
    pub accept_empty: bool,

    /// Require the point list to end with exactly `))`.
    #[serde(default)]
    pub strict_tail: bool,
}

impl WktConfig {
    const fn default_accept_empty() -> bool {
        true
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for WktConfig {
    fn default() -> Self {
        Self {
            accept_empty: Self::default_accept_empty(),
            strict_tail: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WktConfig::default();
        assert!(config.accept_empty);
        assert!(!config.strict_tail);
    }

    #[test]
    fn test_config_json_defaults() {
        let config = WktConfig::from_json("{}").unwrap();
        assert_eq!(config, WktConfig::default());

        let config = WktConfig::from_json(r#"{"strict_tail": true}"#).unwrap();
        assert!(config.accept_empty);
        assert!(config.strict_tail);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        assert!(WktConfig::from_json(r#"{"lenient": true}"#).is_err());
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = WktConfig {
            accept_empty: false,
            strict_tail: true,
        };
        let json = config.to_json().unwrap();
        assert_eq!(WktConfig::from_json(&json).unwrap(), config);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_config_toml() {
        let config = WktConfig::from_toml("strict_tail = true\n").unwrap();
        assert!(config.strict_tail);
        assert!(config.accept_empty);
    }
}
