use crate::core::{AvailabilityPolicy, ConfigProvider};
use crate::utils::error::{Result, StationError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_NAME_LENGTH: usize = 64;
const DEFAULT_STATION_NAME: &str = "station";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationConfig {
    pub station: StationSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationSection {
    pub name: Option<String>,
    pub description: Option<String>,
    pub policy: Option<AvailabilityPolicy>,
}

impl Default for StationSection {
    fn default() -> Self {
        Self {
            name: Some(DEFAULT_STATION_NAME.to_string()),
            description: None,
            policy: None,
        }
    }
}

impl StationConfig {
    /// Loads a station configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StationError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StationError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders with environment values, leaving unset ones as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            StationError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn with_overrides(
        mut self,
        name: Option<String>,
        policy: Option<AvailabilityPolicy>,
    ) -> Self {
        if let Some(name) = name {
            tracing::debug!("🔧 Station name overridden to: {}", name);
            self.station.name = Some(name);
        }
        if let Some(policy) = policy {
            tracing::debug!("🔧 Availability policy overridden to: {}", policy);
            self.station.policy = Some(policy);
        }
        self
    }
}

impl ConfigProvider for StationConfig {
    fn station_name(&self) -> &str {
        self.station
            .name
            .as_deref()
            .unwrap_or(DEFAULT_STATION_NAME)
    }

    fn availability_policy(&self) -> AvailabilityPolicy {
        self.station.policy.unwrap_or_default()
    }
}

impl Validate for StationConfig {
    fn validate(&self) -> Result<()> {
        let name = validation::validate_required_field("station.name", &self.station.name)?;
        validation::validate_non_empty_string("station.name", name)?;
        validation::validate_max_length("station.name", name, MAX_NAME_LENGTH)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[station]
name = "Old Street"
description = "By the roundabout"
policy = "occupancy"
"#;

        let config = StationConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.station_name(), "Old Street");
        assert_eq!(config.station.description.as_deref(), Some("By the roundabout"));
        assert_eq!(config.availability_policy(), AvailabilityPolicy::Occupancy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_policy_defaults_to_always_unavailable() {
        let config = StationConfig::from_toml_str("[station]\nname = \"Angel\"\n").unwrap();
        assert_eq!(
            config.availability_policy(),
            AvailabilityPolicy::AlwaysUnavailable
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DOCKING_STATION_TEST_NAME", "Shoreditch");

        let toml_content = r#"
[station]
name = "${DOCKING_STATION_TEST_NAME}"
"#;

        let config = StationConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.station_name(), "Shoreditch");

        std::env::remove_var("DOCKING_STATION_TEST_NAME");
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let toml_content = r#"
[station]
name = "Angel"
policy = "sometimes"
"#;
        let err = StationConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, StationError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_policy_accepts_same_spellings_as_cli_flag() {
        for (raw, expected) in [
            ("Occupancy", AvailabilityPolicy::Occupancy),
            ("always-unavailable", AvailabilityPolicy::AlwaysUnavailable),
            ("legacy", AvailabilityPolicy::AlwaysUnavailable),
        ] {
            let toml_content = format!("[station]\nname = \"Angel\"\npolicy = \"{}\"\n", raw);
            let config = StationConfig::from_toml_str(&toml_content).unwrap();
            assert_eq!(config.availability_policy(), expected);
            assert_eq!(raw.parse::<AvailabilityPolicy>().unwrap(), expected);
        }
    }

    #[test]
    fn test_missing_name_fails_validation() {
        let config = StationConfig::from_toml_str("[station]\npolicy = \"occupancy\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(StationError::MissingConfigError { ref field }) if field == "station.name"
        ));

        let named = config.with_overrides(Some("Angel".to_string()), None);
        assert!(named.validate().is_ok());
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let config = StationConfig::from_toml_str("[station]\nname = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let config = StationConfig::default()
            .with_overrides(Some("Bank".to_string()), Some(AvailabilityPolicy::Occupancy));
        assert_eq!(config.station_name(), "Bank");
        assert_eq!(config.availability_policy(), AvailabilityPolicy::Occupancy);

        let untouched = StationConfig::default().with_overrides(None, None);
        assert_eq!(untouched, StationConfig::default());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[station]\nname = \"file-test\"\n")
            .unwrap();

        let config = StationConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.station_name(), "file-test");
    }
}
