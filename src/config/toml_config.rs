use crate::config::Settings;
use crate::domain::model::OutputFormat;
use crate::utils::error::{RomanError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file for the `roman` binary.
///
/// ```toml
/// [output]
/// format = "json"
///
/// [logging]
/// verbose = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after substituting `${VAR}` placeholders, then validates.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        let config: TomlConfig =
            toml::from_str(&processed).map_err(|e| RomanError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RomanError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn settings(&self) -> Result<Settings> {
        let format = match &self.output.format {
            Some(format) => format.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Settings {
            format,
            verbose: self.logging.verbose.unwrap_or(false),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.output.format {
            validate_one_of("output.format", format, &OutputFormat::VALID)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        let settings = config.settings().unwrap();
        assert_eq!(settings.format, OutputFormat::Plain);
        assert!(!settings.verbose);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROMAN_TEST_OUTPUT_FORMAT", "json");
        let config = TomlConfig::from_toml_str(
            r#"
[output]
format = "${ROMAN_TEST_OUTPUT_FORMAT}"
"#,
        )
        .unwrap();
        assert_eq!(config.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let out = TomlConfig::substitute_env_vars("x = \"${ROMAN_TEST_SURELY_UNSET}\"").unwrap();
        assert_eq!(out, "x = \"${ROMAN_TEST_SURELY_UNSET}\"");
    }

    #[test]
    fn test_invalid_format_rejected() {
        let err = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, RomanError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = TomlConfig::from_toml_str("[output\nformat =").unwrap_err();
        assert!(matches!(err, RomanError::ConfigValidationError { .. }));
    }
}
