#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::domain::model::OutputFormat;
use crate::utils::error::Result;

/// Effective settings after layering command-line flags over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(
        file: Option<&TomlConfig>,
        format_override: Option<&str>,
        verbose_override: bool,
    ) -> Result<Self> {
        let mut settings = file.map(TomlConfig::settings).transpose()?.unwrap_or_default();

        if let Some(format) = format_override {
            settings.format = format.parse()?;
        }
        settings.verbose |= verbose_override;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::resolve(None, None, false).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.format, OutputFormat::Plain);
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[output]
format = "json"

[logging]
verbose = false
"#,
        )
        .unwrap();

        let settings = Settings::resolve(Some(&file), Some("plain"), true).unwrap();
        assert_eq!(settings.format, OutputFormat::Plain);
        assert!(settings.verbose);

        let settings = Settings::resolve(Some(&file), None, false).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.verbose);
    }

    #[test]
    fn test_bad_format_override() {
        assert!(Settings::resolve(None, Some("xml"), false).is_err());
    }
}
