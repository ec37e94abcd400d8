use crate::config::{Settings, TomlConfig};
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roman")]
#[command(about = "Convert a Roman numeral to its integer value")]
pub struct CliConfig {
    /// Roman numeral to convert, e.g. MCMXCIV (case-insensitive)
    pub numeral: String,

    /// Output format: plain or json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the configuration file, if any, and applies flags on top of it.
    pub fn settings(&self) -> Result<Settings> {
        let file = self
            .config
            .as_deref()
            .map(TomlConfig::from_file)
            .transpose()?;

        Settings::resolve(file.as_ref(), self.format.as_deref(), self.verbose)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("--config", path)?;
        }
        if let Some(format) = &self.format {
            validate_one_of("--format", format, &OutputFormat::VALID)?;
        }
        Ok(())
    }
}
