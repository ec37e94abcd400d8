use crate::utils::error::{RomanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven Roman numeral symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Numeral {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Numeral {
    pub const ALL: [Numeral; 7] = [
        Numeral::I,
        Numeral::V,
        Numeral::X,
        Numeral::L,
        Numeral::C,
        Numeral::D,
        Numeral::M,
    ];

    /// Looks up an uppercase symbol. Lowercase input must be normalized first.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Numeral::I),
            'V' => Some(Numeral::V),
            'X' => Some(Numeral::X),
            'L' => Some(Numeral::L),
            'C' => Some(Numeral::C),
            'D' => Some(Numeral::D),
            'M' => Some(Numeral::M),
            _ => None,
        }
    }

    pub const fn value(self) -> i64 {
        match self {
            Numeral::I => 1,
            Numeral::V => 5,
            Numeral::X => 10,
            Numeral::L => 50,
            Numeral::C => 100,
            Numeral::D => 500,
            Numeral::M => 1000,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Numeral::I => 'I',
            Numeral::V => 'V',
            Numeral::X => 'X',
            Numeral::L => 'L',
            Numeral::C => 'C',
            Numeral::D => 'D',
            Numeral::M => 'M',
        }
    }

    /// V, L and D may never appear twice in a row.
    pub const fn is_non_repeatable(self) -> bool {
        matches!(self, Numeral::V | Numeral::L | Numeral::D)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Result of a successful conversion, as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    pub value: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl OutputFormat {
    pub const VALID: [&'static str; 2] = ["plain", "json"];
}

impl FromStr for OutputFormat {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(RomanError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::VALID.join(", ")),
            }),
        }
    }
}

impl Conversion {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Plain => Ok(self.value.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}
