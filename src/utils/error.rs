use thiserror::Error;

/// Reasons a candidate Roman numeral is rejected.
///
/// Positions are zero-based character offsets into the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Roman numeral string must be at least one character")]
    EmptyInput,

    #[error("Roman numerals cannot repeat more than 3 times: '{symbol}' at position {position}")]
    ExcessiveRepeat { symbol: char, position: usize },

    #[error("V, L, and D are not allowed to repeat: '{symbol}' at position {position}")]
    IllegalRepeat { symbol: char, position: usize },

    #[error("'{symbol}' is not a valid Roman numeral character (position {position})")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("Invalid subtraction '{current}{next}' at position {position}")]
    InvalidSubtraction {
        current: char,
        next: char,
        position: usize,
    },
}

#[derive(Error, Debug)]
pub enum RomanError {
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RomanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RomanError::Conversion(_) => ErrorCategory::Input,
            RomanError::ConfigValidationError { .. }
            | RomanError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RomanError::IoError(_) | RomanError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RomanError::Conversion(ConversionError::EmptyInput) => {
                "Pass a numeral such as XIV"
            }
            RomanError::Conversion(ConversionError::ExcessiveRepeat { .. }) => {
                "Use a subtractive pair instead of four repeats, e.g. IV rather than IIII"
            }
            RomanError::Conversion(ConversionError::IllegalRepeat { .. }) => {
                "Replace the repeated V, L or D with the next symbol up (X, C or M)"
            }
            RomanError::Conversion(ConversionError::UnknownSymbol { .. }) => {
                "Only I, V, X, L, C, D and M are allowed"
            }
            RomanError::Conversion(ConversionError::InvalidSubtraction { .. }) => {
                "Only I, X and C may be subtracted, and only from the next two symbols up"
            }
            RomanError::IoError(_) => "Check that the configuration file exists and is readable",
            RomanError::SerializationError(_) => "Try the plain output format",
            RomanError::ConfigValidationError { .. }
            | RomanError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RomanError::Conversion(e) => format!("Not a valid Roman numeral: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RomanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_errors_are_high_severity() {
        let err = RomanError::from(ConversionError::EmptyInput);
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = RomanError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "unsupported".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_messages_name_offending_characters() {
        let err = ConversionError::InvalidSubtraction {
            current: 'I',
            next: 'C',
            position: 0,
        };
        assert_eq!(err.to_string(), "Invalid subtraction 'IC' at position 0");

        let friendly = RomanError::from(ConversionError::UnknownSymbol {
            symbol: 'A',
            position: 2,
        })
        .user_friendly_message();
        assert!(friendly.contains("'A'"));
        assert!(friendly.contains("position 2"));
    }
}
