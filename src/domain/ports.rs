use crate::utils::error::ConversionError;

/// Turns numeral text into an integer value.
pub trait Converter: Send + Sync {
    fn convert(&self, input: &str) -> std::result::Result<i64, ConversionError>;
}
