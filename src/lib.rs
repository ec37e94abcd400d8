pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{Settings, TomlConfig};
pub use crate::core::{
    converter::{convert, NumeralConverter},
    engine::ConversionEngine,
};
pub use domain::model::{Conversion, Numeral, OutputFormat};
pub use domain::ports::Converter;
pub use utils::error::{ConversionError, Result, RomanError};
