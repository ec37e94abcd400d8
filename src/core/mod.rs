pub mod converter;
pub mod engine;

pub use crate::domain::model::Conversion;
pub use crate::domain::ports::Converter;
