use crate::core::{Conversion, Converter};
use crate::utils::error::Result;

/// Runs a [`Converter`] and records the outcome.
pub struct ConversionEngine<C: Converter> {
    converter: C,
}

impl<C: Converter> ConversionEngine<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    pub fn run(&self, input: &str) -> Result<Conversion> {
        tracing::debug!("Converting {:?}", input);

        match self.converter.convert(input) {
            Ok(value) => {
                tracing::debug!("{:?} = {}", input, value);
                Ok(Conversion {
                    input: input.to_string(),
                    value,
                })
            }
            Err(e) => {
                tracing::warn!("Rejected {:?}: {}", input, e);
                Err(e.into())
            }
        }
    }
}
