use crate::domain::model::Numeral;
use crate::domain::ports::Converter;
use crate::utils::error::ConversionError;

type ConversionResult<T> = std::result::Result<T, ConversionError>;

/// Converts Roman numeral text to its integer value.
///
/// Only a weak set of well-formedness rules is enforced: no symbol may run
/// four or more times, V/L/D may not repeat at all, and every subtractive
/// pair must have a value ratio of 5 or 10. Strings that pass these rules
/// but are not canonical (`IIX`, `VIV`) still produce a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumeralConverter;

impl NumeralConverter {
    pub const fn new() -> Self {
        Self
    }

    pub fn convert(&self, input: &str) -> ConversionResult<i64> {
        let chars = validate_input(input)?;

        let mut sum = 0i64;
        for (i, &symbol) in chars.iter().enumerate() {
            let current = lookup(symbol, i)?;
            let next = chars
                .get(i + 1)
                .map(|&next| lookup(next, i + 1))
                .transpose()?;

            match next {
                Some(next) if next.value() > current.value() => {
                    let quotient = next.value() / current.value();
                    if quotient != 5 && quotient != 10 {
                        return Err(ConversionError::InvalidSubtraction {
                            current: symbol,
                            next: chars[i + 1],
                            position: i,
                        });
                    }
                    tracing::trace!(position = i, "subtracting {} before {}", current, next);
                    sum -= current.value();
                }
                _ => sum += current.value(),
            }
        }

        tracing::debug!(input, value = sum, "converted Roman numeral");
        Ok(sum)
    }
}

impl Converter for NumeralConverter {
    fn convert(&self, input: &str) -> ConversionResult<i64> {
        NumeralConverter::convert(self, input)
    }
}

/// Converts `input` with the default [`NumeralConverter`].
pub fn convert(input: &str) -> ConversionResult<i64> {
    NumeralConverter.convert(input)
}

/// Checks the repeat rules on the raw input and returns the uppercased
/// characters for numeric interpretation, one per input character.
fn validate_input(input: &str) -> ConversionResult<Vec<char>> {
    if input.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let raw: Vec<char> = input.chars().collect();

    // Any character counts here, including ones that are not numerals.
    if let Some((symbol, position)) = find_run(&raw, 4, |_| true) {
        return Err(ConversionError::ExcessiveRepeat { symbol, position });
    }

    if let Some((symbol, position)) = find_run(&raw, 2, |c| {
        Numeral::from_char(fold_case(c)).is_some_and(Numeral::is_non_repeatable)
    }) {
        return Err(ConversionError::IllegalRepeat { symbol, position });
    }

    Ok(raw.into_iter().map(fold_case).collect())
}

/// Finds the leftmost run of at least `min_len` case-insensitively equal
/// characters whose first character satisfies `eligible`.
fn find_run(
    chars: &[char],
    min_len: usize,
    eligible: impl Fn(char) -> bool,
) -> Option<(char, usize)> {
    let mut start = 0;
    for i in 1..=chars.len() {
        let continues = i < chars.len() && fold_case(chars[i]) == fold_case(chars[start]);
        if !continues {
            if i - start >= min_len && eligible(chars[start]) {
                return Some((chars[start], start));
            }
            start = i;
        }
    }
    None
}

/// Uppercases a single character. Characters whose uppercase form is
/// longer than one character (`ß`, `ﬁ`) are kept as written.
fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn lookup(symbol: char, position: usize) -> ConversionResult<Numeral> {
    Numeral::from_char(symbol).ok_or(ConversionError::UnknownSymbol { symbol, position })
}
