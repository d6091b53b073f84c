// ============================================================================
// Decimal Parser
// Text, float and existing values into canonical digit groups
// ============================================================================

use super::decimal::{check_exponent, Decimal, Groups, Sign, LOG_RADIX};
use super::errors::{DecimalError, DecimalResult};
use std::str::FromStr;

/// Cap applied to explicit exponents while scanning, well past any representable value.
const EXPONENT_SCAN_LIMIT: i64 = 100_000_000_000_000_000;

/// Anything the parser accepts.
#[derive(Debug, Clone, Copy)]
pub enum DecimalInput<'a> {
    /// A native float; must be finite
    Float(f64),
    /// Decimal text matching `-?(\d+(\.\d*)?|\.\d+)(e[+-]?\d+)?`
    Text(&'a str),
    /// An existing value, copied as-is
    Decimal(&'a Decimal),
}

impl From<f64> for DecimalInput<'_> {
    fn from(value: f64) -> Self {
        DecimalInput::Float(value)
    }
}

impl<'a> From<&'a str> for DecimalInput<'a> {
    fn from(value: &'a str) -> Self {
        DecimalInput::Text(value)
    }
}

impl<'a> From<&'a String> for DecimalInput<'a> {
    fn from(value: &'a String) -> Self {
        DecimalInput::Text(value.as_str())
    }
}

impl<'a> From<&'a Decimal> for DecimalInput<'a> {
    fn from(value: &'a Decimal) -> Self {
        DecimalInput::Decimal(value)
    }
}

/// Parse any supported input into a canonical [`Decimal`].
///
/// # Errors
/// - `InvalidArgument` for malformed text or a non-finite float
/// - `ExponentOutOfRange` if the value lies outside the representable range
///
/// # Example
/// ```
/// use radix_decimal::numeric::parse;
///
/// let x = parse(745834720.0001)?;
/// let y = parse("423.0002")?;
/// assert_eq!(x.checked_add(&y)?.to_string(), "745835143.0003");
/// # Ok::<(), radix_decimal::numeric::DecimalError>(())
/// ```
pub fn parse<'a>(input: impl Into<DecimalInput<'a>>) -> DecimalResult<Decimal> {
    match input.into() {
        DecimalInput::Float(value) => parse_float(value),
        DecimalInput::Text(text) => parse_text(text),
        DecimalInput::Decimal(value) => Ok(value.clone()),
    }
}

fn parse_float(value: f64) -> DecimalResult<Decimal> {
    // Infinity fails here as well: inf * 0 is NaN.
    if !value.is_finite() {
        tracing::debug!(value, "rejected non-finite float");
        return Err(DecimalError::invalid(value));
    }
    if value == 0.0 {
        return Ok(Decimal::zero());
    }

    let sign = if value < 0.0 {
        Sign::Negative
    } else {
        Sign::Positive
    };

    // `{:e}` renders the shortest text that round-trips to the same float.
    let text = format!("{:e}", value.abs());
    let literal = scan(&text).ok_or_else(|| DecimalError::invalid(&text))?;
    build(sign, literal)
}

fn parse_text(text: &str) -> DecimalResult<Decimal> {
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => (Sign::Negative, rest),
        None => (Sign::Positive, text),
    };

    match scan(body) {
        Some(literal) => build(sign, literal),
        None => {
            tracing::debug!(input = text, "rejected malformed decimal text");
            Err(DecimalError::invalid(text))
        }
    }
}

// ============================================================================
// Scanning
// ============================================================================

/// A syntactically valid unsigned literal, split into its pieces.
struct Literal<'a> {
    integer: &'a [u8],
    fraction: &'a [u8],
    exponent: i64,
}

/// Match `(\d+(\.\d*)?|\.\d+)(e[+-]?\d+)?` against the whole input.
fn scan(text: &str) -> Option<Literal<'_>> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let int_end = digits_from(0);
    let integer = &bytes[..int_end];
    let mut pos = int_end;

    let mut fraction: &[u8] = &[];
    if bytes.get(pos) == Some(&b'.') {
        let frac_end = digits_from(pos + 1);
        fraction = &bytes[pos + 1..frac_end];
        pos = frac_end;
    }

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut exponent = 0i64;
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        let negative = match bytes.get(pos) {
            Some(b'-') => {
                pos += 1;
                true
            }
            Some(b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };

        let exp_end = digits_from(pos);
        if exp_end == pos {
            return None;
        }
        for &b in &bytes[pos..exp_end] {
            exponent = (exponent * 10 + i64::from(b - b'0')).min(EXPONENT_SCAN_LIMIT);
        }
        if negative {
            exponent = -exponent;
        }
        pos = exp_end;
    }

    (pos == bytes.len()).then_some(Literal {
        integer,
        fraction,
        exponent,
    })
}

// ============================================================================
// Group Packing
// ============================================================================

/// Pack a scanned literal into canonical digit groups.
fn build(sign: Sign, literal: Literal<'_>) -> DecimalResult<Decimal> {
    let digits: Vec<u8> = literal
        .integer
        .iter()
        .chain(literal.fraction)
        .map(|b| b - b'0')
        .collect();

    let Some(first) = digits.iter().position(|&d| d != 0) else {
        return Ok(Decimal::zero());
    };
    let last = digits.iter().rposition(|&d| d != 0).unwrap_or(first);
    let significant = &digits[first..=last];

    // Decimal place of the first significant digit (0 = units).
    let place = literal.integer.len() as i64 - 1 - first as i64 + literal.exponent;
    let log = i64::from(LOG_RADIX);
    let exponent = place.div_euclid(log);
    check_exponent(exponent)?;

    let lead = (place.rem_euclid(log) + 1) as usize;
    let mut groups = Groups::with_capacity(1 + significant.len() / LOG_RADIX as usize);
    let (head, tail) = significant.split_at(lead.min(significant.len()));

    groups.push(pack(head, lead));
    for chunk in tail.chunks(LOG_RADIX as usize) {
        groups.push(pack(chunk, LOG_RADIX as usize));
    }

    Decimal::normalize(sign, exponent, &groups)
}

/// Read `digits` as a group `width` digits wide, right-padding with zeros.
fn pack(digits: &[u8], width: usize) -> u32 {
    let value = digits.iter().fold(0u32, |acc, &d| acc * 10 + u32::from(d));
    value * 10u32.pow((width - digits.len()) as u32)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl FromStr for Decimal {
    type Err = DecimalError;

    /// Parse decimal text.
    ///
    /// # Examples
    /// - "123.45" -> 123.45
    /// - "-.5e3" -> -500
    /// - "0001.2000" -> 1.2
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_text(s)
    }
}

impl TryFrom<&str> for Decimal {
    type Error = DecimalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_text(value)
    }
}

impl TryFrom<f64> for Decimal {
    type Error = DecimalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        parse_float(value)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::decimal::MAX_EXPONENT;

    #[test]
    fn test_parse_packs_groups() {
        let x = parse("745834720.0001").unwrap();
        assert_eq!(x.sign(), Sign::Positive);
        assert_eq!(x.exponent(), 1);
        assert_eq!(x.groups(), &[7458, 34720, 10]);

        let y = parse("0.00012").unwrap();
        assert_eq!(y.exponent(), -1);
        assert_eq!(y.groups(), &[12]);

        let z = parse("100000").unwrap();
        assert_eq!(z.exponent(), 1);
        assert_eq!(z.groups(), &[1]);
    }

    #[test]
    fn test_parse_float() {
        let x = parse(745834720.0001).unwrap();
        assert_eq!(x, parse("745834720.0001").unwrap());

        let y = parse(-0.1).unwrap();
        assert_eq!(y.to_string(), "-0.1");

        let big = parse(1e300).unwrap();
        assert_eq!(big.exponent_base10(), 300);
    }

    #[test]
    fn test_parse_zero_variants() {
        for input in ["0", "-0", "0.000", ".0", "0e999999999999999999999", "000.000e-5"] {
            assert_eq!(parse(input).unwrap(), Decimal::zero(), "input {input}");
        }
        assert_eq!(parse(0.0).unwrap(), Decimal::zero());
        assert_eq!(parse(-0.0).unwrap(), Decimal::zero());
    }

    #[test]
    fn test_parse_grammar() {
        assert_eq!(parse("5.").unwrap(), parse("5").unwrap());
        assert_eq!(parse(".5").unwrap(), parse("0.5").unwrap());
        assert_eq!(parse("1.5E3").unwrap(), parse("1500").unwrap());
        assert_eq!(parse("25e-3").unwrap(), parse("0.025").unwrap());
        assert_eq!(parse("2e+2").unwrap(), parse("200").unwrap());
        assert_eq!(parse("-.5e1").unwrap(), parse("-5").unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        let malformed = [
            "", "-", ".", "abc", "1.2.3", "1e", "1e+", "+1", " 1", "1 ", "--1", "e5", "1x",
        ];
        for input in malformed {
            assert!(
                matches!(parse(input), Err(DecimalError::InvalidArgument(_))),
                "input {input:?}"
            );
        }
        assert!(matches!(parse(f64::NAN), Err(DecimalError::InvalidArgument(_))));
        assert!(matches!(
            parse(f64::INFINITY),
            Err(DecimalError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_exponent_range() {
        let limit = MAX_EXPONENT * 5;
        assert!(parse(format!("1e{limit}").as_str()).is_ok());
        assert!(matches!(
            parse(format!("1e{}", limit + 5).as_str()),
            Err(DecimalError::ExponentOutOfRange(_))
        ));
        assert!(matches!(
            parse("1e-99999999999999999999"),
            Err(DecimalError::ExponentOutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_existing_value_copies() {
        let x = parse("12.5").unwrap();
        let y = parse(&x).unwrap();
        assert_eq!(x, y);
    }

    #[test]
    fn test_from_str_and_try_from() {
        let x: Decimal = "3.14159".parse().unwrap();
        assert_eq!(Decimal::try_from("3.14159").unwrap(), x);
        assert_eq!(Decimal::try_from(3.14159).unwrap(), x);
    }
}
