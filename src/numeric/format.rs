// ============================================================================
// Decimal Formatter
// Canonical plain / exponential text for digit-group decimals
// ============================================================================

use super::decimal::{Decimal, LOG_RADIX};
use std::fmt;

/// Base-10 exponents below this switch to exponential notation.
pub const EXPONENT_NEGATIVE: i64 = -5;

/// Base-10 exponents at or above this switch to exponential notation.
pub const EXPONENT_POSITIVE: i64 = 15;

/// Notation used when rendering a [`Decimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Exponential outside `[EXPONENT_NEGATIVE, EXPONENT_POSITIVE)`, plain inside
    #[default]
    Auto,
    /// Always positional, however many zeros that takes
    Plain,
    /// Always `d.ddde±n`
    Exponential,
}

impl Notation {
    fn is_exponential(self, exponent: i64) -> bool {
        match self {
            Notation::Auto => !(EXPONENT_NEGATIVE..EXPONENT_POSITIVE).contains(&exponent),
            Notation::Plain => false,
            Notation::Exponential => true,
        }
    }
}

impl Decimal {
    /// Canonical text: the same string `Display` produces.
    pub fn to_canonical_string(&self) -> String {
        self.to_string_with(Notation::Auto, None)
    }

    /// Render with a chosen notation, optionally zero-padding the digits up to
    /// `min_significant` significant digits.
    ///
    /// # Example
    /// ```
    /// use radix_decimal::numeric::{Decimal, Notation};
    ///
    /// let x: Decimal = "1.5".parse()?;
    /// assert_eq!(x.to_string_with(Notation::Plain, Some(4)), "1.500");
    /// assert_eq!(x.to_string_with(Notation::Exponential, None), "1.5e+0");
    /// # Ok::<(), radix_decimal::numeric::DecimalError>(())
    /// ```
    pub fn to_string_with(&self, notation: Notation, min_significant: Option<usize>) -> String {
        let digits = significant_digits(self.groups());
        let exponent = self.exponent_base10();
        let padding = min_significant.map_or(0, |sd| sd.saturating_sub(digits.len()));

        let mut out = String::with_capacity(digits.len() + padding + 8);
        if self.is_negative() {
            out.push('-');
        }

        if notation.is_exponential(exponent) {
            write_exponential(&mut out, &digits, exponent, padding);
        } else {
            write_plain(&mut out, &digits, exponent, padding);
        }
        out
    }
}

/// Significant digits without leading or trailing zeros ("0" for zero).
fn significant_digits(groups: &[u32]) -> String {
    let mut digits = String::with_capacity(groups.len() * LOG_RADIX as usize);
    let (first, rest) = groups.split_first().map_or((0, &[][..]), |(f, r)| (*f, r));

    digits.push_str(&first.to_string());
    for group in rest {
        digits.push_str(&format!("{group:05}"));
    }

    let trimmed = digits.trim_end_matches('0').len().max(1);
    digits.truncate(trimmed);
    digits
}

fn push_zeros(out: &mut String, count: usize) {
    out.extend(std::iter::repeat('0').take(count));
}

fn write_exponential(out: &mut String, digits: &str, exponent: i64, padding: usize) {
    let (head, tail) = digits.split_at(1);
    out.push_str(head);
    if !tail.is_empty() || padding > 0 {
        out.push('.');
        out.push_str(tail);
        push_zeros(out, padding);
    }
    out.push('e');
    if exponent >= 0 {
        out.push('+');
    }
    out.push_str(&exponent.to_string());
}

fn write_plain(out: &mut String, digits: &str, exponent: i64, padding: usize) {
    let len = digits.len() as i64;

    if exponent < 0 {
        out.push_str("0.");
        push_zeros(out, (-exponent - 1) as usize);
        out.push_str(digits);
        push_zeros(out, padding);
    } else if exponent >= len {
        out.push_str(digits);
        push_zeros(out, (exponent + 1 - len) as usize);
        // Padding beyond the integer digits becomes fractional zeros.
        let fractional = padding.saturating_sub((exponent + 1 - len) as usize);
        if fractional > 0 {
            out.push('.');
            push_zeros(out, fractional);
        }
    } else {
        let point = (exponent + 1) as usize;
        out.push_str(&digits[..point]);
        if point < digits.len() || padding > 0 {
            out.push('.');
            out.push_str(&digits[point..]);
            push_zeros(out, padding);
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_canonical_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
