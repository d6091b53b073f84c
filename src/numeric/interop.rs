// ============================================================================
// Interop
// Conversions to and from native numbers and rust_decimal (API boundaries)
// ============================================================================

use super::decimal::{Decimal, Sign, RADIX};
use super::errors::{DecimalError, DecimalResult};
use super::format::Notation;
use super::parse::parse;

/// Largest scale, and largest base-10 exponent, `rust_decimal` can hold.
const RUST_DECIMAL_MAX_DIGITS: i64 = 28;

impl Decimal {
    /// Exact value of an unsigned integer.
    fn from_unsigned(sign: Sign, mut value: u128) -> Self {
        if value == 0 {
            return Self::zero();
        }

        let radix = u128::from(RADIX);
        let mut groups = Vec::with_capacity(8);
        while value > 0 {
            groups.push((value % radix) as u32);
            value /= radix;
        }
        groups.reverse();

        let exponent = groups.len() as i64 - 1;
        Self::normalize(sign, exponent, &groups)
            .expect("u128 spans at most eight groups, far inside the exponent bound")
    }

    /// Nearest `f64`. Lossy: huge magnitudes become infinite, tiny ones zero.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        self.to_string_with(Notation::Exponential, None)
            .parse()
            .expect("exponential text is valid f64 syntax")
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries only.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the value needs more than 28 digits of scale
    /// or exceeds the 96-bit mantissa.
    pub fn to_rust_decimal(&self) -> DecimalResult<rust_decimal::Decimal> {
        // Reject before rendering: plain text of a huge exponent would be enormous.
        let magnitude = self.exponent_base10();
        let scale = self.significant_digits() as i64 - magnitude - 1;
        if magnitude > RUST_DECIMAL_MAX_DIGITS || scale > RUST_DECIMAL_MAX_DIGITS {
            tracing::debug!(magnitude, scale, "value outside rust_decimal range");
            return Err(DecimalError::invalid(format_args!(
                "{} digits before and {} after the point do not fit rust_decimal",
                magnitude + 1,
                scale
            )));
        }

        let text = self.to_string_with(Notation::Plain, None);
        rust_decimal::Decimal::from_str_exact(&text).map_err(|e| {
            tracing::debug!(value = %text, error = %e, "rust_decimal conversion failed");
            DecimalError::invalid(format_args!("{text} ({e})"))
        })
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(value: $t) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                Self::from_unsigned(sign, value.unsigned_abs() as u128)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(value: $t) -> Self {
                Self::from_unsigned(Sign::Positive, value as u128)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl TryFrom<rust_decimal::Decimal> for Decimal {
    type Error = DecimalError;

    /// Exact conversion from `rust_decimal::Decimal`.
    fn try_from(value: rust_decimal::Decimal) -> Result<Self, Self::Error> {
        parse(value.to_string().as_str())
    }
}

impl TryFrom<&Decimal> for rust_decimal::Decimal {
    type Error = DecimalError;

    fn try_from(value: &Decimal) -> Result<Self, Self::Error> {
        value.to_rust_decimal()
    }
}

impl From<&Decimal> for f64 {
    fn from(value: &Decimal) -> Self {
        value.to_f64()
    }
}
