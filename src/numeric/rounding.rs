// ============================================================================
// Rounding Engine
// Significant-digit and decimal-place rounding over digit groups
// ============================================================================

use super::decimal::{Decimal, Sign, LOG_RADIX, POW10, RADIX};
use super::errors::{DecimalError, DecimalResult};
use crate::context::Context;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the discarded tail of a value is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Toward zero (truncate)
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Nearest neighbour, ties away from zero
    #[default]
    HalfUp,
    /// Nearest neighbour, ties toward zero
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour
    HalfEven,
}

impl RoundingMode {
    /// Decide whether the kept digits get incremented.
    ///
    /// - `first`: first discarded digit
    /// - `rest`: any non-zero digit after it
    /// - `last_odd`: last kept digit is odd
    fn rounds_up(self, sign: Sign, first: u32, rest: bool, last_odd: bool) -> bool {
        let discarded = first > 0 || rest;
        match self {
            RoundingMode::Up => discarded,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => discarded && sign == Sign::Positive,
            RoundingMode::Floor => discarded && sign == Sign::Negative,
            RoundingMode::HalfUp => first >= 5,
            RoundingMode::HalfDown => first > 5 || (first == 5 && rest),
            RoundingMode::HalfEven => first > 5 || (first == 5 && (rest || last_odd)),
        }
    }
}

impl Decimal {
    /// Round to `precision` significant digits.
    ///
    /// # Errors
    /// - `InvalidArgument` if `precision` is zero
    /// - `ExponentOutOfRange` if a carry pushes the exponent past the bound
    ///
    /// # Example
    /// ```
    /// use radix_decimal::numeric::{Decimal, RoundingMode};
    ///
    /// let x: Decimal = "123.456".parse()?;
    /// assert_eq!(x.round(5, RoundingMode::HalfUp)?.to_string(), "123.46");
    /// # Ok::<(), radix_decimal::numeric::DecimalError>(())
    /// ```
    pub fn round(&self, precision: u32, mode: RoundingMode) -> DecimalResult<Self> {
        if precision == 0 {
            return Err(DecimalError::invalid("precision 0"));
        }
        round_significant(self, precision, mode, false)
    }

    /// Round to a number of digits after the decimal point. Negative `places`
    /// round to the left of the point (`-2` rounds to hundreds).
    pub fn round_to_places(&self, places: i64, mode: RoundingMode) -> DecimalResult<Self> {
        round_at_place(self, places.saturating_neg(), mode, false)
    }

    /// Round with the precision and mode of `ctx`.
    pub fn round_with(&self, ctx: &Context) -> DecimalResult<Self> {
        ctx.validate()?;
        round_significant(self, ctx.precision, ctx.rounding, false)
    }
}

/// Keep `precision` significant digits. `sticky` marks non-zero digits beyond the
/// stored groups (a division remainder).
pub(crate) fn round_significant(
    value: &Decimal,
    precision: u32,
    mode: RoundingMode,
    sticky: bool,
) -> DecimalResult<Decimal> {
    if value.is_zero() {
        return Ok(Decimal::zero());
    }
    let place = value.exponent_base10() - i64::from(precision) + 1;
    round_at_place(value, place, mode, sticky)
}

/// Discard every digit below decimal place `place` (0 = units) and apply `mode`.
fn round_at_place(
    value: &Decimal,
    place: i64,
    mode: RoundingMode,
    sticky: bool,
) -> DecimalResult<Decimal> {
    if value.is_zero() {
        return Ok(Decimal::zero());
    }

    let log = i64::from(LOG_RADIX);
    let groups = value.groups();

    // Digits kept, counted from the top of the zero-padded leading group.
    let cut = (value.exponent() * log + log).saturating_sub(place);
    if cut >= groups.len() as i64 * log && !sticky {
        return Ok(value.clone());
    }

    let (first, rest) = if cut < 0 {
        (0, true)
    } else {
        (digit_at(groups, cut), sticky || nonzero_after(groups, cut))
    };
    let last_odd = cut > 0 && digit_at(groups, cut - 1) % 2 == 1;
    let up = mode.rounds_up(value.sign(), first, rest, last_odd);

    tracing::trace!(place, cut, first, rest, up, ?mode, "rounding decimal");

    if cut <= 0 {
        if !up {
            return Ok(Decimal::zero());
        }
        let unit = POW10[place.rem_euclid(log) as usize];
        return Decimal::normalize(value.sign(), place.div_euclid(log), &[unit]);
    }

    let kept = ((cut + log - 1) / log) as usize;
    let mut digits: Vec<u32> = groups.iter().copied().take(kept).collect();
    digits.resize(kept, 0);

    let partial = (cut % log) as usize;
    let unit = if partial == 0 {
        1
    } else {
        POW10[LOG_RADIX as usize - partial]
    };

    let mut exponent = value.exponent();
    let mut index = kept - 1;
    digits[index] -= digits[index] % unit;

    if up {
        let mut increment = unit;
        loop {
            digits[index] += increment;
            if digits[index] < RADIX {
                break;
            }
            digits[index] -= RADIX;
            increment = 1;
            if index == 0 {
                digits.insert(0, 1);
                exponent += 1;
                break;
            }
            index -= 1;
        }
    }

    Decimal::normalize(value.sign(), exponent, &digits)
}

/// Digit at padded position `pos` (0 = top digit of the leading group).
fn digit_at(groups: &[u32], pos: i64) -> u32 {
    let log = i64::from(LOG_RADIX);
    let index = (pos / log) as usize;
    match groups.get(index) {
        Some(&g) => (g / POW10[(log - 1 - pos % log) as usize]) % 10,
        None => 0,
    }
}

/// Whether any digit after padded position `pos` is non-zero.
fn nonzero_after(groups: &[u32], pos: i64) -> bool {
    let log = i64::from(LOG_RADIX);
    let index = (pos / log) as usize;
    match groups.get(index) {
        Some(&g) => {
            g % POW10[(log - 1 - pos % log) as usize] != 0
                || groups[index + 1..].iter().any(|&g| g != 0)
        }
        None => false,
    }
}
