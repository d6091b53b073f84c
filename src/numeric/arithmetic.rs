// ============================================================================
// Arithmetic Core
// Grade-school add, subtract, multiply and long division over digit groups
// ============================================================================
//
// Every operation copies its operands into owned scratch buffers, works on
// those, and hands the result to `Decimal::normalize`. Inputs are never mutated.

use super::decimal::{Decimal, Sign, LOG_RADIX, PRECISION, PRECISION_GROUPS, RADIX};
use super::errors::{DecimalError, DecimalResult};
use super::rounding::{round_significant, RoundingMode};
use crate::context::Context;
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Decimal {
    // ========================================================================
    // Addition / Subtraction
    // ========================================================================

    /// Checked addition.
    ///
    /// Exact unless one operand lies more than the working precision below the
    /// other's last digit group, in which case the smaller one is dropped.
    ///
    /// # Errors
    /// Returns `ExponentOutOfRange` if a carry pushes the exponent past the bound.
    pub fn checked_add(&self, rhs: &Self) -> DecimalResult<Self> {
        if rhs.is_zero() {
            return Ok(self.clone());
        }
        if self.is_zero() {
            return Ok(rhs.clone());
        }

        if self.sign() == rhs.sign() {
            add_magnitudes(self, rhs, self.sign())
        } else {
            sub_magnitudes(self, rhs, self.sign())
        }
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `ExponentOutOfRange` if the result leaves the representable range.
    pub fn checked_sub(&self, rhs: &Self) -> DecimalResult<Self> {
        if rhs.is_zero() {
            return Ok(self.clone());
        }
        if self.is_zero() {
            return Ok(rhs.negate());
        }

        if self.sign() == rhs.sign() {
            sub_magnitudes(self, rhs, self.sign())
        } else {
            add_magnitudes(self, rhs, self.sign())
        }
    }

    // ========================================================================
    // Multiplication
    // ========================================================================

    /// Checked multiplication. Always exact.
    ///
    /// # Errors
    /// Returns `ExponentOutOfRange` if the product's exponent exceeds the bound.
    pub fn checked_mul(&self, rhs: &Self) -> DecimalResult<Self> {
        let sign = self.sign().product(rhs.sign());
        if sign == Sign::Zero {
            return Ok(Self::zero());
        }

        let (a, b) = (self.groups(), rhs.groups());
        let radix = u64::from(RADIX);

        // buffer[0] only receives the final carry of the top row.
        let mut buffer = vec![0u64; a.len() + b.len()];
        for (i, &x) in a.iter().enumerate().rev() {
            let mut carry = 0u64;
            for (j, &y) in b.iter().enumerate().rev() {
                let slot = &mut buffer[i + j + 1];
                let t = *slot + u64::from(x) * u64::from(y) + carry;
                *slot = t % radix;
                carry = t / radix;
            }
            buffer[i] += carry;
        }

        let digits: Vec<u32> = buffer.into_iter().map(|g| g as u32).collect();
        Self::normalize(sign, self.exponent() + rhs.exponent() + 1, &digits)
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Checked division at the default working precision (20 significant digits,
    /// rounded half-up).
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `ExponentOutOfRange` if the quotient leaves the representable range
    pub fn checked_div(&self, rhs: &Self) -> DecimalResult<Self> {
        divide(self, rhs, PRECISION, RoundingMode::HalfUp)
    }

    /// Checked division keeping `precision` significant digits, rounded half-up.
    /// A precision of zero selects the default.
    ///
    /// # Errors
    /// Also returns `InvalidArgument` if `precision` exceeds `MAX_CONTEXT_PRECISION`.
    pub fn checked_div_prec(&self, rhs: &Self, precision: u32) -> DecimalResult<Self> {
        let precision = if precision == 0 { PRECISION } else { precision };
        self.div_with(rhs, &Context::new(precision, RoundingMode::HalfUp))
    }

    /// Division using the precision and rounding mode of `ctx`.
    ///
    /// # Errors
    /// Also returns `InvalidArgument` if the context fails validation.
    pub fn div_with(&self, rhs: &Self, ctx: &Context) -> DecimalResult<Self> {
        ctx.validate()?;
        divide(self, rhs, ctx.precision, ctx.rounding)
    }
}

// ============================================================================
// Magnitude Helpers
// ============================================================================

/// True when `low` starts beyond the working precision past the end of `high`.
fn is_negligible(high: &Decimal, low: &Decimal) -> bool {
    let gap = high.exponent() - low.exponent();
    gap > (high.groups().len() + PRECISION_GROUPS) as i64
}

/// Copy both operands into equally long buffers sharing a leading exponent.
fn align(a: &Decimal, b: &Decimal) -> (i64, Vec<u32>, Vec<u32>) {
    let top = a.exponent().max(b.exponent());
    let offset_a = (top - a.exponent()) as usize;
    let offset_b = (top - b.exponent()) as usize;
    let len = (offset_a + a.groups().len()).max(offset_b + b.groups().len());

    let place = |offset: usize, groups: &[u32]| {
        let mut out = vec![0u32; len];
        out[offset..offset + groups.len()].copy_from_slice(groups);
        out
    };

    (top, place(offset_a, a.groups()), place(offset_b, b.groups()))
}

/// `sign × (|a| + |b|)`
fn add_magnitudes(a: &Decimal, b: &Decimal, sign: Sign) -> DecimalResult<Decimal> {
    let (high, low) = if a.exponent() >= b.exponent() {
        (a, b)
    } else {
        (b, a)
    };
    if is_negligible(high, low) {
        return Ok(high.with_sign(sign));
    }

    let (top, mut sum, addend) = align(a, b);
    let mut carry = 0u32;
    for (slot, &g) in sum.iter_mut().zip(&addend).rev() {
        let t = *slot + g + carry;
        *slot = t % RADIX;
        carry = t / RADIX;
    }

    if carry > 0 {
        sum.insert(0, carry);
        return Decimal::normalize(sign, top + 1, &sum);
    }
    Decimal::normalize(sign, top, &sum)
}

/// `sign × (|a| − |b|)`, with the sign flipped when `|b| > |a|`.
fn sub_magnitudes(a: &Decimal, b: &Decimal, sign: Sign) -> DecimalResult<Decimal> {
    if a.exponent() > b.exponent() && is_negligible(a, b) {
        return Ok(a.with_sign(sign));
    }
    if b.exponent() > a.exponent() && is_negligible(b, a) {
        return Ok(b.with_sign(sign.negate()));
    }

    let (larger, smaller, sign) = match a.cmp_abs(b) {
        Ordering::Equal => return Ok(Decimal::zero()),
        Ordering::Greater => (a, b, sign),
        Ordering::Less => (b, a, sign.negate()),
    };

    let (top, mut diff, subtrahend) = align(larger, smaller);
    let mut borrow = 0u32;
    for (slot, &g) in diff.iter_mut().zip(&subtrahend).rev() {
        let take = g + borrow;
        if *slot < take {
            *slot = *slot + RADIX - take;
            borrow = 1;
        } else {
            *slot -= take;
            borrow = 0;
        }
    }

    Decimal::normalize(sign, top, &diff)
}

// ============================================================================
// Division Helpers
// ============================================================================

fn divide(
    lhs: &Decimal,
    rhs: &Decimal,
    precision: u32,
    mode: RoundingMode,
) -> DecimalResult<Decimal> {
    if rhs.is_zero() {
        tracing::debug!(dividend = %lhs, "division by zero");
        return Err(DecimalError::DivisionByZero);
    }
    if lhs.is_zero() {
        return Ok(Decimal::zero());
    }

    let sign = if lhs.sign() == rhs.sign() {
        Sign::Positive
    } else {
        Sign::Negative
    };

    let (a, b) = (lhs.groups(), rhs.groups());
    let needed = (precision / LOG_RADIX + 2) as usize;

    // Extend the dividend with zero groups so the integer quotient carries at
    // least `needed` significant groups.
    let extension = (needed + b.len() + 1).saturating_sub(a.len());
    let mut dividend = Vec::with_capacity(a.len() + extension);
    dividend.extend_from_slice(a);
    dividend.resize(a.len() + extension, 0);

    let (quotient, inexact) = if b.len() == 1 {
        short_division(&dividend, b[0])
    } else {
        long_division(&dividend, b)
    };

    tracing::trace!(
        divisor_groups = b.len(),
        quotient_groups = quotient.len(),
        inexact,
        "division quotient computed"
    );

    // Weight of the quotient's last group.
    let base = (lhs.exponent() - a.len() as i64 + 1 - extension as i64)
        - (rhs.exponent() - b.len() as i64 + 1);
    let raw = Decimal::normalize(sign, base + quotient.len() as i64 - 1, &quotient)?;

    round_significant(&raw, precision, mode, inexact)
}

/// Long division by a single group. Returns the quotient and whether a
/// remainder was left.
fn short_division(dividend: &[u32], divisor: u32) -> (Vec<u32>, bool) {
    let radix = u64::from(RADIX);
    let divisor = u64::from(divisor);
    let mut remainder = 0u64;

    let quotient = dividend
        .iter()
        .map(|&g| {
            let current = remainder * radix + u64::from(g);
            remainder = current % divisor;
            (current / divisor) as u32
        })
        .collect();

    (quotient, remainder != 0)
}

/// Multiply groups by a small factor. Returns the overflow group separately.
fn multiply_small(groups: &[u32], factor: u32) -> (u32, Vec<u32>) {
    let radix = u64::from(RADIX);
    let mut out = groups.to_vec();
    let mut carry = 0u64;
    for slot in out.iter_mut().rev() {
        let t = u64::from(*slot) * u64::from(factor) + carry;
        *slot = (t % radix) as u32;
        carry = t / radix;
    }
    (carry as u32, out)
}

/// Base-RADIX long division for a divisor of two or more groups.
///
/// Both operands are scaled by `RADIX / (divisor[0] + 1)` so the leading divisor
/// group is large enough for the two-group quotient estimate to be off by at
/// most one, which the add-back step corrects.
fn long_division(dividend: &[u32], divisor: &[u32]) -> (Vec<u32>, bool) {
    let radix = u64::from(RADIX);
    let n = divisor.len();
    let m = dividend.len() - n;

    let scale = RADIX / (divisor[0] + 1);
    let (_, v) = multiply_small(divisor, scale);
    let (overflow, scaled) = multiply_small(dividend, scale);

    let mut u = Vec::with_capacity(scaled.len() + 1);
    u.push(overflow);
    u.extend(scaled);

    let (v0, v1) = (u64::from(v[0]), u64::from(v[1]));
    let mut quotient = vec![0u32; m + 1];

    for j in 0..=m {
        let window = u64::from(u[j]) * radix + u64::from(u[j + 1]);
        let mut qhat = window / v0;
        let mut rhat = window % v0;

        while qhat >= radix || qhat * v1 > rhat * radix + u64::from(u[j + 2]) {
            qhat -= 1;
            rhat += v0;
            if rhat >= radix {
                break;
            }
        }

        // u[j..=j + n] -= qhat × v
        let mut carry = 0u64;
        let mut borrow = 0u64;
        for i in (0..n).rev() {
            let product = qhat * u64::from(v[i]) + carry;
            carry = product / radix;
            let take = product % radix + borrow;
            let slot = &mut u[j + i + 1];
            if u64::from(*slot) < take {
                *slot = (u64::from(*slot) + radix - take) as u32;
                borrow = 1;
            } else {
                *slot = (u64::from(*slot) - take) as u32;
                borrow = 0;
            }
        }

        let take = carry + borrow;
        if u64::from(u[j]) < take {
            // Estimate overshot by one: add the divisor back.
            qhat -= 1;
            let mut carry = 0u32;
            for i in (0..n).rev() {
                let slot = &mut u[j + i + 1];
                let t = *slot + v[i] + carry;
                *slot = t % RADIX;
                carry = t / RADIX;
            }
            u[j] = ((u64::from(u[j]) + radix - take + u64::from(carry)) % radix) as u32;
        } else {
            u[j] = (u64::from(u[j]) - take) as u32;
        }

        quotient[j] = qhat as u32;
    }

    let inexact = u.iter().any(|&g| g != 0);
    (quotient, inexact)
}

// ============================================================================
// Operator Traits
// ============================================================================

impl Neg for Decimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// Infallible operators for ergonomics (panic on error - use checked_* in production)
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $checked:ident, $what:literal) => {
        impl $trait<&Decimal> for &Decimal {
            type Output = Decimal;

            fn $method(self, rhs: &Decimal) -> Self::Output {
                self.$checked(rhs).expect(concat!("Decimal ", $what, " failed"))
            }
        }

        impl $trait for Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: Decimal) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&Decimal> for Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: &Decimal) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

forward_binop!(Add, add, checked_add, "addition");
forward_binop!(Sub, sub, checked_sub, "subtraction");
forward_binop!(Mul, mul, checked_mul, "multiplication");
forward_binop!(Div, div, checked_div, "division");

// ============================================================================
// Tests
// ============================================================================
