// ============================================================================
// Digit-Group Decimal
// Immutable arbitrary-precision decimal stored as base-100000 digit groups
// ============================================================================

use super::errors::{DecimalError, DecimalResult};
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Base of a single digit group.
pub const RADIX: u32 = 100_000;

/// Number of decimal digits packed into one group.
pub const LOG_RADIX: u32 = 5;

/// Default working precision in significant decimal digits.
pub const PRECISION: u32 = 20;

/// Largest magnitude allowed for the group exponent.
pub const MAX_EXPONENT: i64 = 9_007_199_254_740_991 / LOG_RADIX as i64;

/// Working precision expressed in groups, rounded up.
pub(crate) const PRECISION_GROUPS: usize = PRECISION.div_ceil(LOG_RADIX) as usize;

/// Digit groups, most significant first. Small values stay inline.
pub(crate) type Groups = SmallVec<[u32; 4]>;

/// Powers of ten that fit inside one group, indexed by exponent.
pub(crate) const POW10: [u32; 6] = [1, 10, 100, 1_000, 10_000, 100_000];

/// Number of decimal digits in a single group value (at least 1).
#[inline]
pub(crate) fn group_digits(group: u32) -> u32 {
    match group {
        0..=9 => 1,
        10..=99 => 2,
        100..=999 => 3,
        1_000..=9_999 => 4,
        _ => 5,
    }
}

// ============================================================================
// Sign
// ============================================================================

/// Sign of a [`Decimal`]. `Zero` is reserved for the canonical zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Sign {
    /// Numeric form: -1, 0 or 1.
    #[inline]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// Parse the numeric form back into a sign.
    pub fn from_i8(value: i8) -> DecimalResult<Self> {
        match value {
            -1 => Ok(Sign::Negative),
            0 => Ok(Sign::Zero),
            1 => Ok(Sign::Positive),
            other => Err(DecimalError::invalid(format_args!("sign {other}"))),
        }
    }

    #[inline]
    pub const fn negate(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    /// Sign of a product.
    #[inline]
    pub const fn product(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (Sign::Negative, Sign::Negative) | (Sign::Positive, Sign::Positive) => {
                Sign::Positive
            }
            _ => Sign::Negative,
        }
    }
}

// ============================================================================
// Decimal
// ============================================================================

/// Arbitrary-precision decimal number.
///
/// The value is `sign × Σ groups[i] × RADIX^(exponent − i)`, where every group lies
/// in `[0, RADIX)` and packs five decimal digits.
///
/// Values are always canonical:
/// - zero is exactly `{ Zero, 0, [0] }`
/// - otherwise the first and last groups are non-zero
/// - `|exponent| <= MAX_EXPONENT`
///
/// Because of this, structural equality is numeric equality and `Eq`/`Hash` are
/// derived directly from the fields.
///
/// # Example
/// ```
/// use radix_decimal::numeric::Decimal;
///
/// let a: Decimal = "0.1".parse()?;
/// let b: Decimal = "0.2".parse()?;
/// assert_eq!(a.checked_add(&b)?.to_string(), "0.3");
/// # Ok::<(), radix_decimal::numeric::DecimalError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "DecimalParts", into = "DecimalParts")
)]
pub struct Decimal {
    sign: Sign,
    exponent: i64,
    groups: Groups,
}

/// Raw fields of a [`Decimal`], used for persistence and validated construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalParts {
    /// -1, 0 or 1
    pub sign: i8,
    /// Exponent of the leading group
    pub exponent: i64,
    /// Digit groups, most significant first
    pub groups: Vec<u32>,
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The canonical zero.
    #[inline]
    pub fn zero() -> Self {
        Self {
            sign: Sign::Zero,
            exponent: 0,
            groups: smallvec![0],
        }
    }

    /// One (1).
    #[inline]
    pub fn one() -> Self {
        Self {
            sign: Sign::Positive,
            exponent: 0,
            groups: smallvec![1],
        }
    }

    /// Build a value from raw parts, rejecting anything that is not already canonical.
    ///
    /// # Errors
    /// - `InvalidArgument` if a group is out of range, the sign disagrees with the
    ///   digits, or leading/trailing zero groups are present
    /// - `ExponentOutOfRange` if `|exponent| > MAX_EXPONENT`
    pub fn from_parts(sign: i8, exponent: i64, groups: &[u32]) -> DecimalResult<Self> {
        let sign = Sign::from_i8(sign)?;

        if groups.is_empty() {
            return Err(DecimalError::invalid("empty digit groups"));
        }
        if let Some(bad) = groups.iter().find(|&&g| g >= RADIX) {
            return Err(DecimalError::invalid(format_args!("digit group {bad}")));
        }

        if sign == Sign::Zero {
            return if exponent == 0 && groups == [0] {
                Ok(Self::zero())
            } else {
                Err(DecimalError::invalid("non-canonical zero"))
            };
        }

        let first = groups[0];
        let last = groups[groups.len() - 1];
        if first == 0 || last == 0 {
            return Err(DecimalError::invalid("leading or trailing zero digit group"));
        }
        check_exponent(exponent)?;

        Ok(Self {
            sign,
            exponent,
            groups: Groups::from_slice(groups),
        })
    }

    /// Canonicalize scratch output from an arithmetic routine.
    ///
    /// Strips leading zero groups (one exponent step each) and trailing zero groups,
    /// collapses an empty result to zero, and enforces the exponent bound.
    pub(crate) fn normalize(sign: Sign, mut exponent: i64, digits: &[u32]) -> DecimalResult<Self> {
        let start = digits.iter().position(|&g| g != 0);
        let Some(start) = start else {
            return Ok(Self::zero());
        };
        if sign == Sign::Zero {
            return Ok(Self::zero());
        }

        let end = digits.iter().rposition(|&g| g != 0).unwrap_or(start) + 1;
        exponent -= start as i64;
        check_exponent(exponent)?;

        Ok(Self {
            sign,
            exponent,
            groups: Groups::from_slice(&digits[start..end]),
        })
    }

    /// Same digits under a different sign. Zero stays canonical.
    #[inline]
    pub(crate) fn with_sign(&self, sign: Sign) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        Self {
            sign,
            exponent: self.exponent,
            groups: self.groups.clone(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Exponent of the leading digit group.
    #[inline]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Digit groups, most significant first.
    #[inline]
    pub fn groups(&self) -> &[u32] {
        &self.groups
    }

    /// Raw fields, enough to rebuild the value with [`Decimal::from_parts`].
    pub fn to_parts(&self) -> DecimalParts {
        DecimalParts {
            sign: self.sign.as_i8(),
            exponent: self.exponent,
            groups: self.groups.to_vec(),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Base-10 exponent of the most significant digit.
    ///
    /// `123.45` has a base-10 exponent of 2, `0.00123` of -3.
    pub fn exponent_base10(&self) -> i64 {
        self.exponent * LOG_RADIX as i64 + group_digits(self.groups[0]) as i64 - 1
    }

    /// Count of significant decimal digits (trailing zeros excluded).
    pub fn significant_digits(&self) -> u64 {
        if self.is_zero() {
            return 1;
        }
        let last = self.groups[self.groups.len() - 1];
        let trailing = (0..LOG_RADIX)
            .take_while(|&i| last % POW10[i as usize + 1] == 0)
            .count() as u64;
        let full = (self.groups.len() as u64 - 1) * LOG_RADIX as u64;
        group_digits(self.groups[0]) as u64 + full - trailing
    }

    // ========================================================================
    // Sign Operations
    // ========================================================================

    /// Absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        match self.sign {
            Sign::Negative => self.with_sign(Sign::Positive),
            _ => self.clone(),
        }
    }

    /// Flip the sign; zero stays zero.
    #[inline]
    pub fn negate(&self) -> Self {
        self.with_sign(self.sign.negate())
    }

    /// Structural equality of the canonical forms.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare magnitudes, ignoring sign.
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        self.exponent
            .cmp(&other.exponent)
            .then_with(|| self.groups.as_slice().cmp(other.groups.as_slice()))
    }
}

/// Enforce the group exponent bound.
#[inline]
pub(crate) fn check_exponent(exponent: i64) -> DecimalResult<()> {
    if exponent > MAX_EXPONENT || exponent < -MAX_EXPONENT {
        tracing::debug!(exponent, "decimal exponent out of range");
        return Err(DecimalError::ExponentOutOfRange(exponent));
    }
    Ok(())
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sign.cmp(&other.sign).then_with(|| match self.sign {
            Sign::Zero => Ordering::Equal,
            Sign::Positive => self.cmp_abs(other),
            Sign::Negative => other.cmp_abs(self),
        })
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decimal({}, sign={}, exp={}, groups={:?})",
            self,
            self.sign.as_i8(),
            self.exponent,
            self.groups.as_slice()
        )
    }
}

impl TryFrom<DecimalParts> for Decimal {
    type Error = DecimalError;

    fn try_from(parts: DecimalParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts.sign, parts.exponent, &parts.groups)
    }
}

impl From<Decimal> for DecimalParts {
    fn from(value: Decimal) -> Self {
        value.to_parts()
    }
}

// ============================================================================
// Tests
// ============================================================================
