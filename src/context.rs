// ============================================================================
// Arithmetic Context
// Precision and rounding configuration for division and explicit rounding
// ============================================================================

use crate::numeric::{DecimalError, DecimalResult, RoundingMode, PRECISION};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest precision a context accepts, in significant digits.
pub const MAX_CONTEXT_PRECISION: u32 = 1_000_000;

/// Precision and rounding policy applied by `div_with` and `round_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Context {
    /// Significant decimal digits kept in a rounded result
    pub precision: u32,

    /// How the discarded tail is resolved
    pub rounding: RoundingMode,
}

impl Default for Context {
    /// 20 significant digits, half-up.
    fn default() -> Self {
        Self::new(PRECISION, RoundingMode::HalfUp)
    }
}

impl Context {
    pub const fn new(precision: u32, rounding: RoundingMode) -> Self {
        Self {
            precision,
            rounding,
        }
    }

    /// Builder method: Set precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> DecimalResult<()> {
        if self.precision == 0 || self.precision > MAX_CONTEXT_PRECISION {
            tracing::debug!(precision = self.precision, "rejected context precision");
            return Err(DecimalError::invalid(format_args!(
                "precision {} outside 1..={MAX_CONTEXT_PRECISION}",
                self.precision
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Preset Contexts (IEEE 754-2008 decimal interchange formats)
// ============================================================================

impl Context {
    /// 7 digits, half-even
    pub const fn decimal32() -> Self {
        Self::new(7, RoundingMode::HalfEven)
    }

    /// 16 digits, half-even
    pub const fn decimal64() -> Self {
        Self::new(16, RoundingMode::HalfEven)
    }

    /// 34 digits, half-even
    pub const fn decimal128() -> Self {
        Self::new(34, RoundingMode::HalfEven)
    }
}
