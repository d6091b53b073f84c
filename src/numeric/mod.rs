// ============================================================================
// Numeric Module
// Arbitrary-precision decimal arithmetic over base-100000 digit groups
// ============================================================================
//
// This module provides:
// - Decimal: immutable sign / exponent / digit-group value
// - parse: text, f64 or existing value into a canonical Decimal
// - checked add / sub / mul / div, rounding and canonical formatting
// - DecimalError: error types for every fallible operation
//
// Design principles:
// - Exact results; only division and explicit rounding discard digits
// - All arithmetic returns Result (operator traits are the panicking convenience)
// - Inputs are never mutated; scratch buffers are owned by each operation

mod arithmetic;
mod decimal;
mod errors;
mod format;
mod interop;
mod parse;
mod rounding;

pub use decimal::{Decimal, DecimalParts, Sign, LOG_RADIX, MAX_EXPONENT, PRECISION, RADIX};
pub use errors::{DecimalError, DecimalResult};
pub use format::{Notation, EXPONENT_NEGATIVE, EXPONENT_POSITIVE};
pub use parse::{parse, DecimalInput};
pub use rounding::RoundingMode;
