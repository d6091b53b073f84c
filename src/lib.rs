// ============================================================================
// Radix Decimal Library
// Exact arbitrary-precision decimal arithmetic over base-100000 digit groups
// ============================================================================

//! # Radix Decimal
//!
//! An arbitrary-precision decimal number engine that never touches binary
//! floating point for its arithmetic.
//!
//! ## Features
//!
//! - **Exact representation** of decimal text: `0.1 + 0.2` is `0.3`
//! - **Immutable values**: every operation returns a fresh [`Decimal`](numeric::Decimal)
//! - **Long division** to a configurable number of significant digits
//! - **Rounding** to significant digits or decimal places, seven rounding modes
//! - **Canonical formatting** with automatic exponential notation
//!
//! ## Example
//!
//! ```rust
//! use radix_decimal::prelude::*;
//!
//! let a = parse(745834720.0001)?;
//! let b = parse("423.0002")?;
//! assert_eq!(a.checked_add(&b)?.to_string(), "745835143.0003");
//!
//! let third = Decimal::one().checked_div(&Decimal::from(3))?;
//! assert_eq!(third.to_string(), "0.33333333333333333333");
//!
//! let ctx = Context::default().with_precision(5);
//! assert_eq!(Decimal::from(2).div_with(&Decimal::from(3), &ctx)?.to_string(), "0.66667");
//! # Ok::<(), DecimalError>(())
//! ```

pub mod context;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::context::Context;
    pub use crate::numeric::{
        parse, Decimal, DecimalError, DecimalInput, DecimalResult, Notation, RoundingMode, Sign,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_float_sum_scenario() {
        let a = parse(745834720.0001).unwrap();
        let b = parse(423.0002).unwrap();
        let sum = a.checked_add(&b).unwrap();

        assert_eq!(sum.to_canonical_string(), "745835143.0003");
        assert!(sum.equals(&dec("745835143.0003")));
    }

    #[test]
    fn test_no_binary_drift() {
        let sum = dec("0.1").checked_add(&dec("0.2")).unwrap();
        assert_eq!(sum.to_string(), "0.3");
        assert_eq!(sum, dec("0.3"));
    }

    #[test]
    fn test_one_third() {
        let third = parse(1.0)
            .unwrap()
            .checked_div(&parse(3.0).unwrap())
            .unwrap();
        assert_eq!(third.to_string(), "0.33333333333333333333");
        assert_eq!(third.significant_digits(), 20);
    }

    #[test]
    fn test_signed_zero() {
        let negative = parse(-0.0).unwrap();
        let positive = parse(0.0).unwrap();

        assert_eq!(negative, Decimal::zero());
        assert_eq!(positive, Decimal::zero());
        assert!(negative.is_zero());
        assert_eq!(negative.to_string(), "0");
        assert_eq!(positive.to_string(), "0");
    }

    #[test]
    fn test_chained_arithmetic() {
        // (1.1 * 3 - 0.3) / 1.5 = 2
        let result = dec("1.1")
            .checked_mul(&dec("3"))
            .and_then(|x| x.checked_sub(&dec("0.3")))
            .and_then(|x| x.checked_div(&dec("1.5")))
            .unwrap();
        assert_eq!(result, Decimal::from(2));
    }

    #[test]
    fn test_interop_boundaries() {
        let price = rust_decimal::Decimal::new(5000025, 2); // 50000.25
        let qty = Decimal::try_from(rust_decimal::Decimal::new(3, 0)).unwrap();
        let notional = Decimal::try_from(price).unwrap().checked_mul(&qty).unwrap();

        assert_eq!(notional.to_string(), "150000.75");
        assert_eq!(
            notional.to_rust_decimal().unwrap(),
            rust_decimal::Decimal::new(15000075, 2)
        );
        assert_eq!(notional.to_f64(), 150000.75);
    }

    #[test]
    fn test_values_are_shareable_across_threads() {
        use std::sync::Arc;

        let base = Arc::new(dec("1.000001"));
        let handles: Vec<_> = (1..=4)
            .map(|i| {
                let base = Arc::clone(&base);
                std::thread::spawn(move || base.checked_mul(&Decimal::from(i)).unwrap())
            })
            .collect();

        let results: Vec<Decimal> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results[3], dec("4.000004"));
        assert_eq!(*base, dec("1.000001"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let x = dec("-745834720.0001");
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, r#"{"sign":-1,"exponent":1,"groups":[7458,34720,10]}"#);

        let back: Decimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);

        let broken = r#"{"sign":1,"exponent":0,"groups":[0,5]}"#;
        assert!(serde_json::from_str::<Decimal>(broken).is_err());

        let ctx: Context =
            serde_json::from_str(r#"{"precision":7,"rounding":"HalfEven"}"#).unwrap();
        assert_eq!(ctx, Context::decimal32());
    }
}

#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use proptest::prelude::*;

    /// Decimal text with an optional exponent.
    fn decimal_text() -> impl Strategy<Value = String> {
        "-?[0-9]{1,25}(\\.[0-9]{0,25})?(e-?[0-9]{1,2})?"
    }

    /// Decimal text without an exponent: operands stay within working precision
    /// of each other, so addition is exact.
    fn plain_text() -> impl Strategy<Value = String> {
        "-?[0-9]{1,12}(\\.[0-9]{0,12})?"
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    proptest! {
        #[test]
        fn canonical_text_round_trips(s in decimal_text()) {
            let x = dec(&s);
            let text = x.to_canonical_string();
            prop_assert_eq!(dec(&text), x.clone());
            prop_assert!(x.equals(&parse(text.as_str()).unwrap()));
        }

        #[test]
        fn addition_commutes(a in decimal_text(), b in decimal_text()) {
            let (a, b) = (dec(&a), dec(&b));
            prop_assert_eq!(a.checked_add(&b).unwrap(), b.checked_add(&a).unwrap());
        }

        #[test]
        fn zero_identities(s in decimal_text()) {
            let a = dec(&s);
            prop_assert_eq!(a.checked_add(&Decimal::zero()).unwrap(), a.clone());
            prop_assert_eq!(a.checked_mul(&Decimal::zero()).unwrap(), Decimal::zero());
            prop_assert_eq!(a.checked_sub(&a).unwrap(), Decimal::zero());
        }

        #[test]
        fn subtraction_undoes_addition(a in plain_text(), b in plain_text()) {
            let (a, b) = (dec(&a), dec(&b));
            let sum = a.checked_add(&b).unwrap();
            prop_assert_eq!(sum.checked_sub(&b).unwrap(), a);
        }

        #[test]
        fn multiplication_commutes(a in decimal_text(), b in decimal_text()) {
            let (a, b) = (dec(&a), dec(&b));
            prop_assert_eq!(a.checked_mul(&b).unwrap(), b.checked_mul(&a).unwrap());
            prop_assert_eq!(a.checked_mul(&Decimal::one()).unwrap(), a);
        }

        #[test]
        fn division_by_zero_iff_zero_divisor(a in decimal_text(), b in decimal_text()) {
            let (a, b) = (dec(&a), dec(&b));
            let result = a.checked_div(&b);
            prop_assert_eq!(result == Err(DecimalError::DivisionByZero), b.is_zero());
        }

        #[test]
        fn quotient_fits_working_precision(a in decimal_text(), b in decimal_text()) {
            let (a, b) = (dec(&a), dec(&b));
            prop_assume!(!b.is_zero());
            let q = a.checked_div(&b).unwrap();
            prop_assert!(q.significant_digits() <= 20);
        }

        #[test]
        fn exact_division_recovers_factor(a in plain_text(), b in plain_text()) {
            let (a, b) = (dec(&a), dec(&b));
            prop_assume!(!b.is_zero());
            // Both factors carry at most 24 significant digits; the quotient is exact
            // whenever the precision covers them.
            let product = a.checked_mul(&b).unwrap();
            prop_assert_eq!(product.checked_div_prec(&b, 30).unwrap(), a);
        }

        #[test]
        fn ordering_matches_difference_sign(a in decimal_text(), b in decimal_text()) {
            let (a, b) = (dec(&a), dec(&b));
            let diff = a.checked_sub(&b).unwrap();
            let expected = match a.cmp(&b) {
                std::cmp::Ordering::Less => Sign::Negative,
                std::cmp::Ordering::Equal => Sign::Zero,
                std::cmp::Ordering::Greater => Sign::Positive,
            };
            prop_assert_eq!(diff.sign(), expected);
        }
    }

    #[test]
    fn integer_arithmetic_matches_i128() {
        fn check(a: i64, b: i64) -> bool {
            let (x, y) = (Decimal::from(a), Decimal::from(b));
            let wide = |v: i128| v.to_string().parse::<Decimal>().unwrap();

            x.checked_add(&y).unwrap() == wide(i128::from(a) + i128::from(b))
                && x.checked_sub(&y).unwrap() == wide(i128::from(a) - i128::from(b))
                && x.checked_mul(&y).unwrap() == wide(i128::from(a) * i128::from(b))
        }

        quickcheck::quickcheck(check as fn(i64, i64) -> bool);
    }
}
