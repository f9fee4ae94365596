//! Property-based tests for mixed-number rational arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Rational, RationalError};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), small_int(), non_zero_int())
            .prop_map(|(w, n, d)| Rational::new(w, n, d).unwrap())
    }

    proptest! {
        // Canonical form invariants

        #[test]
        fn normalization_is_idempotent(x in rational()) {
            let renormalized =
                Rational::new(x.whole(), x.numerator(), x.denominator()).unwrap();
            prop_assert_eq!(renormalized, x);
        }

        #[test]
        fn canonical_form_is_well_formed(x in rational()) {
            prop_assert!(x.denominator() > 0);
            prop_assert!(x.numerator().abs() < x.denominator());
            if x.whole() != 0 && x.numerator() != 0 {
                prop_assert_eq!(x.whole().signum(), x.numerator().signum());
            }
        }

        #[test]
        fn equivalent_triples_normalize_equal(
            w in small_int(),
            n in small_int(),
            d in non_zero_int()
        ) {
            let mixed = Rational::new(w, n, d).unwrap();
            let improper = Rational::new(0, w * d + n, d).unwrap();
            prop_assert_eq!(mixed, improper);
        }

        #[test]
        fn to_f64_matches_components(
            w in small_int(),
            n in small_int(),
            d in non_zero_int()
        ) {
            #[allow(clippy::cast_precision_loss)]
            let expected = w as f64 + n as f64 / d as f64;
            let actual = Rational::new(w, n, d).unwrap().to_f64();
            prop_assert!((actual - expected).abs() < 1e-9);
        }

        #[test]
        fn abs_is_non_negative(x in rational()) {
            prop_assert!(x.abs().to_f64() >= 0.0);
            prop_assert!(!x.abs().is_negative());
        }

        // Field-style axioms over the checked operations

        #[test]
        fn add_is_commutative(x in rational(), y in rational()) {
            prop_assert_eq!(x.add(y).unwrap(), y.add(x).unwrap());
        }

        #[test]
        fn add_zero_is_identity(x in rational()) {
            prop_assert_eq!(x.add(Rational::ZERO).unwrap(), x);
            prop_assert_eq!(x.add(0).unwrap(), x);
        }

        #[test]
        fn additive_inverse_cancels(x in rational()) {
            let negated = x.multiply(-1).unwrap();
            prop_assert_eq!(x.add(negated).unwrap(), Rational::ZERO);
        }

        #[test]
        fn subtract_self_is_zero(x in rational()) {
            prop_assert_eq!(x.subtract(x).unwrap(), Rational::ZERO);
        }

        #[test]
        fn multiply_then_divide_round_trips(x in rational(), y in rational()) {
            if y == Rational::ZERO {
                prop_assert_eq!(x.divide(y), Err(RationalError::DivisionByZero));
            } else {
                prop_assert_eq!(x.multiply(y).unwrap().divide(y).unwrap(), x);
            }
        }

        #[test]
        fn integer_operands_match_rational_operands(
            x in rational(),
            k in small_int()
        ) {
            let as_rational = Rational::from(k);
            prop_assert_eq!(x.add(k).unwrap(), x.add(as_rational).unwrap());
            prop_assert_eq!(x.subtract(k).unwrap(), x.subtract(as_rational).unwrap());
            prop_assert_eq!(x.multiply(k).unwrap(), x.multiply(as_rational).unwrap());
        }
    }
}
